//! Simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod cone;
pub mod input;
pub mod meter;
pub mod snapshot;
pub mod sprinkles;
pub mod state;
pub mod suns;
pub mod tick;

pub use collision::circles_overlap;
pub use cone::{Cone, scoop_radius};
pub use input::{Direction, InputState};
pub use meter::MeltMeter;
pub use snapshot::{ConeView, RenderSnapshot, SprinkleView, SunView};
pub use sprinkles::{ShapeVariant, Sprinkle, SprinklePool};
pub use state::{GameEvent, GamePhase, GameState};
pub use suns::{Sun, SunPool};
pub use tick::{TickInput, tick};
