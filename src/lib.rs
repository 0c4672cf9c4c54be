//! Cone Melt - An ice-cream cone arcade game
//!
//! Core modules:
//! - `sim`: Simulation (meter, pools, collisions, game session)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and input devices live outside this crate; they talk to the
//! simulation through `sim::TickInput`/`sim::InputState` and `sim::RenderSnapshot`.

pub mod sim;
pub mod tuning;

pub use tuning::{SpawnPolicy, Tuning};

use glam::Vec2;

/// Game configuration constants (defaults for `Tuning`)
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Cone defaults - base size is the full cone, scoop shrinks as it melts
    pub const CONE_BASE_SIZE: f32 = 60.0;
    pub const SCOOP_MIN_RADIUS: f32 = 10.0;
    pub const SCOOP_MAX_RADIUS: f32 = 30.0;
    /// Units moved per tick per axis at full input
    pub const CONE_SPEED: f32 = 5.0;

    /// Melt meter
    pub const MELT_MAX: f64 = 100.0;
    pub const MELT_DECAY_PER_TICK: f64 = 0.05;
    pub const MELT_REWARD: f64 = 20.0;
    pub const SUN_PENALTY: f64 = 20.0;
    /// Below this fraction of max the scoop drips
    pub const DRIP_THRESHOLD: f64 = 0.8;

    /// Score per sprinkle eaten
    pub const SPRINKLE_SCORE: u64 = 10;

    /// Sprinkle defaults
    pub const MAX_SPRINKLES: usize = 15;
    pub const SPRINKLE_SIZE: f32 = 15.0;
    pub const SPRINKLE_SHRINK_PER_TICK: f32 = 0.5;
    /// Eaten sprinkles expire once their burst age passes this
    pub const SPRINKLE_BURST_LIMIT: u32 = 20;
    /// Spawn inset from the arena edge
    pub const SPRINKLE_SPAWN_MARGIN: f32 = 10.0;
    /// Burst drift speed range (each axis in [-x, x])
    pub const SPRINKLE_BURST_SPEED: f32 = 2.0;

    /// Sun defaults
    pub const MAX_SUNS: usize = 3;
    pub const SUN_SIZE: f32 = 30.0;
    /// Drift policy: fall speed range
    pub const SUN_FALL_MIN: f32 = 1.0;
    pub const SUN_FALL_MAX: f32 = 2.0;
    /// Drift policy: horizontal drift range (in [-x, x])
    pub const SUN_DRIFT: f32 = 1.0;
    /// Drift policy: spawn height above the top edge
    pub const SUN_SPAWN_Y: f32 = -20.0;
    /// Aimed policy: speed toward the cone
    pub const SUN_AIMED_SPEED: f32 = 2.0;
    /// Combined-radius multiplier for sun hits (< 1.0 is more forgiving)
    pub const SUN_HITBOX_SCALE: f32 = 1.0;

    /// Delta-time scaling (opt-in)
    pub const REFERENCE_DT: f32 = 1.0 / 60.0;
    /// Maximum frame scale to prevent huge jumps after a stall
    pub const MAX_FRAME_SCALE: f32 = 4.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// True when the point lies within `margin` of the `[0,width]×[0,height]` box
#[inline]
pub fn within_margin(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x >= -margin && pos.x <= width + margin && pos.y >= -margin && pos.y <= height + margin
}
