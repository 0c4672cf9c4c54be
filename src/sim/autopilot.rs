//! Demo mode - the computer plays
//!
//! Heads for the nearest uneaten sprinkle and shies away from nearby suns.
//! Good enough for attract screens and headless soak runs.

use glam::Vec2;

use super::state::GameState;

/// Suns closer than this push the cone away
pub const DANGER_RADIUS: f32 = 120.0;
/// How much a sun at point-blank range outweighs a sprinkle
const FEAR: f32 = 2.0;

/// Pick a steering direction (length <= 1) for the current state
pub fn steer(state: &GameState) -> Vec2 {
    let cone = state.cone.pos;

    let mut desire = state
        .sprinkles
        .iter()
        .filter(|s| !s.eaten)
        .min_by(|a, b| {
            (a.pos - cone)
                .length_squared()
                .partial_cmp(&(b.pos - cone).length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|s| (s.pos - cone).normalize_or_zero())
        .unwrap_or(Vec2::ZERO);

    for sun in state.suns.iter() {
        let away = cone - sun.pos;
        let dist = away.length();
        if dist < DANGER_RADIUS {
            let urgency = (DANGER_RADIUS - dist) / DANGER_RADIUS;
            desire += away.normalize_or_zero() * urgency * FEAR;
        }
    }

    desire.normalize_or_zero()
}
