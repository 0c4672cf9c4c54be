//! Collision detection
//!
//! Everything in the arena collides as a circle. Sprinkle shapes and sun rays
//! are visual only; `size` stands in for the diameter.

use glam::Vec2;

/// Check whether two circles overlap
///
/// `scale` shrinks (or grows) the combined radius; suns use it to get a
/// hitbox smaller than what is drawn. Touching edges do not count.
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32, scale: f32) -> bool {
    crate::distance(a, b) < (radius_a + radius_b) * scale
}

/// Unit vector from `from` toward `to`, or `fallback` if they coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2, fallback: Vec2) -> Vec2 {
    let delta = to - from;
    if delta.length_squared() > f32::EPSILON {
        delta.normalize()
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Vec2::new(100.0, 100.0);
        assert!(circles_overlap(a, 30.0, Vec2::new(120.0, 100.0), 7.5, 1.0));
        assert!(!circles_overlap(a, 30.0, Vec2::new(200.0, 100.0), 7.5, 1.0));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = Vec2::ZERO;
        let b = Vec2::new(10.0, 0.0);
        assert!(!circles_overlap(a, 5.0, b, 5.0, 1.0));
    }

    #[test]
    fn test_scaled_hitbox_is_more_forgiving() {
        let a = Vec2::ZERO;
        let b = Vec2::new(40.0, 0.0);
        // Combined radius 45: hit at full size, miss at 0.8x (36)
        assert!(circles_overlap(a, 30.0, b, 15.0, 1.0));
        assert!(!circles_overlap(a, 30.0, b, 15.0, 0.8));
    }

    #[test]
    fn test_direction_to() {
        let dir = direction_to(Vec2::ZERO, Vec2::new(3.0, 4.0), Vec2::Y);
        assert!((dir - Vec2::new(0.6, 0.8)).length() < 1e-6);
        assert_eq!(direction_to(Vec2::ONE, Vec2::ONE, Vec2::Y), Vec2::Y);
    }
}
