//! The player's ice-cream cone

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Scoop radius for a remaining melt fraction (linear between min and max)
#[inline]
pub fn scoop_radius(fraction: f32, min_radius: f32, max_radius: f32) -> f32 {
    min_radius + fraction.clamp(0.0, 1.0) * (max_radius - min_radius)
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    /// Center of the cone in arena coordinates (y grows downward)
    pub pos: Vec2,
    /// Full cone size, constant
    pub base_size: f32,
    /// Current scoop radius (derived from the melt meter every tick)
    pub radius: f32,
}

impl Cone {
    pub fn new(pos: Vec2, base_size: f32, radius: f32) -> Self {
        Self {
            pos,
            base_size,
            radius,
        }
    }

    /// Move by a displacement already scaled by speed
    pub fn apply_movement(&mut self, displacement: Vec2) {
        if displacement.is_finite() {
            self.pos += displacement;
        }
    }

    /// Keep a circle of `radius` fully inside `[0,width]×[0,height]`
    ///
    /// An axis narrower than the circle pins the cone to that axis' center.
    pub fn clamp_to_bounds(&mut self, width: f32, height: f32, radius: f32) {
        self.pos.x = clamp_axis(self.pos.x, width, radius);
        self.pos.y = clamp_axis(self.pos.y, height, radius);
    }

    /// Recompute the scoop radius from the meter fraction
    pub fn update_radius(&mut self, fraction: f32, min_radius: f32, max_radius: f32) {
        self.radius = scoop_radius(fraction, min_radius, max_radius);
    }
}

fn clamp_axis(value: f32, extent: f32, radius: f32) -> f32 {
    if radius * 2.0 >= extent {
        extent / 2.0
    } else {
        value.clamp(radius, extent - radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoop_radius_interpolates() {
        assert_eq!(scoop_radius(1.0, 10.0, 30.0), 30.0);
        assert_eq!(scoop_radius(0.0, 10.0, 30.0), 10.0);
        assert_eq!(scoop_radius(0.5, 10.0, 30.0), 20.0);
        // Negative meter never shrinks below min
        assert_eq!(scoop_radius(-0.2, 10.0, 30.0), 10.0);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let mut cone = Cone::new(Vec2::new(400.0, 300.0), 60.0, 30.0);
        cone.apply_movement(Vec2::new(-1000.0, 1000.0));
        cone.clamp_to_bounds(800.0, 600.0, 30.0);
        assert_eq!(cone.pos, Vec2::new(30.0, 570.0));
    }

    #[test]
    fn test_clamp_in_narrow_arena_centers() {
        let mut cone = Cone::new(Vec2::new(5.0, 5.0), 60.0, 30.0);
        cone.clamp_to_bounds(40.0, 600.0, 30.0);
        assert_eq!(cone.pos.x, 20.0);
        assert_eq!(cone.pos.y, 30.0);
    }

    #[test]
    fn test_non_finite_movement_ignored() {
        let mut cone = Cone::new(Vec2::new(100.0, 100.0), 60.0, 30.0);
        cone.apply_movement(Vec2::new(f32::NAN, 1.0));
        assert_eq!(cone.pos, Vec2::new(100.0, 100.0));
    }
}
