//! Sun pool
//!
//! Suns cross the arena and melt the cone on contact. A sun that leaves the
//! arena or hits the cone is replaced immediately, so the pool size never
//! changes between ticks.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{circles_overlap, direction_to};
use super::state::GameEvent;
use crate::consts::SUN_SPAWN_Y;
use crate::{SpawnPolicy, Tuning, within_margin};

/// A moving hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sun {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Diameter
    pub size: f32,
    /// Reflect off the left/right walls (drift policy)
    pub bounces: bool,
}

impl Sun {
    pub fn update(&mut self, arena_width: f32, scale: f32) {
        self.pos += self.vel * scale;

        let half = self.size / 2.0;
        if !self.bounces || arena_width <= self.size {
            return;
        }
        if self.pos.x - half < 0.0 {
            self.pos.x = half;
            self.vel.x = -self.vel.x;
        } else if self.pos.x + half > arena_width {
            self.pos.x = arena_width - half;
            self.vel.x = -self.vel.x;
        }
    }
}

/// How far outside the arena a sun may travel before it is culled
///
/// Always covers the drift spawn height so new suns are never culled at birth.
pub fn exit_margin(tuning: &Tuning) -> f32 {
    tuning.sun_size.max(-SUN_SPAWN_Y)
}

/// Fixed-capacity sun collection
#[derive(Debug, Clone)]
pub struct SunPool {
    capacity: usize,
    members: Vec<Sun>,
    next_id: u32,
}

impl SunPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sun> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sun> {
        self.members.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Sun> {
        self.members.iter().find(|s| s.id == id)
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.next_id = 1;
    }

    /// Insert a sun according to the configured spawn policy
    ///
    /// `target` is the cone position, used by the aimed policy.
    pub fn spawn_one(&mut self, rng: &mut Pcg32, tuning: &Tuning, target: Vec2) -> u32 {
        let size = tuning.sun_size;
        let (pos, vel, bounces) = match tuning.spawn_policy {
            SpawnPolicy::Drift => {
                let half = (size / 2.0).min(tuning.arena_width / 2.0);
                let x = rng.random_range(half..=tuning.arena_width - half);
                let vel = Vec2::new(
                    rng.random_range(-tuning.sun_drift..=tuning.sun_drift),
                    rng.random_range(tuning.sun_fall_min..=tuning.sun_fall_max),
                );
                (Vec2::new(x, SUN_SPAWN_Y), vel, true)
            }
            SpawnPolicy::Aimed => {
                let pos = random_perimeter_point(rng, tuning.arena_width, tuning.arena_height);
                let center = Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0);
                let fallback = direction_to(pos, center, Vec2::Y);
                let vel = direction_to(pos, target, fallback) * tuning.sun_aimed_speed;
                (pos, vel, false)
            }
        };

        let id = self.next_id;
        self.next_id += 1;
        self.members.push(Sun {
            id,
            pos,
            vel,
            size,
            bounces,
        });
        id
    }

    /// Spawn until the pool is at capacity; returns how many were added
    pub fn fill(&mut self, rng: &mut Pcg32, tuning: &Tuning, target: Vec2) -> usize {
        let missing = self.capacity.saturating_sub(self.members.len());
        for _ in 0..missing {
            self.spawn_one(rng, tuning, target);
        }
        missing
    }

    /// Move every sun, then cull the ones that left the arena and replace them
    ///
    /// Returns the number of suns replaced.
    pub fn tick(&mut self, rng: &mut Pcg32, tuning: &Tuning, target: Vec2, scale: f32) -> usize {
        for sun in &mut self.members {
            sun.update(tuning.arena_width, scale);
        }

        let margin = exit_margin(tuning);
        let before = self.members.len();
        self.members
            .retain(|s| within_margin(s.pos, tuning.arena_width, tuning.arena_height, margin));
        let removed = before - self.members.len();

        for _ in 0..removed {
            self.spawn_one(rng, tuning, target);
        }
        removed
    }

    /// Remove every sun touching the cone and replace it
    ///
    /// The combined radius is scaled by `sun_hitbox_scale`.
    pub fn resolve_collisions(
        &mut self,
        rng: &mut Pcg32,
        tuning: &Tuning,
        cone_pos: Vec2,
        cone_radius: f32,
    ) -> Vec<GameEvent> {
        let scale = tuning.sun_hitbox_scale;
        let events: Vec<GameEvent> = self
            .members
            .iter()
            .filter(|s| circles_overlap(cone_pos, cone_radius, s.pos, s.size / 2.0, scale))
            .map(|s| GameEvent::SunImpact { id: s.id, pos: s.pos })
            .collect();
        if events.is_empty() {
            return events;
        }

        self.members.retain(|s| {
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::SunImpact { id, .. } if *id == s.id))
        });
        for _ in 0..events.len() {
            self.spawn_one(rng, tuning, cone_pos);
        }
        events
    }

    /// Restore the pool size; returns true if it had drifted
    pub fn heal(&mut self, rng: &mut Pcg32, tuning: &Tuning, target: Vec2) -> bool {
        let len = self.members.len();
        if len == self.capacity {
            return false;
        }
        log::warn!("Sun pool has {} of {} entries, correcting", len, self.capacity);
        if len > self.capacity {
            self.members.truncate(self.capacity);
        } else {
            self.fill(rng, tuning, target);
        }
        true
    }
}

/// Uniform point on the arena outline
fn random_perimeter_point(rng: &mut Pcg32, width: f32, height: f32) -> Vec2 {
    let t = rng.random_range(0.0..2.0 * (width + height));
    if t < width {
        Vec2::new(t, 0.0)
    } else if t < width + height {
        Vec2::new(width, t - width)
    } else if t < 2.0 * width + height {
        Vec2::new(t - width - height, height)
    } else {
        Vec2::new(0.0, t - 2.0 * width - height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn on_perimeter(pos: Vec2, tuning: &Tuning) -> bool {
        let eps = 1e-3;
        pos.x.abs() < eps
            || pos.y.abs() < eps
            || (pos.x - tuning.arena_width).abs() < eps
            || (pos.y - tuning.arena_height).abs() < eps
    }

    #[test]
    fn test_drift_spawn_above_top() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut pool = SunPool::new(50);
        pool.fill(&mut rng, &tuning, Vec2::ZERO);

        for sun in pool.iter() {
            assert_eq!(sun.pos.y, SUN_SPAWN_Y);
            assert!(sun.pos.x >= 15.0 && sun.pos.x <= tuning.arena_width - 15.0);
            assert!(sun.vel.y >= 1.0 && sun.vel.y <= 2.0);
            assert!(sun.vel.x.abs() <= 1.0);
            assert!(sun.bounces);
        }
    }

    #[test]
    fn test_aimed_spawn_heads_for_target() {
        let tuning = Tuning::with_policy(SpawnPolicy::Aimed);
        let mut rng = Pcg32::seed_from_u64(2);
        let mut pool = SunPool::new(50);
        let target = Vec2::new(300.0, 250.0);
        pool.fill(&mut rng, &tuning, target);

        for sun in pool.iter() {
            assert!(on_perimeter(sun.pos, &tuning), "{:?}", sun.pos);
            assert!((sun.vel.length() - tuning.sun_aimed_speed).abs() < 1e-4);
            let to_target = (target - sun.pos).normalize();
            assert!(sun.vel.normalize().dot(to_target) > 0.999);
            assert!(!sun.bounces);
        }
    }

    #[test]
    fn test_bounce_off_side_wall() {
        let mut sun = Sun {
            id: 1,
            pos: Vec2::new(16.0, 100.0),
            vel: Vec2::new(-2.0, 1.0),
            size: 30.0,
            bounces: true,
        };
        sun.update(800.0, 1.0);
        assert_eq!(sun.pos.x, 15.0);
        assert_eq!(sun.vel.x, 2.0);
        assert_eq!(sun.pos.y, 101.0);
    }

    #[test]
    fn test_fall_out_bottom_is_replaced() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pool = SunPool::new(3);
        pool.fill(&mut rng, &tuning, Vec2::ZERO);

        let gone_id = {
            let sun = pool.iter_mut().next().unwrap();
            sun.pos.y = tuning.arena_height + 29.5;
            sun.vel = Vec2::new(0.0, 1.0);
            sun.id
        };
        assert_eq!(pool.tick(&mut rng, &tuning, Vec2::ZERO, 1.0), 1);
        assert!(pool.get(gone_id).is_none());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_fresh_suns_survive_first_tick() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut pool = SunPool::new(10);
        pool.fill(&mut rng, &tuning, Vec2::ZERO);
        assert_eq!(pool.tick(&mut rng, &tuning, Vec2::ZERO, 1.0), 0);
    }

    #[test]
    fn test_impact_replaces_sun() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut pool = SunPool::new(3);
        pool.fill(&mut rng, &tuning, Vec2::ZERO);

        let cone = Vec2::new(400.0, 300.0);
        let hit_id = {
            let sun = pool.iter_mut().next().unwrap();
            sun.pos = cone + Vec2::new(10.0, 0.0);
            sun.id
        };
        let events = pool.resolve_collisions(&mut rng, &tuning, cone, 30.0);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::SunImpact { id, .. } if id == hit_id));
        assert!(pool.get(hit_id).is_none());
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_perimeter_points() {
        let mut rng = Pcg32::seed_from_u64(6);
        let tuning = Tuning::default();
        for _ in 0..200 {
            let p = random_perimeter_point(&mut rng, tuning.arena_width, tuning.arena_height);
            assert!(on_perimeter(p, &tuning));
            assert!(within_margin(p, tuning.arena_width, tuning.arena_height, 0.0));
        }
    }
}
