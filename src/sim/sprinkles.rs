//! Sprinkle pool
//!
//! Sprinkles sit still until the cone touches them. An eaten sprinkle bursts:
//! it drifts, shrinks, and ages until it expires, at which point a fresh one
//! takes its slot. The pool always holds exactly `capacity` entries after a
//! tick, eaten or not.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use super::state::GameEvent;
use crate::Tuning;
use crate::consts::{SPRINKLE_BURST_SPEED, SPRINKLE_SPAWN_MARGIN};

/// Sprinkle shapes (drawing is up to the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    Heart,
    Star,
    Circle,
    Square,
    Hexagon,
    Rectangle,
    Clover,
}

impl ShapeVariant {
    pub const ALL: [ShapeVariant; 7] = [
        ShapeVariant::Heart,
        ShapeVariant::Star,
        ShapeVariant::Circle,
        ShapeVariant::Square,
        ShapeVariant::Hexagon,
        ShapeVariant::Rectangle,
        ShapeVariant::Clover,
    ];

    /// Uniform pick over all shapes
    pub fn random(rng: &mut Pcg32) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A collectible sprinkle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprinkle {
    pub id: u32,
    pub pos: Vec2,
    /// Current size; starts at the configured size, shrinks once eaten
    pub size: f32,
    pub eaten: bool,
    /// Ticks since eaten
    pub burst_age: u32,
    /// Drift while bursting
    pub burst_vel: Vec2,
    pub shape: ShapeVariant,
    /// Color token: hue in degrees
    pub hue: u16,
}

impl Sprinkle {
    /// Advance the burst animation (no-op until eaten)
    pub fn update(&mut self, shrink_per_tick: f32, scale: f32) {
        if self.eaten {
            self.pos += self.burst_vel * scale;
            self.size = (self.size - shrink_per_tick * scale).max(0.0);
            self.burst_age += 1;
        }
    }

    /// Burst finished: shrunk away or too old
    pub fn is_expired(&self, burst_limit: u32) -> bool {
        self.eaten && (self.size <= 0.0 || self.burst_age > burst_limit)
    }
}

/// Fixed-capacity sprinkle collection
#[derive(Debug, Clone)]
pub struct SprinklePool {
    capacity: usize,
    members: Vec<Sprinkle>,
    next_id: u32,
}

impl SprinklePool {
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

    /// Sprinkles that can still be eaten
    pub fn live_count(&self) -> usize {
        self.members.iter().filter(|s| !s.eaten).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprinkle> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sprinkle> {
        self.members.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Sprinkle> {
        self.members.iter().find(|s| s.id == id)
    }

    /// Drop everything and restart ID allocation
    pub fn clear(&mut self) {
        self.members.clear();
        self.next_id = 1;
    }

    /// Insert a fresh sprinkle at a random in-bounds position
    pub fn spawn_one(&mut self, rng: &mut Pcg32, tuning: &Tuning) -> u32 {
        let margin_x = SPRINKLE_SPAWN_MARGIN.min(tuning.arena_width / 2.0);
        let margin_y = SPRINKLE_SPAWN_MARGIN.min(tuning.arena_height / 2.0);
        let pos = Vec2::new(
            rng.random_range(margin_x..=tuning.arena_width - margin_x),
            rng.random_range(margin_y..=tuning.arena_height - margin_y),
        );
        let burst_vel = Vec2::new(
            rng.random_range(-SPRINKLE_BURST_SPEED..=SPRINKLE_BURST_SPEED),
            rng.random_range(-SPRINKLE_BURST_SPEED..=SPRINKLE_BURST_SPEED),
        );
        let shape = ShapeVariant::random(rng);
        let hue = rng.random_range(0..360u16);

        let id = self.next_id;
        self.next_id += 1;
        self.members.push(Sprinkle {
            id,
            pos,
            size: tuning.sprinkle_size,
            eaten: false,
            burst_age: 0,
            burst_vel,
            shape,
            hue,
        });
        id
    }

    /// Spawn until the pool is at capacity; returns how many were added
    pub fn fill(&mut self, rng: &mut Pcg32, tuning: &Tuning) -> usize {
        let missing = self.capacity.saturating_sub(self.members.len());
        for _ in 0..missing {
            self.spawn_one(rng, tuning);
        }
        missing
    }

    /// Advance bursts, then remove expired sprinkles and replace each one
    ///
    /// Returns the number of sprinkles replaced.
    pub fn tick(&mut self, rng: &mut Pcg32, tuning: &Tuning, scale: f32) -> usize {
        for sprinkle in &mut self.members {
            sprinkle.update(tuning.sprinkle_shrink_per_tick, scale);
        }

        let before = self.members.len();
        let limit = tuning.sprinkle_burst_limit;
        self.members.retain(|s| !s.is_expired(limit));
        let removed = before - self.members.len();

        for _ in 0..removed {
            self.spawn_one(rng, tuning);
        }
        removed
    }

    /// Mark every uneaten sprinkle touching the cone as eaten
    ///
    /// Each test is independent, so several sprinkles can be eaten in one tick.
    pub fn resolve_collisions(&mut self, cone_pos: Vec2, cone_radius: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for sprinkle in self.members.iter_mut().filter(|s| !s.eaten) {
            if circles_overlap(cone_pos, cone_radius, sprinkle.pos, sprinkle.size / 2.0, 1.0) {
                sprinkle.eaten = true;
                events.push(GameEvent::SprinkleEaten {
                    id: sprinkle.id,
                    pos: sprinkle.pos,
                });
            }
        }
        events
    }

    /// Restore the pool size; returns true if it had drifted
    pub fn heal(&mut self, rng: &mut Pcg32, tuning: &Tuning) -> bool {
        let len = self.members.len();
        if len == self.capacity {
            return false;
        }
        log::warn!("Sprinkle pool has {} of {} entries, correcting", len, self.capacity);
        if len > self.capacity {
            // Members are in ID order; drop the newest
            self.members.truncate(self.capacity);
        } else {
            self.fill(rng, tuning);
        }
        true
    }
}
