//! Game session state
//!
//! A `GameState` owns everything that changes during a run. There is no
//! global state; several sessions can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cone::{Cone, scoop_radius};
use super::meter::MeltMeter;
use super::sprinkles::SprinklePool;
use super::suns::SunPool;
use crate::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the simulation
    Running,
    /// Cone melted; ticks are no-ops until reset
    Over,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SprinkleEaten { id: u32, pos: Vec2 },
    SunImpact { id: u32, pos: Vec2 },
    GameOver { score: u64, ticks: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed; `reset` replays from it
    pub seed: u64,
    /// Balance and arena configuration (sanitized)
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    pub cone: Cone,
    pub meter: MeltMeter,
    pub sprinkles: SprinklePool,
    pub suns: SunPool,
}

impl GameState {
    /// Create a running session
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        let center = Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            score: 0,
            time_ticks: 0,
            cone: Cone::new(center, tuning.cone_base_size, tuning.scoop_max_radius),
            meter: MeltMeter::new(tuning.melt_max, tuning.melt_decay_per_tick),
            sprinkles: SprinklePool::new(tuning.sprinkle_capacity),
            suns: SunPool::new(tuning.sun_capacity),
            tuning,
        };
        state.reset();
        log::info!("Session started with seed {}", seed);
        state
    }

    /// Put the session back to the start of its run
    ///
    /// Reseeds from `seed`, so resetting twice equals resetting once.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = GamePhase::Running;
        self.score = 0;
        self.time_ticks = 0;

        self.meter = MeltMeter::new(self.tuning.melt_max, self.tuning.melt_decay_per_tick);
        self.cone = Cone::new(
            self.arena_center(),
            self.tuning.cone_base_size,
            scoop_radius(
                self.meter.fraction(),
                self.tuning.scoop_min_radius,
                self.tuning.scoop_max_radius,
            ),
        );

        self.sprinkles.clear();
        self.sprinkles.fill(&mut self.rng, &self.tuning);
        self.suns.clear();
        self.suns.fill(&mut self.rng, &self.tuning, self.cone.pos);

        log::debug!(
            "Reset: {} sprinkles, {} suns",
            self.sprinkles.len(),
            self.suns.len()
        );
    }

    /// Start a new run with a different seed
    pub fn restart(&mut self, seed: u64) {
        self.seed = seed;
        self.reset();
        log::info!("Session restarted with seed {}", seed);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.tuning.arena_width / 2.0, self.tuning.arena_height / 2.0)
    }

    /// Check pool sizes and meter range, correcting any drift
    ///
    /// Returns true if anything needed fixing.
    pub fn heal(&mut self) -> bool {
        let meter = self.meter.heal();
        let sprinkles = self.sprinkles.heal(&mut self.rng, &self.tuning);
        let suns = self.suns.heal(&mut self.rng, &self.tuning, self.cone.pos);
        meter || sprinkles || suns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_full() {
        let state = GameState::new(Tuning::default(), 42);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.sprinkles.len(), 15);
        assert_eq!(state.sprinkles.live_count(), 15);
        assert_eq!(state.suns.len(), 3);
        assert_eq!(state.meter.value(), 100.0);
        assert_eq!(state.cone.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.cone.radius, 30.0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(Tuning::default(), 9);
        let b = GameState::new(Tuning::default(), 9);
        let c = GameState::new(Tuning::default(), 10);
        assert_eq!(a.snapshot(), b.snapshot());
        assert_ne!(a.snapshot(), c.snapshot());
    }

    #[test]
    fn test_restart_changes_seed() {
        let mut state = GameState::new(Tuning::default(), 1);
        let first = state.snapshot();
        state.restart(2);
        assert_eq!(state.seed, 2);
        assert_ne!(state.snapshot(), first);
        assert_eq!(state.snapshot(), GameState::new(Tuning::default(), 2).snapshot());
    }

    #[test]
    fn test_heal_restores_pools() {
        let mut state = GameState::new(Tuning::default(), 3);
        assert!(!state.heal());
        state.suns.clear();
        assert!(state.heal());
        assert_eq!(state.suns.len(), 3);
    }

    #[test]
    fn test_tuning_is_sanitized() {
        let tuning = Tuning {
            scoop_min_radius: 30.0,
            scoop_max_radius: 10.0,
            ..Tuning::default()
        };
        let state = GameState::new(tuning, 0);
        assert_eq!(state.tuning.scoop_min_radius, 10.0);
        assert_eq!(state.cone.radius, 30.0);
    }
}
