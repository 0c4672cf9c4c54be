//! Game balance and arena configuration
//!
//! Every gameplay constant can be overridden from a JSON file; missing keys
//! fall back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How replacement suns enter the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpawnPolicy {
    /// Fall from above the top edge with random horizontal drift
    #[default]
    Drift,
    /// Enter from a random perimeter point, heading for the cone
    Aimed,
}

impl SpawnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::Drift => "drift",
            SpawnPolicy::Aimed => "aimed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drift" | "random" => Some(SpawnPolicy::Drift),
            "aimed" | "homing" => Some(SpawnPolicy::Aimed),
            _ => None,
        }
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Cone ===
    /// Full cone size; half of it bounds the cone inside the arena
    pub cone_base_size: f32,
    pub scoop_min_radius: f32,
    pub scoop_max_radius: f32,
    pub cone_speed: f32,

    // === Melt meter ===
    pub melt_max: f64,
    pub melt_decay_per_tick: f64,
    pub melt_reward: f64,
    pub sun_penalty: f64,
    pub sprinkle_score: u64,

    // === Sprinkles ===
    pub sprinkle_capacity: usize,
    pub sprinkle_size: f32,
    pub sprinkle_shrink_per_tick: f32,
    pub sprinkle_burst_limit: u32,

    // === Suns ===
    pub sun_capacity: usize,
    pub sun_size: f32,
    pub sun_fall_min: f32,
    pub sun_fall_max: f32,
    pub sun_drift: f32,
    pub sun_aimed_speed: f32,
    pub sun_hitbox_scale: f32,
    pub spawn_policy: SpawnPolicy,

    // === Frame cadence ===
    /// Scale per-tick quantities by measured frame time
    pub scale_by_delta: bool,
    /// Frame time that corresponds to a scale of 1.0
    pub reference_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            cone_base_size: CONE_BASE_SIZE,
            scoop_min_radius: SCOOP_MIN_RADIUS,
            scoop_max_radius: SCOOP_MAX_RADIUS,
            cone_speed: CONE_SPEED,

            melt_max: MELT_MAX,
            melt_decay_per_tick: MELT_DECAY_PER_TICK,
            melt_reward: MELT_REWARD,
            sun_penalty: SUN_PENALTY,
            sprinkle_score: SPRINKLE_SCORE,

            sprinkle_capacity: MAX_SPRINKLES,
            sprinkle_size: SPRINKLE_SIZE,
            sprinkle_shrink_per_tick: SPRINKLE_SHRINK_PER_TICK,
            sprinkle_burst_limit: SPRINKLE_BURST_LIMIT,

            sun_capacity: MAX_SUNS,
            sun_size: SUN_SIZE,
            sun_fall_min: SUN_FALL_MIN,
            sun_fall_max: SUN_FALL_MAX,
            sun_drift: SUN_DRIFT,
            sun_aimed_speed: SUN_AIMED_SPEED,
            sun_hitbox_scale: SUN_HITBOX_SCALE,
            spawn_policy: SpawnPolicy::Drift,

            scale_by_delta: false,
            reference_dt: REFERENCE_DT,
        }
    }
}

impl Tuning {
    /// Default tuning with a different sun spawn policy
    pub fn with_policy(policy: SpawnPolicy) -> Self {
        Self {
            spawn_policy: policy,
            ..Self::default()
        }
    }

    /// Parse tuning from JSON (missing keys use defaults), then sanitize
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Invalid tuning file {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Base cone radius used for arena bounds
    #[inline]
    pub fn cone_base_radius(&self) -> f32 {
        self.cone_base_size / 2.0
    }

    /// Frame scale for a measured frame time
    pub fn frame_scale(&self, dt: f32) -> f32 {
        // A bad frame time (zero, negative, NaN, inf) counts as one plain tick
        if !self.scale_by_delta || !(dt > 0.0) || !dt.is_finite() {
            return 1.0;
        }
        (dt / self.reference_dt).clamp(0.0, MAX_FRAME_SCALE)
    }

    /// Fix inconsistent values, logging each correction
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        // Spawning samples across 2*(w+h), so the perimeter must stay finite too
        let arena_ok = self.arena_width > 0.0
            && self.arena_height > 0.0
            && (2.0 * (self.arena_width + self.arena_height)).is_finite();
        if !arena_ok {
            log::warn!(
                "Arena {}x{} is not usable, using {}x{}",
                self.arena_width,
                self.arena_height,
                defaults.arena_width,
                defaults.arena_height
            );
            self.arena_width = defaults.arena_width;
            self.arena_height = defaults.arena_height;
        }

        // The cone must fit inside the arena
        let max_base = self.arena_width.min(self.arena_height);
        if !(self.cone_base_size > 0.0 && self.cone_base_size <= max_base) {
            log::warn!("Cone base size {} does not fit the arena", self.cone_base_size);
            self.cone_base_size = defaults.cone_base_size.min(max_base);
        }

        if !(self.scoop_min_radius.is_finite() && self.scoop_max_radius.is_finite()) {
            log::warn!(
                "Scoop radius range {}..{} is not finite, using {}..{}",
                self.scoop_min_radius,
                self.scoop_max_radius,
                defaults.scoop_min_radius,
                defaults.scoop_max_radius
            );
            self.scoop_min_radius = defaults.scoop_min_radius;
            self.scoop_max_radius = defaults.scoop_max_radius;
        }
        if self.scoop_min_radius > self.scoop_max_radius {
            log::warn!(
                "Scoop radius range {}..{} is inverted, swapping",
                self.scoop_min_radius,
                self.scoop_max_radius
            );
            std::mem::swap(&mut self.scoop_min_radius, &mut self.scoop_max_radius);
        }
        self.scoop_min_radius = self.scoop_min_radius.max(0.0);

        if !(self.melt_max > 0.0 && self.melt_max.is_finite()) {
            log::warn!("Melt max {} is not usable, using {}", self.melt_max, defaults.melt_max);
            self.melt_max = defaults.melt_max;
        }

        // Rates are magnitudes; direction is fixed by the mechanic
        for (name, value, default) in [
            ("melt_decay_per_tick", &mut self.melt_decay_per_tick, defaults.melt_decay_per_tick),
            ("melt_reward", &mut self.melt_reward, defaults.melt_reward),
            ("sun_penalty", &mut self.sun_penalty, defaults.sun_penalty),
        ] {
            if !value.is_finite() {
                log::warn!("{} is not finite ({}), using {}", name, value, default);
                *value = default;
            } else if *value < 0.0 {
                log::warn!("{} is negative ({}), using magnitude", name, value);
                *value = value.abs();
            }
        }
        for (name, value, default) in [
            ("cone_speed", &mut self.cone_speed, defaults.cone_speed),
            ("sprinkle_size", &mut self.sprinkle_size, defaults.sprinkle_size),
            (
                "sprinkle_shrink_per_tick",
                &mut self.sprinkle_shrink_per_tick,
                defaults.sprinkle_shrink_per_tick,
            ),
            ("sun_size", &mut self.sun_size, defaults.sun_size),
            ("sun_fall_min", &mut self.sun_fall_min, defaults.sun_fall_min),
            ("sun_fall_max", &mut self.sun_fall_max, defaults.sun_fall_max),
            ("sun_drift", &mut self.sun_drift, defaults.sun_drift),
            ("sun_aimed_speed", &mut self.sun_aimed_speed, defaults.sun_aimed_speed),
        ] {
            if !value.is_finite() {
                log::warn!("{} is not finite ({}), using {}", name, value, default);
                *value = default;
            } else if *value < 0.0 {
                log::warn!("{} is negative ({}), using magnitude", name, value);
                *value = value.abs();
            }
        }

        // Drift is sampled from [-drift, drift]; the width must not overflow
        if !(2.0 * self.sun_drift).is_finite() {
            log::warn!("Sun drift {} is too large, using {}", self.sun_drift, defaults.sun_drift);
            self.sun_drift = defaults.sun_drift;
        }

        if self.sun_fall_min > self.sun_fall_max {
            log::warn!(
                "Sun fall range {}..{} is inverted, swapping",
                self.sun_fall_min,
                self.sun_fall_max
            );
            std::mem::swap(&mut self.sun_fall_min, &mut self.sun_fall_max);
        }
        if !(self.sun_fall_max - self.sun_fall_min).is_finite() {
            log::warn!(
                "Sun fall range {}..{} is too wide, using {}..{}",
                self.sun_fall_min,
                self.sun_fall_max,
                defaults.sun_fall_min,
                defaults.sun_fall_max
            );
            self.sun_fall_min = defaults.sun_fall_min;
            self.sun_fall_max = defaults.sun_fall_max;
        }

        if !(self.sun_hitbox_scale > 0.0 && self.sun_hitbox_scale <= 2.0) {
            log::warn!("Sun hitbox scale {} out of range, using 1.0", self.sun_hitbox_scale);
            self.sun_hitbox_scale = 1.0;
        }

        if !(self.reference_dt > 0.0 && self.reference_dt.is_finite()) {
            log::warn!(
                "Reference dt {} is not usable, using {}",
                self.reference_dt,
                defaults.reference_dt
            );
            self.reference_dt = defaults.reference_dt;
        }

        self
    }
}
