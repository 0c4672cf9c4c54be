//! Melt meter
//!
//! The scoop's remaining time. Decays every tick, refills on sprinkles,
//! drops on sun hits. Empty means the cone has melted.

use serde::{Deserialize, Serialize};

use crate::consts::DRIP_THRESHOLD;

/// Fraction of `max` treated as zero, absorbs float drift from repeated decay
const DEPLETION_EPSILON: f64 = 1e-9;

/// Depleting resource that gates cone size and game over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeltMeter {
    value: f64,
    max: f64,
    decay_per_tick: f64,
}

impl MeltMeter {
    /// Create a full meter
    pub fn new(max: f64, decay_per_tick: f64) -> Self {
        Self {
            value: max,
            max,
            decay_per_tick,
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Fill back to max
    pub fn refill(&mut self) {
        self.value = self.max;
    }

    /// Apply one tick of decay (`scale` is 1.0 unless delta scaling is on)
    pub fn decay(&mut self, scale: f64) {
        self.value -= self.decay_per_tick * scale;
    }

    /// Add melt time, clamped to `[0, max]`
    pub fn reward(&mut self, amount: f64) {
        self.value = (self.value + amount).clamp(0.0, self.max);
    }

    /// Remove melt time; may go negative until the next depletion check
    pub fn penalize(&mut self, amount: f64) {
        self.value -= amount;
    }

    /// True once the meter is at or below zero
    ///
    /// Values within `max * 1e-9` of zero also count as melted. Summing the
    /// decay step leaves float residue (2000 steps of 0.05 from 100 end a hair
    /// above 0.0), and the cone must still melt on that exact tick.
    pub fn is_depleted(&self) -> bool {
        self.value <= self.max * DEPLETION_EPSILON
    }

    /// Remaining fraction in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        (self.value / self.max).clamp(0.0, 1.0) as f32
    }

    /// Display value: how melted the scoop is, 0-100
    pub fn melt_percent(&self) -> u32 {
        let percent = ((1.0 - self.value / self.max) * 100.0).floor();
        percent.clamp(0.0, 100.0) as u32
    }

    /// Scoop starts dripping below the drip threshold
    pub fn is_dripping(&self) -> bool {
        self.value < self.max * DRIP_THRESHOLD
    }

    /// Pull an out-of-range value back into `[.., max]`
    ///
    /// Returns true if a correction was needed. Negative values are left
    /// alone; they are a legal transient that the depletion check handles.
    pub fn heal(&mut self) -> bool {
        if self.value.is_nan() {
            log::warn!("Melt meter was NaN, treating as melted");
            self.value = 0.0;
            return true;
        }
        if self.value > self.max {
            log::warn!("Melt meter {} above max {}, clamping", self.value, self.max);
            self.value = self.max;
            return true;
        }
        false
    }

    #[cfg(test)]
    pub(crate) fn set_value(&mut self, value: f64) {
        self.value = value;
    }
}
