//! Read-only view of a session for renderers and HUDs

use glam::Vec2;
use serde::Serialize;

use super::sprinkles::ShapeVariant;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConeView {
    pub pos: Vec2,
    pub radius: f32,
    pub base_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprinkleView {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
    pub eaten: bool,
    pub shape: ShapeVariant,
    pub burst_age: u32,
    pub hue: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunView {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub cone: ConeView,
    pub sprinkles: Vec<SprinkleView>,
    pub suns: Vec<SunView>,
    pub score: u64,
    pub melt_percent: u32,
    /// Scoop is visibly dripping
    pub dripping: bool,
    pub is_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            tick: self.time_ticks,
            cone: ConeView {
                pos: self.cone.pos,
                radius: self.cone.radius,
                base_size: self.cone.base_size,
            },
            sprinkles: self
                .sprinkles
                .iter()
                .map(|s| SprinkleView {
                    id: s.id,
                    pos: s.pos,
                    size: s.size,
                    eaten: s.eaten,
                    shape: s.shape,
                    burst_age: s.burst_age,
                    hue: s.hue,
                })
                .collect(),
            suns: self
                .suns
                .iter()
                .map(|s| SunView {
                    id: s.id,
                    pos: s.pos,
                    size: s.size,
                })
                .collect(),
            score: self.score,
            melt_percent: self.meter.melt_percent(),
            dripping: self.meter.is_dripping(),
            is_over: self.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Tuning;
    use crate::sim::GameState;

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(Tuning::default(), 11);
        let snap = state.snapshot();
        assert_eq!(snap.sprinkles.len(), state.sprinkles.len());
        assert_eq!(snap.suns.len(), state.suns.len());
        assert_eq!(snap.cone.pos, state.cone.pos);
        assert_eq!(snap.melt_percent, 0);
        assert!(!snap.dripping);
        assert!(!snap.is_over);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Tuning::default(), 11);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["score"], 0);
        assert_eq!(json["sprinkles"].as_array().map(|a| a.len()), Some(15));
        assert!(json["sprinkles"][0]["shape"].is_string());
    }
}
