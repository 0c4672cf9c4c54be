//! Simulation tick
//!
//! One call advances a running session by exactly one step. Order:
//! 1. move and clamp the cone
//! 2. decay the meter
//! 3. resize the scoop
//! 4. game over if melted (nothing below runs)
//! 5. sprinkles: burst/replace, then eat
//! 6. suns: move/replace, then impacts
//! 7. heal pools and meter
//!
//! Depletion is checked once, right after decay. A sprinkle eaten later in the
//! same tick cannot save a cone that already melted; a sun that drains the
//! meter is caught by the next tick's check.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick (sampled once, read-only during the step)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction, each axis in [-1, 1]
    pub direction: Vec2,
    /// Raw pointer drag in arena units, applied without speed scaling
    pub drag: Vec2,
    /// Measured frame time in seconds (only used when delta scaling is on)
    pub dt: f32,
}

/// Advance the session by one tick, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase == GamePhase::Over {
        return Vec::new();
    }

    let mut events = Vec::new();
    state.time_ticks += 1;
    let scale = state.tuning.frame_scale(input.dt);

    // 1. Input
    let direction = input.direction.clamp(Vec2::splat(-1.0), Vec2::ONE);
    state
        .cone
        .apply_movement(direction * state.tuning.cone_speed * scale + input.drag);
    state.cone.clamp_to_bounds(
        state.tuning.arena_width,
        state.tuning.arena_height,
        state.tuning.cone_base_radius(),
    );

    // 2-3. Melt
    state.meter.decay(scale as f64);
    state.cone.update_radius(
        state.meter.fraction(),
        state.tuning.scoop_min_radius,
        state.tuning.scoop_max_radius,
    );

    // 4. Melted?
    if state.meter.is_depleted() {
        state.phase = GamePhase::Over;
        log::info!(
            "Cone melted after {} ticks, final score {}",
            state.time_ticks,
            state.score
        );
        events.push(GameEvent::GameOver {
            score: state.score,
            ticks: state.time_ticks,
        });
        return events;
    }

    // 5. Sprinkles
    state.sprinkles.tick(&mut state.rng, &state.tuning, scale);
    for event in state.sprinkles.resolve_collisions(state.cone.pos, state.cone.radius) {
        state.score += state.tuning.sprinkle_score;
        state.meter.reward(state.tuning.melt_reward);
        log::debug!("{:?} (score {})", event, state.score);
        events.push(event);
    }

    // 6. Suns
    state
        .suns
        .tick(&mut state.rng, &state.tuning, state.cone.pos, scale);
    let impacts = state.suns.resolve_collisions(
        &mut state.rng,
        &state.tuning,
        state.cone.pos,
        state.cone.radius,
    );
    for event in impacts {
        state.meter.penalize(state.tuning.sun_penalty);
        log::debug!("{:?} (melt {:.2})", event, state.meter.value());
        events.push(event);
    }

    // 7. Pools maintain themselves; this only fires if something drifted
    state.heal();

    events
}
