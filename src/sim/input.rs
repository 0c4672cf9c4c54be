//! Input accumulation between ticks
//!
//! Platform adapters write here whenever events arrive. The frame driver
//! calls `snapshot` once per tick, so the simulation never sees input change
//! halfway through a step.

use glam::Vec2;

use super::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Unit step in arena coordinates (y grows downward)
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Live input state, written by adapters
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keyboard arrows
    keys: [bool; 4],
    /// On-screen touch buttons
    buttons: [bool; 4],
    /// Analog direction (gamepad stick, autopilot)
    stick: Vec2,
    /// Drag displacement since the last snapshot
    drag: Vec2,
}

impl InputState {
    pub fn set_key(&mut self, dir: Direction, pressed: bool) {
        self.keys[dir.index()] = pressed;
    }

    pub fn set_button(&mut self, dir: Direction, pressed: bool) {
        self.buttons[dir.index()] = pressed;
    }

    pub fn set_stick(&mut self, stick: Vec2) {
        self.stick = stick;
    }

    /// Accumulate a pointer drag (arena units)
    pub fn add_drag(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.drag += delta;
        }
    }

    /// Forget everything held (window blur, reset)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Combined direction; a key and its button count once
    pub fn direction(&self) -> Vec2 {
        let held = [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
            .into_iter()
            .filter(|d| self.keys[d.index()] || self.buttons[d.index()])
            .fold(Vec2::ZERO, |acc, d| acc + d.vector());
        (held + self.stick).clamp(Vec2::splat(-1.0), Vec2::ONE)
    }

    /// Sample input for one tick and consume the pending drag
    pub fn snapshot(&mut self, dt: f32) -> TickInput {
        let drag = std::mem::take(&mut self.drag);
        TickInput {
            direction: self.direction(),
            drag,
            dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_button_combine() {
        let mut input = InputState::default();
        input.set_key(Direction::Left, true);
        input.set_button(Direction::Left, true);
        input.set_button(Direction::Down, true);
        assert_eq!(input.direction(), Vec2::new(-1.0, 1.0));

        input.set_key(Direction::Right, true);
        assert_eq!(input.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_stick_is_clamped() {
        let mut input = InputState::default();
        input.set_key(Direction::Right, true);
        input.set_stick(Vec2::new(0.8, -3.0));
        assert_eq!(input.direction(), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_snapshot_consumes_drag() {
        let mut input = InputState::default();
        input.add_drag(Vec2::new(3.0, 1.0));
        input.add_drag(Vec2::new(2.0, -1.0));
        input.set_key(Direction::Up, true);

        let first = input.snapshot(0.016);
        assert_eq!(first.drag, Vec2::new(5.0, 0.0));
        assert_eq!(first.direction, Vec2::new(0.0, -1.0));
        assert_eq!(first.dt, 0.016);

        // Held keys persist, drag does not
        let second = input.snapshot(0.016);
        assert_eq!(second.drag, Vec2::ZERO);
        assert_eq!(second.direction, Vec2::new(0.0, -1.0));

        input.release_all();
        assert_eq!(input.snapshot(0.016).direction, Vec2::ZERO);
    }
}
