// src/input_system.rs
// Per-frame input snapshot consumed by the movement and camera systems.
// Populated by whatever owns the event loop (windowing glue, a replay file,
// or a test); the core never polls devices itself.

use glam::Vec2;

/// Raw input state for one frame. Held keys persist across frames until
/// released; edge-triggered state (fire, look deltas) is cleared at the end
/// of every simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Fire button went down this frame.
    pub fire: bool,
    /// Pointer movement since last frame, in pixels. +x right, +y up.
    pub look_delta: Vec2,
    /// Whether mouse look is engaged (pointer captured).
    pub look_active: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when any movement key is held.
    #[inline]
    pub fn any_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Clear edge-triggered state. Call once per frame, after all systems
    /// have run; held keys are left alone.
    pub fn clear_frame_state(&mut self) {
        self.fire = false;
        self.look_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_held_keys() {
        let mut input = InputState {
            forward: true,
            fire: true,
            look_delta: Vec2::new(4.0, -2.0),
            ..InputState::default()
        };
        input.clear_frame_state();
        assert!(input.forward);
        assert!(!input.fire);
        assert_eq!(input.look_delta, Vec2::ZERO);
    }
}
