// src/camera_system.rs
// Mouse look: applies pointer deltas to every camera's yaw/pitch while the
// pointer is captured. Positional movement is the movement system's job.

use crate::components::Camera;
use crate::ecs::Registry;
use crate::input_system::InputState;

const PITCH_LIMIT: f32 = 89.0;

#[derive(Default)]
pub struct CameraSystem;

impl CameraSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, registry: &mut Registry, input: &InputState, _dt: f32) {
        if !input.look_active {
            return;
        }
        for (_, cam) in registry.view_mut::<Camera>() {
            cam.yaw += input.look_delta.x * cam.sensitivity;
            cam.pitch += input.look_delta.y * cam.sensitivity;
            cam.pitch = cam.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }
}
