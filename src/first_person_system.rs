// src/first_person_system.rs
// Poses view-model entities (the gun) in camera-local coordinates:
// (right, up, -forward). The renderer composes this with the camera pose.

use glam::Vec3;

use crate::components::{Camera, FirstPerson, Transform};
use crate::ecs::{Registry, System};

pub struct FirstPersonSystem {
    forward_distance: f32,
    right_offset: f32,
    down_offset: f32,
    base_rotation: Vec3,
    base_scale: Vec3,
    /// 0 = ignore camera pitch, 1 = follow it fully.
    pitch_influence: f32,
    /// Clamp on the pitch delta away from the base rotation, degrees.
    max_pitch_delta: f32,
    /// How fast the model aims toward the target pitch.
    smooth_speed: f32,
}

impl Default for FirstPersonSystem {
    fn default() -> Self {
        Self {
            forward_distance: 0.6,
            right_offset: 0.25,
            down_offset: -0.25,
            base_rotation: Vec3::new(0.0, -90.0, 0.0),
            base_scale: Vec3::splat(1.2),
            pitch_influence: 0.25,
            max_pitch_delta: 3.0,
            smooth_speed: 10.0,
        }
    }
}

impl FirstPersonSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offsets(&mut self, forward: f32, right: f32, down: f32) {
        self.forward_distance = forward;
        self.right_offset = right;
        self.down_offset = down;
    }
}

impl System for FirstPersonSystem {
    fn update(&mut self, registry: &mut Registry, dt: f32) {
        // follow the first camera
        let Some(cam) = registry
            .entities_with::<Camera>()
            .first()
            .and_then(|e| registry.get_component::<Camera>(*e))
            .copied()
        else {
            return;
        };

        for e in registry.entities_with::<FirstPerson>() {
            let Some(t) = registry.get_component_mut::<Transform>(e) else {
                continue;
            };

            t.position = Vec3::new(self.right_offset, self.down_offset, -self.forward_distance);

            // pitch follows the camera a little, clamped and smoothed so the
            // model never swings to extremes
            let target = (self.base_rotation.x + cam.pitch * self.pitch_influence).clamp(
                self.base_rotation.x - self.max_pitch_delta,
                self.base_rotation.x + self.max_pitch_delta,
            );
            let lerp_t = (self.smooth_speed * dt).clamp(0.0, 1.0);
            t.rotation.x += (target - t.rotation.x) * lerp_t;

            // yaw and roll stay locked in model space
            t.rotation.y = self.base_rotation.y;
            t.rotation.z = self.base_rotation.z;
            t.scale = self.base_scale;
        }
    }
}
