// src/components/camera.rs

use glam::{Mat4, Vec3};

/// First-person camera state. The camera position doubles as the player's
/// position; yaw/pitch are in degrees, yaw −90 facing −Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Horizontal movement speed, units per second.
    pub speed: f32,
    /// Mouse look sensitivity, degrees per pixel of pointer delta.
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, 3.0),
            yaw: -90.0,
            pitch: 0.0,
            speed: 3.0,
            sensitivity: 0.1,
        }
    }
}

impl Camera {
    /// Full 3D view direction derived from yaw and pitch, normalized.
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize_or_zero()
    }

    /// View direction projected into the horizontal plane. Falls back to −Z
    /// when the projection is degenerate (camera looking straight up/down).
    pub fn horizontal_forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vec3::new(yaw.cos() * pitch.cos(), 0.0, yaw.sin() * pitch.cos());
        if front.length_squared() < 1e-6 {
            Vec3::NEG_Z
        } else {
            front.normalize()
        }
    }

    /// Horizontal right vector, perpendicular to [`horizontal_forward`].
    ///
    /// [`horizontal_forward`]: Camera::horizontal_forward
    pub fn right(&self) -> Vec3 {
        self.horizontal_forward().cross(Vec3::Y).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.pos + self.forward(), Vec3::Y)
    }
}
