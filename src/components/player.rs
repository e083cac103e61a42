// src/components/player.rs

use glam::Vec3;

use crate::ecs::Entity;

/// Horizontal/vertical half-extents of the player capsule-stand-in box used
/// by movement blocking and ground resolution.
pub const PLAYER_HALF_EXTENTS: Vec3 = Vec3::new(0.3, 0.9, 0.3);

/// Player-controlled entity state: the attached gun view-model, the
/// fire-intent flag raised by input glue, and the firing cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub gun: Option<Entity>,
    /// Set by input glue when the fire button went down; consumed (and
    /// cleared) by the player system every frame.
    pub want_fire: bool,
    /// Seconds until the next shot is allowed.
    pub cooldown: f32,
    /// Shots per second.
    pub fire_rate: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            gun: None,
            want_fire: false,
            cooldown: 0.0,
            fire_rate: 8.0,
        }
    }
}

/// Marker for entities posed in camera-local space (the gun view-model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FirstPerson;
