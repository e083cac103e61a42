// src/components/physics.rs
// Collision and motion components.

use glam::Vec3;

/// Collision shape attached to an entity. World-space placement comes from
/// the entity's `Transform`; the collider only describes extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    /// Axis-aligned box given by per-axis half-extents around the transform
    /// position.
    Aabb { half_extents: Vec3 },
    /// Sphere of the given radius around the transform position.
    Sphere { radius: f32 },
}

impl Collider {
    pub fn aabb(half_extents: Vec3) -> Self {
        Self::Aabb { half_extents }
    }

    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Half-extents when this is a box, `None` otherwise.
    #[inline]
    pub fn as_aabb(&self) -> Option<Vec3> {
        match self {
            Self::Aabb { half_extents } => Some(*half_extents),
            Self::Sphere { .. } => None,
        }
    }

    /// Radius when this is a sphere, `None` otherwise.
    #[inline]
    pub fn as_sphere(&self) -> Option<f32> {
        match self {
            Self::Sphere { radius } => Some(*radius),
            Self::Aabb { .. } => None,
        }
    }
}

/// Linear velocity in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub linear: Vec3,
}

/// Projectile state: normalized flight direction, speed, remaining life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub dir: Vec3,
    pub speed: f32,
    /// Remaining time to live, seconds.
    pub ttl: f32,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            dir: Vec3::ZERO,
            speed: 30.0,
            ttl: 5.0,
        }
    }
}
