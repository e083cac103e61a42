// src/bullet_system.rs
// Bullet lifecycle: spawn, per-frame advance, expiry. Impact detection lives
// in the collision system, which reuses the same despawn.

use glam::Vec3;
use log::debug;

use crate::components::{Bullet, Collider, Mesh, Primitive, Transform, Velocity};
use crate::ecs::{Entity, Registry, System};

/// Visual scale and collision radius of a bullet.
const BULLET_RADIUS: f32 = 0.07;

/// Canonical bullet teardown: strips the full component set in one place so
/// the timeout and impact paths cannot drift apart. Atomic from the
/// perspective of any system that runs later in the frame.
pub fn despawn_bullet(registry: &mut Registry, e: Entity) {
    registry.remove_component::<Mesh>(e);
    registry.remove_component::<Transform>(e);
    registry.remove_component::<Bullet>(e);
    registry.remove_component::<Collider>(e);
    registry.remove_component::<Velocity>(e);
    debug!("despawned bullet {e}");
}

pub struct BulletSystem {
    /// Shared visual description stamped onto every spawned bullet.
    mesh: Mesh,
}

impl Default for BulletSystem {
    fn default() -> Self {
        Self {
            mesh: Mesh::new(
                Primitive::Sphere {
                    rings: 8,
                    segments: 12,
                },
                Vec3::new(1.0, 0.15, 0.15),
            ),
        }
    }
}

impl BulletSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bullet entity: transform at `pos` with the small visual
    /// scale, the shared mesh, the bullet state (direction normalized), and
    /// a sphere collider.
    pub fn spawn_bullet(
        &self,
        registry: &mut Registry,
        pos: Vec3,
        dir: Vec3,
        speed: f32,
        ttl: f32,
    ) -> Entity {
        let e = registry.create_entity();
        registry.add_component(
            e,
            Transform {
                position: pos,
                rotation: Vec3::ZERO,
                scale: Vec3::splat(BULLET_RADIUS),
            },
        );
        registry.add_component(e, self.mesh);
        registry.add_component(
            e,
            Bullet {
                dir: dir.normalize_or_zero(),
                speed,
                ttl,
            },
        );
        registry.add_component(e, Collider::sphere(BULLET_RADIUS));
        debug!("spawned bullet {e} at {pos}");
        e
    }
}

impl System for BulletSystem {
    /// Advances every bullet along its direction and ages it out. A bullet
    /// whose transform is missing is skipped for the frame, not fatal.
    fn update(&mut self, registry: &mut Registry, dt: f32) {
        for e in registry.entities_with::<Bullet>() {
            let Some(bullet) = registry.get_component::<Bullet>(e).copied() else {
                continue;
            };
            let Some(t) = registry.get_component_mut::<Transform>(e) else {
                continue;
            };
            t.position += bullet.dir * bullet.speed * dt;

            let Some(b) = registry.get_component_mut::<Bullet>(e) else {
                continue;
            };
            b.ttl -= dt;
            if b.ttl <= 0.0 {
                despawn_bullet(registry, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_attaches_the_full_set() {
        let mut reg = Registry::new();
        let sys = BulletSystem::new();
        let b = sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::X, 30.0, 5.0);

        assert!(reg.has_component::<Transform>(b));
        assert!(reg.has_component::<Mesh>(b));
        assert!(reg.has_component::<Bullet>(b));
        assert!(reg.has_component::<Collider>(b));
        assert_eq!(
            reg.get_component::<Collider>(b).unwrap().as_sphere(),
            Some(BULLET_RADIUS)
        );
    }

    #[test]
    fn spawn_normalizes_direction() {
        let mut reg = Registry::new();
        let sys = BulletSystem::new();
        let b = sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::new(0.0, 3.0, 4.0), 30.0, 5.0);
        let bullet = reg.get_component::<Bullet>(b).unwrap();
        assert!((bullet.dir.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn bullets_advance_along_their_direction() {
        let mut reg = Registry::new();
        let mut sys = BulletSystem::new();
        let b = sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::X, 10.0, 5.0);

        sys.update(&mut reg, 0.5);
        let t = reg.get_component::<Transform>(b).unwrap();
        assert!((t.position - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn ttl_boundary_despawns_on_exact_zero() {
        let mut reg = Registry::new();
        let mut sys = BulletSystem::new();
        sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::X, 1.0, 2.0);

        sys.update(&mut reg, 1.0);
        assert_eq!(reg.count::<Bullet>(), 1);
        sys.update(&mut reg, 1.0);
        assert_eq!(reg.count::<Bullet>(), 0, "ttl <= 0 despawns");
    }

    #[test]
    fn ttl_boundary_in_quarters() {
        let mut reg = Registry::new();
        let mut sys = BulletSystem::new();
        sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::X, 1.0, 2.0);

        for _ in 0..3 {
            sys.update(&mut reg, 0.5);
            assert_eq!(reg.count::<Bullet>(), 1);
        }
        sys.update(&mut reg, 0.5);
        assert_eq!(reg.count::<Bullet>(), 0);
    }

    #[test]
    fn expiry_strips_collider_and_velocity_too() {
        let mut reg = Registry::new();
        let mut sys = BulletSystem::new();
        let b = sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::X, 1.0, 0.1);
        reg.add_component(b, Velocity::default());

        sys.update(&mut reg, 0.2);
        assert!(!reg.has_component::<Bullet>(b));
        assert!(!reg.has_component::<Collider>(b));
        assert!(!reg.has_component::<Velocity>(b));
        assert!(!reg.has_component::<Mesh>(b));
        assert!(!reg.has_component::<Transform>(b));
    }

    #[test]
    fn missing_transform_skips_the_frame() {
        let mut reg = Registry::new();
        let mut sys = BulletSystem::new();
        let b = sys.spawn_bullet(&mut reg, Vec3::ZERO, Vec3::X, 1.0, 5.0);
        reg.remove_component::<Transform>(b);

        sys.update(&mut reg, 1.0);
        // neither moved nor aged
        assert_eq!(reg.get_component::<Bullet>(b).unwrap().ttl, 5.0);
    }
}
