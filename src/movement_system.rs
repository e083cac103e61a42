// src/movement_system.rs
// Horizontal player movement with axis-separated sliding collision, plus the
// jump impulse. Vertical integration and ground resolution live in the
// collision system.

use glam::Vec3;

use crate::components::{Camera, Collider, Transform, Velocity, PLAYER_HALF_EXTENTS};
use crate::ecs::{Entity, Registry};
use crate::input_system::InputState;

/// Colliders thinner than this never block horizontal movement, so standing
/// on the ground plane does not pin the player in place.
const MIN_BLOCKING_HALF_HEIGHT: f32 = 0.2;

/// Vertical velocity magnitude below which the player counts as grounded.
const GROUNDED_EPSILON: f32 = 1e-3;

// XZ-only overlap: vertical extent is deliberately ignored for horizontal
// blocking.
fn overlaps_xz(test_pos: Vec3, half: Vec3, other_pos: Vec3, other_half: Vec3) -> bool {
    (test_pos.x - other_pos.x).abs() <= half.x + other_half.x
        && (test_pos.z - other_pos.z).abs() <= half.z + other_half.z
}

fn blocked(registry: &Registry, mover: Entity, test_pos: Vec3, half: Vec3) -> bool {
    for (ce, col) in registry.view::<Collider>() {
        if ce == mover {
            continue;
        }
        let Some(other_half) = col.as_aabb() else {
            continue;
        };
        if other_half.y < MIN_BLOCKING_HALF_HEIGHT {
            continue;
        }
        let Some(t) = registry.get_component::<Transform>(ce) else {
            continue;
        };
        if overlaps_xz(test_pos, half, t.position, other_half) {
            return true;
        }
    }
    false
}

pub struct MovementSystem {
    jump_impulse: f32,
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self { jump_impulse: 5.0 }
    }
}

impl MovementSystem {
    pub fn new(jump_impulse: f32) -> Self {
        Self { jump_impulse }
    }

    /// Moves every camera-holding entity according to held keys.
    ///
    /// X and Z displacement are tested and applied independently, so motion
    /// blocked on one axis still slides along the other. The Z test runs
    /// from the position the X step may already have committed.
    pub fn update(&mut self, registry: &mut Registry, input: &InputState, dt: f32) {
        for e in registry.entities_with::<Camera>() {
            let Some(cam) = registry.get_component::<Camera>(e).copied() else {
                continue;
            };

            let front = cam.horizontal_forward();
            let right = cam.right();

            let mut move_dir = Vec3::ZERO;
            if input.forward {
                move_dir += front;
            }
            if input.back {
                move_dir -= front;
            }
            if input.right {
                move_dir += right;
            }
            if input.left {
                move_dir -= right;
            }

            // normalize before scaling so diagonals are not faster than axials
            let intended = if move_dir.length_squared() > 1e-6 {
                move_dir.normalize() * cam.speed * dt
            } else {
                Vec3::ZERO
            };

            let half = registry
                .get_component::<Collider>(e)
                .and_then(Collider::as_aabb)
                .unwrap_or(PLAYER_HALF_EXTENTS);

            let mut pos = cam.pos;
            if intended.x != 0.0 {
                let test = pos + Vec3::new(intended.x, 0.0, 0.0);
                if !blocked(registry, e, test, half) {
                    pos.x += intended.x;
                }
            }
            if intended.z != 0.0 {
                let test = pos + Vec3::new(0.0, 0.0, intended.z);
                if !blocked(registry, e, test, half) {
                    pos.z += intended.z;
                }
            }

            if let Some(cam) = registry.get_component_mut::<Camera>(e) {
                cam.pos.x = pos.x;
                cam.pos.z = pos.z;
            }

            // Jumping. Contact is purely velocity-based: near-zero vertical
            // velocity counts as grounded.
            let vel = registry.get_or_insert_default::<Velocity>(e);
            if input.jump && vel.linear.y.abs() < GROUNDED_EPSILON {
                vel.linear.y = self.jump_impulse;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_camera(reg: &mut Registry, pos: Vec3) -> Entity {
        let e = reg.create_entity();
        reg.add_component(
            e,
            Camera {
                pos,
                speed: 1.0,
                ..Camera::default()
            },
        );
        e
    }

    fn spawn_wall(reg: &mut Registry, pos: Vec3, half: Vec3) -> Entity {
        let e = reg.create_entity();
        reg.add_component(e, Transform::from_position(pos));
        reg.add_component(e, Collider::aabb(half));
        e
    }

    fn cam_pos(reg: &Registry, e: Entity) -> Vec3 {
        reg.get_component::<Camera>(e).unwrap().pos
    }

    #[test]
    fn unobstructed_movement_follows_yaw() {
        let mut reg = Registry::new();
        // default yaw faces -Z
        let e = spawn_camera(&mut reg, Vec3::ZERO);
        let mut sys = MovementSystem::default();
        let input = InputState {
            forward: true,
            ..InputState::default()
        };
        sys.update(&mut reg, &input, 1.0);
        assert!((cam_pos(&reg, e) - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn diagonal_is_not_faster_than_axial() {
        let mut reg = Registry::new();
        let e = spawn_camera(&mut reg, Vec3::ZERO);
        let mut sys = MovementSystem::default();
        let input = InputState {
            forward: true,
            right: true,
            ..InputState::default()
        };
        sys.update(&mut reg, &input, 1.0);
        assert!((cam_pos(&reg, e).length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn blocked_axis_slides_along_the_other() {
        let mut reg = Registry::new();
        // facing -Z: forward is -Z, right is +X. Wall sits just to the +X
        // side; a forward+right diagonal must degrade to the pure forward
        // displacement.
        let e = spawn_camera(&mut reg, Vec3::ZERO);
        spawn_wall(&mut reg, Vec3::new(1.0, 0.5, 0.0), Vec3::splat(0.5));

        let mut sys = MovementSystem::default();
        let diagonal = InputState {
            forward: true,
            right: true,
            ..InputState::default()
        };
        sys.update(&mut reg, &diagonal, 1.0);
        let moved = cam_pos(&reg, e);
        assert_eq!(moved.x, 0.0, "X axis is blocked by the wall");
        // the Z share of the diagonal still applies in full: speed*dt/sqrt(2)
        let expected_z = -1.0 / (2.0f32).sqrt();
        assert!((moved.z - expected_z).abs() < 1e-5);
    }

    #[test]
    fn thin_ground_plane_never_blocks() {
        let mut reg = Registry::new();
        let e = spawn_camera(&mut reg, Vec3::ZERO);
        // huge but thin floor collider directly underfoot
        spawn_wall(&mut reg, Vec3::ZERO, Vec3::new(50.0, 0.1, 50.0));

        let mut sys = MovementSystem::default();
        let input = InputState {
            forward: true,
            ..InputState::default()
        };
        sys.update(&mut reg, &input, 1.0);
        assert!((cam_pos(&reg, e).z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn jump_requires_grounded() {
        let mut reg = Registry::new();
        let e = spawn_camera(&mut reg, Vec3::ZERO);
        let mut sys = MovementSystem::default();
        let input = InputState {
            jump: true,
            ..InputState::default()
        };

        sys.update(&mut reg, &input, 0.016);
        assert_eq!(
            reg.get_component::<Velocity>(e).unwrap().linear.y,
            5.0,
            "grounded entity jumps"
        );

        // already airborne: second jump input must not re-trigger
        sys.update(&mut reg, &input, 0.016);
        assert_eq!(reg.get_component::<Velocity>(e).unwrap().linear.y, 5.0);
    }

    #[test]
    fn jump_attaches_velocity_lazily() {
        let mut reg = Registry::new();
        let e = spawn_camera(&mut reg, Vec3::ZERO);
        assert!(!reg.has_component::<Velocity>(e));
        let mut sys = MovementSystem::default();
        sys.update(&mut reg, &InputState::default(), 0.016);
        assert!(reg.has_component::<Velocity>(e));
    }
}
