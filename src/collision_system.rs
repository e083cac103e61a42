// src/collision_system.rs
// Two independent passes per frame: bullet-vs-static impact detection, then
// gravity integration and ground support for the player. Bullet removal in
// pass A must not disturb pass B, so each pass walks its own snapshot.

use glam::Vec3;

use crate::bullet_system;
use crate::components::{Bullet, Camera, Collider, Player, Transform, Velocity, PLAYER_HALF_EXTENTS};
use crate::ecs::{Registry, System};

// Closest point on the box to the sphere center; boundary-inclusive.
fn sphere_overlaps_aabb(center: Vec3, radius: f32, box_pos: Vec3, box_half: Vec3) -> bool {
    let closest = center.clamp(box_pos - box_half, box_pos + box_half);
    (closest - center).length_squared() <= radius * radius
}

fn overlaps_xz(a_pos: Vec3, a_half: Vec3, b_pos: Vec3, b_half: Vec3) -> bool {
    (a_pos.x - b_pos.x).abs() <= a_half.x + b_half.x
        && (a_pos.z - b_pos.z).abs() <= a_half.z + b_half.z
}

pub struct CollisionSystem {
    gravity: f32,
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self { gravity: 9.81 }
    }
}

impl CollisionSystem {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }

    /// Pass A: every sphere-collider bullet against every AABB collider.
    /// First hit wins (no distance tie-break) and despawns the bullet.
    fn bullet_impact_pass(&self, registry: &mut Registry) {
        for be in registry.entities_with::<Bullet>() {
            let Some(center) = registry.get_component::<Transform>(be).map(|t| t.position)
            else {
                continue;
            };
            let Some(radius) = registry.get_component::<Collider>(be).and_then(Collider::as_sphere)
            else {
                continue;
            };

            let mut hit = false;
            for (ce, col) in registry.view::<Collider>() {
                if ce == be {
                    continue;
                }
                let Some(half) = col.as_aabb() else {
                    continue;
                };
                let Some(pos) = registry.get_component::<Transform>(ce).map(|t| t.position)
                else {
                    continue;
                };
                if sphere_overlaps_aabb(center, radius, pos, half) {
                    hit = true;
                    break;
                }
            }
            if hit {
                bullet_system::despawn_bullet(registry, be);
            }
        }
    }

    /// Pass B: gravity + ground support for every player.
    ///
    /// Overlapping colliders are applied sequentially in visitation order;
    /// each snap raises the player's bottom, so a later, lower surface no
    /// longer triggers. The player's own collider is not excluded here; it
    /// is not an AABB in practice.
    fn player_vertical_pass(&self, registry: &mut Registry, dt: f32) {
        for e in registry.entities_with::<Player>() {
            if registry.get_component::<Camera>(e).is_none() {
                continue;
            }

            // gravity on the lazily-attached velocity
            let vel = registry.get_or_insert_default::<Velocity>(e);
            vel.linear.y -= self.gravity * dt;
            let mut vy = vel.linear.y;

            // integrate vertical motion only; movement owns the horizontal axes
            let Some(cam) = registry.get_component_mut::<Camera>(e) else {
                continue;
            };
            cam.pos.y += vy * dt;
            let horizontal = cam.pos;
            let mut pos_y = cam.pos.y;

            for ce in registry.entities_with::<Collider>() {
                let Some(half) = registry.get_component::<Collider>(ce).and_then(Collider::as_aabb)
                else {
                    continue;
                };
                let Some(t_pos) = registry.get_component::<Transform>(ce).map(|t| t.position)
                else {
                    continue;
                };
                if !overlaps_xz(horizontal, PLAYER_HALF_EXTENTS, t_pos, half) {
                    continue;
                }
                let ground_top = t_pos.y + half.y;
                let player_bottom = pos_y - PLAYER_HALF_EXTENTS.y;
                if player_bottom < ground_top {
                    // push the player up onto the surface
                    pos_y = ground_top + PLAYER_HALF_EXTENTS.y;
                    vy = 0.0;
                }
            }

            if let Some(cam) = registry.get_component_mut::<Camera>(e) {
                cam.pos.y = pos_y;
            }
            if let Some(vel) = registry.get_component_mut::<Velocity>(e) {
                vel.linear.y = vy;
            }
        }
    }
}

impl System for CollisionSystem {
    fn update(&mut self, registry: &mut Registry, dt: f32) {
        self.bullet_impact_pass(registry);
        self.player_vertical_pass(registry, dt);
    }
}
