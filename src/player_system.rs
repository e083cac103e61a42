// src/player_system.rs
// Firing: cooldown pacing and bullet spawn from the camera view direction.
// Fire intent is raised by input glue (`Player::want_fire`) and consumed
// here once per frame.

use crate::bullet_system::BulletSystem;
use crate::components::{Camera, Player};
use crate::ecs::Registry;

/// Distance in front of the camera at which bullets appear.
const MUZZLE_OFFSET: f32 = 0.6;

pub struct PlayerSystem {
    bullet_speed: f32,
    bullet_ttl: f32,
}

impl Default for PlayerSystem {
    fn default() -> Self {
        Self {
            bullet_speed: 40.0,
            bullet_ttl: 4.0,
        }
    }
}

impl PlayerSystem {
    pub fn new(bullet_speed: f32, bullet_ttl: f32) -> Self {
        Self {
            bullet_speed,
            bullet_ttl,
        }
    }

    pub fn update(&mut self, registry: &mut Registry, bullets: &BulletSystem, dt: f32) {
        for e in registry.entities_with::<Player>() {
            let Some(player) = registry.get_component::<Player>(e).copied() else {
                continue;
            };

            let mut cooldown = player.cooldown;
            if cooldown > 0.0 {
                cooldown = (cooldown - dt).max(0.0);
            }

            // a player without a camera cannot aim; the decayed cooldown
            // still sticks, the fire request stays pending
            let Some(cam) = registry.get_component::<Camera>(e).copied() else {
                if let Some(p) = registry.get_component_mut::<Player>(e) {
                    p.cooldown = cooldown;
                }
                continue;
            };

            if player.want_fire && cooldown <= 0.0 {
                let dir = cam.forward();
                bullets.spawn_bullet(
                    registry,
                    cam.pos + dir * MUZZLE_OFFSET,
                    dir,
                    self.bullet_speed,
                    self.bullet_ttl,
                );
                cooldown = 1.0 / player.fire_rate;
            }

            if let Some(p) = registry.get_component_mut::<Player>(e) {
                p.cooldown = cooldown;
                // the request is consumed whether or not a shot came out
                p.want_fire = false;
            }
        }
    }
}
