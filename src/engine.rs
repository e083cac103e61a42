// src/engine.rs
// The Simulation orchestrator: owns the registry, the input snapshot and
// every system, and runs them in the one fixed order the frame contract
// requires. Single-threaded: the registry is the only mutable state the
// systems share.

use glam::Vec3;
use log::info;

use crate::bullet_system::BulletSystem;
use crate::camera_system::CameraSystem;
use crate::collision_system::CollisionSystem;
use crate::components::{Camera, FirstPerson, Mesh, Player, Primitive, Transform};
use crate::config::SimConfig;
use crate::ecs::{Entity, Registry, System};
use crate::first_person_system::FirstPersonSystem;
use crate::input_system::InputState;
use crate::movement_system::MovementSystem;
use crate::player_system::PlayerSystem;
use crate::world::{self, WorldStats};
use crate::Result;

pub struct Simulation {
    pub registry: Registry,
    pub input: InputState,

    camera_system: CameraSystem,
    movement_system: MovementSystem,
    player_system: PlayerSystem,
    collision_system: CollisionSystem,
    bullet_system: BulletSystem,
    first_person_system: FirstPersonSystem,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: Registry::new(),
            input: InputState::new(),
            camera_system: CameraSystem::new(),
            movement_system: MovementSystem::new(config.jump_impulse),
            player_system: PlayerSystem::new(config.bullet_speed, config.bullet_ttl),
            collision_system: CollisionSystem::new(config.gravity),
            bullet_system: BulletSystem::new(),
            first_person_system: FirstPersonSystem::new(),
        }
    }

    /// Populates static geometry from a map file. Call before stepping.
    pub fn load_world(&mut self, path: impl AsRef<std::path::Path>, tile_size: f32) -> Result<WorldStats> {
        world::load_from_file(&mut self.registry, path, tile_size)
    }

    /// Creates the player: a camera entity carrying the player state, plus
    /// the gun view-model posed by the first-person system.
    pub fn spawn_player(&mut self) -> Entity {
        let gun = self.registry.create_entity();
        self.registry.add_component(gun, FirstPerson);
        self.registry.add_component(gun, Transform::default());
        self.registry.add_component(
            gun,
            Mesh::new(Primitive::Cube { size: 0.2 }, Vec3::new(0.3, 0.3, 0.3)),
        );

        let player = self.registry.create_entity();
        self.registry.add_component(player, Camera::default());
        self.registry.add_component(
            player,
            Player {
                gun: Some(gun),
                ..Player::default()
            },
        );
        info!("spawned player {player} with gun {gun}");
        player
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Order is fixed: look, then horizontal movement, then firing, then
    /// collision (bullet impacts + vertical physics), then bullet flight,
    /// then view-model posing. Each system runs to completion before the
    /// next; `dt` is trusted as-is.
    pub fn step(&mut self, dt: f32) {
        self.camera_system.update(&mut self.registry, &self.input, dt);
        self.movement_system.update(&mut self.registry, &self.input, dt);

        if self.input.fire {
            for e in self.registry.entities_with::<Player>() {
                if let Some(p) = self.registry.get_component_mut::<Player>(e) {
                    p.want_fire = true;
                }
            }
        }
        self.player_system
            .update(&mut self.registry, &self.bullet_system, dt);

        self.collision_system.update(&mut self.registry, dt);
        self.bullet_system.update(&mut self.registry, dt);
        self.first_person_system.update(&mut self.registry, dt);

        self.input.clear_frame_state();
    }
}
