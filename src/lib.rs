// src/lib.rs
//! mallard_engine: a small first-person 3D simulation core.
//!
//! Entities carry a dynamic set of typed components; per-frame systems move
//! the player, fly bullets, and resolve collisions against static geometry.
//! Rendering, windowing and asset decoding live outside this crate: loaders
//! populate the [`Registry`](ecs::Registry) through components, renderers
//! read it back through views once the systems have run.

pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod input_system;
pub mod time;
pub mod world;

pub mod bullet_system;
pub mod camera_system;
pub mod collision_system;
pub mod engine;
pub mod first_person_system;
pub mod movement_system;
pub mod player_system;

pub use config::SimConfig;
pub use engine::Simulation;
pub use error::{Error, Result};
pub use input_system::InputState;
