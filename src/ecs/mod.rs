// src/ecs/mod.rs
//! Entity/component runtime: identity allocation, generic typed storage,
//! iteration. Systems live at the crate root, next to the components they
//! drive.

pub mod entity;
pub mod registry;
pub mod system;

pub use entity::{Entity, EntityAllocator};
pub use registry::{Component, Registry};
pub use system::System;
