// src/ecs/system.rs

use super::registry::Registry;

/// A per-frame update pass over the registry.
///
/// Systems run strictly sequentially in an order chosen by the caller; each
/// update runs to completion before the next begins. Systems that consume
/// extra state (input, a collaborator system) expose inherent `update`
/// methods with the additional parameter instead.
pub trait System {
    fn update(&mut self, registry: &mut Registry, dt: f32);
}
