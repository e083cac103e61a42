// src/ecs/registry.rs
//! Generic typed component storage.
//!
//! One store per component type, created lazily on first use and recovered
//! through its `TypeId`. The registry exclusively owns every store; a store
//! exclusively owns its component values. Absence of a component is a normal
//! condition (`None`), never an error.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::entity::{Entity, EntityAllocator};

/// Marker for anything storable as a component. Blanket-implemented; plain
/// value types qualify automatically.
pub trait Component: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Component for T {}

/// Per-type table mapping entity id to component value. Keys are unique;
/// iteration order carries no meaning.
struct ComponentStore<T> {
    data: HashMap<Entity, T>,
}

impl<T: Component> ComponentStore<T> {
    fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

/// Object-safe facade over a `ComponentStore<T>` so the registry can hold
/// stores of every type in one map and strip an entity without knowing `T`.
trait AnyStore {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn remove_entity(&mut self, e: Entity);
}

impl<T: Component> AnyStore for ComponentStore<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn remove_entity(&mut self, e: Entity) {
        self.data.remove(&e);
    }
}

/// Owner of all entities and component stores.
#[derive(Default)]
pub struct Registry {
    allocator: EntityAllocator,
    stores: HashMap<TypeId, Box<dyn AnyStore>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            stores: HashMap::new(),
        }
    }

    /// Returns a fresh, never-before-issued entity id. Never fails.
    #[inline]
    pub fn create_entity(&mut self) -> Entity {
        self.allocator.allocate()
    }

    fn store<T: Component>(&self) -> Option<&ComponentStore<T>> {
        self.stores
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref())
    }

    fn store_mut<T: Component>(&mut self) -> Option<&mut ComponentStore<T>> {
        self.stores
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut())
    }

    fn store_or_insert<T: Component>(&mut self) -> &mut ComponentStore<T> {
        self.stores
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStore::<T>::new()))
            .as_any_mut()
            .downcast_mut()
            .expect("store is keyed by its own TypeId")
    }

    /// Inserts or overwrites the `T` component for `e`. Allocates the store
    /// for `T` the first time that type is seen. O(1) amortized.
    pub fn add_component<T: Component>(&mut self, e: Entity, component: T) {
        self.store_or_insert::<T>().data.insert(e, component);
    }

    /// Shared borrow of `e`'s `T` component, or `None` if absent.
    pub fn get_component<T: Component>(&self, e: Entity) -> Option<&T> {
        self.store::<T>().and_then(|s| s.data.get(&e))
    }

    /// Mutable borrow of `e`'s `T` component, or `None` if absent.
    pub fn get_component_mut<T: Component>(&mut self, e: Entity) -> Option<&mut T> {
        self.store_mut::<T>().and_then(|s| s.data.get_mut(&e))
    }

    /// Mutable borrow of `e`'s `T` component, attaching `T::default()` first
    /// if the entity does not hold one yet.
    pub fn get_or_insert_default<T: Component + Default>(&mut self, e: Entity) -> &mut T {
        self.store_or_insert::<T>().data.entry(e).or_default()
    }

    /// Deletes the `T` component if present and returns it; absent is a
    /// silent no-op returning `None`.
    pub fn remove_component<T: Component>(&mut self, e: Entity) -> Option<T> {
        self.store_mut::<T>().and_then(|s| s.data.remove(&e))
    }

    pub fn has_component<T: Component>(&self, e: Entity) -> bool {
        self.store::<T>().is_some_and(|s| s.data.contains_key(&e))
    }

    /// Number of entities currently holding a `T`.
    pub fn count<T: Component>(&self) -> usize {
        self.store::<T>().map_or(0, |s| s.data.len())
    }

    /// Iterates all `(entity, component)` pairs for `T`. For passes that
    /// structurally mutate while walking, use [`entities_with`] instead.
    ///
    /// [`entities_with`]: Registry::entities_with
    pub fn view<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.store::<T>()
            .into_iter()
            .flat_map(|s| s.data.iter().map(|(e, c)| (*e, c)))
    }

    /// Mutable variant of [`view`](Registry::view).
    pub fn view_mut<T: Component>(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.store_mut::<T>()
            .into_iter()
            .flat_map(|s| s.data.iter_mut().map(|(e, c)| (*e, c)))
    }

    /// Materialized snapshot of every entity holding a `T`, sorted by id so
    /// per-frame visitation order is stable. Taking the snapshot up front is
    /// what lets a system add/remove components mid-iteration: the snapshot
    /// stays valid and removals take effect by the next lookup.
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        let mut out: Vec<Entity> = self
            .store::<T>()
            .map_or_else(Vec::new, |s| s.data.keys().copied().collect());
        out.sort_unstable();
        out
    }

    /// Removes every component of `e` across all stores. The id itself stays
    /// valid forever; a stripped entity is simply inert.
    pub fn strip_entity(&mut self, e: Entity) {
        for store in self.stores.values_mut() {
            store.remove_entity(e);
        }
    }
}
