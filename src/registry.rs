use crate::style::Resource;
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};

/// Maps concrete resource types to engines.
///
/// Lookup matches the exact runtime type of the resource. Anything else,
/// including a missing resource, resolves to the default engine.
pub struct EngineRegistry<E: ?Sized> {
    default: Box<E>,
    engines: FxHashMap<TypeId, Box<E>>,
}

impl<E: ?Sized> EngineRegistry<E> {
    pub fn new(default: Box<E>) -> Self {
        Self {
            default,
            engines: FxHashMap::default(),
        }
    }

    /// Registers `engine` for resources of type `R`, replacing any previous one.
    pub fn register<R: Any>(&mut self, engine: Box<E>) -> &mut Self {
        self.engines.insert(TypeId::of::<R>(), engine);
        self
    }

    pub fn is_registered<R: Any>(&self) -> bool {
        self.engines.contains_key(&TypeId::of::<R>())
    }

    pub fn default_engine(&self) -> &E {
        &self.default
    }

    pub fn resolve<R: Resource + ?Sized>(&self, resource: Option<&R>) -> &E {
        resource
            .and_then(|resource| self.engines.get(&resource.resource_type()))
            .map_or(&*self.default, |engine| &**engine)
    }
}
