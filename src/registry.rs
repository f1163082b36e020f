//! Registration-time capability registry.
//!
//! Maps each target type to the [`TypeSpec`] registered for it. The
//! surrounding library registers specs while it sets up arguments and
//! asks for a converter per argument; conversions themselves never
//! touch the registry, because a converter owns its spec once built.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::convert::TypedConverter;
use crate::core::types::TypeSpec;
use crate::specs;

/// Thread-safe map from target type to registered spec.
pub struct ConverterRegistry {
    specs: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            specs: RwLock::new(HashMap::new()),
        }
    }

    /// Registry preloaded with specs for the standard library types.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        specs::register_builtins(&registry);
        registry
    }

    /// Register the spec for `T`, replacing any previous registration.
    pub fn register<T: Send + Sync + 'static>(&self, spec: TypeSpec<T>) {
        let mut specs = self.specs.write().unwrap();
        specs.insert(
            TypeId::of::<T>(),
            Arc::new(spec) as Arc<dyn Any + Send + Sync>,
        );
    }

    /// The spec registered for `T`, if any.
    pub fn spec_of<T: Send + Sync + 'static>(&self) -> Option<Arc<TypeSpec<T>>> {
        let specs = self.specs.read().unwrap();
        specs
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|spec| spec.downcast::<TypeSpec<T>>().ok())
    }

    /// A converter for `T`, sharing the registered spec.
    pub fn converter_for<T: Send + Sync + 'static>(&self) -> Option<TypedConverter<T>> {
        self.spec_of::<T>().map(TypedConverter::from_shared)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: Lazy<ConverterRegistry> = Lazy::new(ConverterRegistry::with_builtins);

/// Process-wide registry preloaded with the builtin specs.
pub fn default_registry() -> &'static ConverterRegistry {
    &DEFAULT_REGISTRY
}
