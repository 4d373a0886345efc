//! Plato Standard Library

pub mod constants;

use plato_registry::{ConstantRegistry, SharedRegistry};
use std::sync::OnceLock;

/// Load the standard constants into registry
pub fn load_standard_library(registry: ConstantRegistry) -> ConstantRegistry {
    registry
        .with_group(constants::fundamental::register)
        .with_group(constants::distance::register)
        .with_group(constants::astronomy::register)
}

/// Create registry with standard library
pub fn standard_registry() -> ConstantRegistry {
    load_standard_library(ConstantRegistry::new())
}

/// Process-wide registry, filled with the standard library on first access
///
/// Later inserts through the returned handle are visible to every caller.
/// Adding constants after startup is possible but not expected.
pub fn global() -> &'static SharedRegistry {
    static GLOBAL: OnceLock<SharedRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        let registry = standard_registry();
        tracing::debug!(constants = registry.len(), "initialized global constant registry");
        SharedRegistry::new(registry)
    })
}
