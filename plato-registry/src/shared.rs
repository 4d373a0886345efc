//! Thread-safe registry for process-wide use
//!
//! Registration is expected to finish before lookups start. The lock makes a
//! late insert safe, but a reader may or may not observe it depending on
//! timing.

use crate::ConstantRegistry;
use plato_core::{ConstantRecord, LookupError, Quantity};
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

/// A `ConstantRegistry` behind a read-write lock
///
/// Lookups hand out clones, never references into the locked map.
#[derive(Debug, Default)]
pub struct SharedRegistry {
    inner: RwLock<ConstantRegistry>,
}

impl SharedRegistry {
    pub fn new(registry: ConstantRegistry) -> Self {
        Self { inner: RwLock::new(registry) }
    }

    // Poisoned locks are read through.
    fn read(&self) -> RwLockReadGuard<'_, ConstantRegistry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, tag: impl Into<String>, record: ConstantRecord) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tag, record);
    }

    pub fn lookup(&self, tag: &str) -> Result<ConstantRecord, LookupError> {
        self.read().lookup(tag).cloned()
    }

    pub fn si(&self, tag: &str) -> Result<Quantity, LookupError> {
        self.read().si(tag).cloned()
    }

    pub fn cgs(&self, tag: &str) -> Result<Quantity, LookupError> {
        self.read().cgs(tag).cloned()
    }

    pub fn description(&self, tag: &str) -> Result<String, LookupError> {
        self.read().description(tag).map(str::to_owned)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.read().contains(tag)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn tags(&self) -> Vec<String> {
        self.read().tags()
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> ConstantRegistry {
        self.read().clone()
    }
}

impl From<ConstantRegistry> for SharedRegistry {
    fn from(registry: ConstantRegistry) -> Self {
        Self::new(registry)
    }
}
