//! Constant Registry

use crate::Constant;
use plato_core::{ConstantRecord, LookupError, Quantity};
use serde::Serialize;
use std::collections::BTreeMap;

/// Registry entry as exposed by listings
#[derive(Debug, Clone, Serialize)]
pub struct ConstantEntry<'a> {
    pub tag: &'a str,
    #[serde(flatten)]
    pub record: &'a ConstantRecord,
}

/// Tag to record mapping
///
/// Tags are kept sorted, so listings and miss reports come out in
/// lexicographic order. Inserting an existing tag replaces its record.
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: BTreeMap<String, ConstantRecord>,
}

impl ConstantRegistry {
    pub fn new() -> Self {
        Self { constants: BTreeMap::new() }
    }

    pub fn with_constant<C: Constant>(mut self) -> Self {
        self.insert(C::TAG, C::record());
        self
    }

    pub fn with_record(mut self, tag: impl Into<String>, record: ConstantRecord) -> Self {
        self.insert(tag, record);
        self
    }

    /// Apply a group's register function
    pub fn with_group(self, register: fn(ConstantRegistry) -> ConstantRegistry) -> Self {
        register(self)
    }

    /// Insert a record, replacing any record already stored under `tag`
    pub fn insert(&mut self, tag: impl Into<String>, record: ConstantRecord) {
        let tag = tag.into();
        tracing::debug!(tag = %tag, "registering constant");
        if let Some(previous) = self.constants.insert(tag, record) {
            tracing::debug!(description = %previous.description, "replaced existing constant");
        }
    }

    pub fn lookup(&self, tag: &str) -> Result<&ConstantRecord, LookupError> {
        match self.constants.get(tag) {
            Some(record) => {
                tracing::trace!(tag, "constant found");
                Ok(record)
            }
            None => {
                tracing::debug!(tag, known = self.constants.len(), "no constant with tag");
                Err(LookupError::not_found(tag, self.tags()))
            }
        }
    }

    pub fn si(&self, tag: &str) -> Result<&Quantity, LookupError> {
        self.lookup(tag).map(|record| &record.si)
    }

    pub fn cgs(&self, tag: &str) -> Result<&Quantity, LookupError> {
        self.lookup(tag).map(|record| &record.cgs)
    }

    pub fn description(&self, tag: &str) -> Result<&str, LookupError> {
        self.lookup(tag).map(|record| record.description.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constants.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// All registered tags, sorted
    pub fn tags(&self) -> Vec<String> {
        self.constants.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConstantRecord)> {
        self.constants.iter().map(|(tag, record)| (tag.as_str(), record))
    }

    pub fn entries(&self) -> Vec<ConstantEntry<'_>> {
        self.iter()
            .map(|(tag, record)| ConstantEntry { tag, record })
            .collect()
    }
}
