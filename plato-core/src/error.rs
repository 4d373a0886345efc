//! Lookup errors
//!
//! A miss is the only run-time failure. The message lists every tag known at
//! the time of the lookup so the caller can correct the request.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No constant named: {tag}.\nList of known constants: [{}]", .known.join(", "))]
    NotFound {
        /// The tag that was requested
        tag: String,
        /// Every registered tag, in registry order
        known: Vec<String>,
    },
}

impl LookupError {
    pub fn not_found(tag: impl Into<String>, known: Vec<String>) -> Self {
        LookupError::NotFound { tag: tag.into(), known }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => codes::NOT_FOUND,
        }
    }

    /// The requested tag
    pub fn tag(&self) -> &str {
        match self {
            LookupError::NotFound { tag, .. } => tag,
        }
    }

    /// Tags that were registered when the lookup failed
    pub fn known(&self) -> &[String] {
        match self {
            LookupError::NotFound { known, .. } => known,
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => "Use a tag of the form Group::Name from the list",
        }
    }
}
