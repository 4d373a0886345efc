//! Plato Core - Fundamental types
//!
//! This crate provides the core types used throughout Plato:
//! - `Quantity`: a value with its unit symbol
//! - `ConstantRecord`: one constant in SI and CGS units, with a description
//! - `LookupError`: the error raised when a tag is not registered

mod quantity;
mod error;

pub use quantity::{Quantity, ConstantRecord};
pub use error::{LookupError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Quantity, ConstantRecord, LookupError};
    pub use crate::error::codes;
}
