//! Plato Registry
//!
//! Maps tags (`"Group::Name"`) to constant records. Provides:
//! - `ConstantRegistry`: an owned map, built once and passed around
//! - `SharedRegistry`: the same map behind a lock, for process-wide use
//! - `Constant`: compile-time access to a constant through its type
//! - `define_constant!`, `constant_group!`, `alias_constant!`: definition macros

mod traits;
mod registry;
mod shared;
mod macros;

pub use traits::Constant;
pub use registry::{ConstantRegistry, ConstantEntry};
pub use shared::SharedRegistry;

/// Re-export core types for constant authors
pub use plato_core::{Quantity, ConstantRecord, LookupError};

pub mod prelude {
    pub use crate::{Constant, ConstantRegistry, SharedRegistry};
    pub use plato_core::prelude::*;
}
