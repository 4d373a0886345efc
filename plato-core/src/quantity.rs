//! Quantity and constant record types
//!
//! Both are read-only data: a quantity is never combined with another one
//! and never converted between unit systems.

use std::borrow::Cow;
use std::fmt;
use serde::{Serialize, Deserialize};

/// A physical magnitude tagged with its unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric value
    pub value: f64,
    /// The unit symbol, e.g. "m" or "J.s"
    pub unit: Cow<'static, str>,
}

impl Quantity {
    /// Create a quantity from a value and any string-like unit
    pub fn new(value: f64, unit: impl Into<Cow<'static, str>>) -> Self {
        Quantity { value, unit: unit.into() }
    }

    /// Create a quantity in a const context
    pub const fn from_static(value: f64, unit: &'static str) -> Self {
        Quantity { value, unit: Cow::Borrowed(unit) }
    }

    /// The unit symbol
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl From<&Quantity> for f64 {
    fn from(q: &Quantity) -> f64 {
        q.value
    }
}

/// Values outside [1e-4, 1e16) are shown in scientific notation
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.value.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            write!(f, "{:e} {}", self.value, self.unit)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// One named physical constant, expressed in SI and CGS units
///
/// Both quantities are expected to describe the same physical magnitude.
/// Nothing here checks that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantRecord {
    /// The SI quantity
    pub si: Quantity,
    /// The CGS quantity
    pub cgs: Quantity,
    /// Human-readable description
    pub description: Cow<'static, str>,
}

impl ConstantRecord {
    pub fn new(si: Quantity, cgs: Quantity, description: impl Into<Cow<'static, str>>) -> Self {
        ConstantRecord { si, cgs, description: description.into() }
    }

    pub const fn from_static(si: Quantity, cgs: Quantity, description: &'static str) -> Self {
        ConstantRecord { si, cgs, description: Cow::Borrowed(description) }
    }

    /// The library version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
