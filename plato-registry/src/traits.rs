//! Compile-time constant definitions

use plato_core::{ConstantRecord, Quantity};

/// A physical constant known at compile time
///
/// Implementors are unit structs, normally generated by
/// [`define_constant!`](crate::define_constant). Reading `SI`, `CGS` or
/// `DESCRIPTION` goes through no registry at all; `record()` builds the same
/// value the registry stores under `TAG`.
pub trait Constant {
    /// Registry tag, `"Group::Name"`
    const TAG: &'static str;
    const SI: Quantity;
    const CGS: Quantity;
    const DESCRIPTION: &'static str;

    fn record() -> ConstantRecord {
        ConstantRecord::from_static(Self::SI, Self::CGS, Self::DESCRIPTION)
    }
}
