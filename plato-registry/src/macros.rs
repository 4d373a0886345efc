//! Declarative constant definitions
//!
//! Values must be float literals or constant float expressions; they are
//! stored verbatim.

/// Define one constant as a unit struct implementing [`Constant`](crate::Constant)
///
/// ```
/// use plato_registry::{define_constant, Constant};
///
/// define_constant! {
///     /// The Planck constant
///     pub Planck in "Fundamental" {
///         si: (6.62607015e-34, "J.s"),
///         cgs: (6.62607015e-27, "erg.s"),
///         description: "The Planck constant",
///     }
/// }
///
/// assert_eq!(Planck::TAG, "Fundamental::Planck");
/// assert_eq!(Planck::SI.value, 6.62607015e-34);
/// ```
///
/// Units must not be empty; this fails to compile:
///
/// ```compile_fail
/// use plato_registry::define_constant;
///
/// define_constant! {
///     pub Ratio in "Test" {
///         si: (1.0, ""),
///         cgs: (1.0, "1"),
///         description: "A constant without an SI unit",
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_constant {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident in $group:literal {
            si: ($si_value:expr, $si_unit:literal),
            cgs: ($cgs_value:expr, $cgs_unit:literal),
            description: $description:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $name;

        impl $crate::Constant for $name {
            const TAG: &'static str = concat!($group, "::", stringify!($name));
            const SI: $crate::Quantity = $crate::Quantity::from_static($si_value, $si_unit);
            const CGS: $crate::Quantity = $crate::Quantity::from_static($cgs_value, $cgs_unit);
            const DESCRIPTION: &'static str = $description;
        }

        const _: () = assert!(
            !$si_unit.is_empty() && !$cgs_unit.is_empty(),
            concat!("empty unit in ", $group, "::", stringify!($name)),
        );
    };
}

/// Define every constant of a group, plus a `register` function for the group
///
/// The generated `register` takes and returns a
/// [`ConstantRegistry`](crate::ConstantRegistry), so groups chain with
/// [`ConstantRegistry::with_group`](crate::ConstantRegistry::with_group).
/// Adding a constant to the block is all it takes to make it discoverable.
#[macro_export]
macro_rules! constant_group {
    (
        group $group:literal;
        $(
            $(#[$meta:meta])*
            $name:ident {
                si: ($si_value:expr, $si_unit:literal),
                cgs: ($cgs_value:expr, $cgs_unit:literal),
                description: $description:literal $(,)?
            }
        )*
    ) => {
        $(
            $crate::define_constant! {
                $(#[$meta])*
                pub $name in $group {
                    si: ($si_value, $si_unit),
                    cgs: ($cgs_value, $cgs_unit),
                    description: $description,
                }
            }
        )*

        /// Register every constant of this group
        pub fn register(registry: $crate::ConstantRegistry) -> $crate::ConstantRegistry {
            registry $( .with_constant::<$name>() )*
        }
    };
}

/// Give an existing constant a second compile-time name
///
/// Aliases are type aliases only. They never add a registry entry.
#[macro_export]
macro_rules! alias_constant {
    ($(#[$meta:meta])* $vis:vis $alias:ident = $target:ty) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        $vis type $alias = $target;
    };
}
