//! Physical constants with SI and CGS values
//!
//! Values follow CODATA 2018 unless noted. Each group module defines its
//! constants and a `register` function covering all of them.

// ============================================================================
// Fundamental Constants
// ============================================================================

pub mod fundamental {
    use plato_registry::{alias_constant, constant_group};

    constant_group! {
        group "Fundamental";

        /// h (exact)
        Planck {
            si: (6.62607015e-34, "J.s"),
            cgs: (6.62607015e-27, "erg.s"),
            description: "The Planck constant",
        }

        ElectronMass {
            si: (9.1093837e-31, "kg"),
            cgs: (9.1093837e-28, "g"),
            description: "The mass of the electron",
        }

        ProtonMass {
            si: (1.67262192369e-27, "kg"),
            cgs: (1.67262192369e-24, "g"),
            description: "The mass of the proton",
        }

        /// c (exact)
        SpeedOfLight {
            si: (299792458.0, "m/s"),
            cgs: (2.99792458e10, "cm/s"),
            description: "The speed of light in vacuum",
        }

        /// k_B (exact)
        Boltzmann {
            si: (1.380649e-23, "J/K"),
            cgs: (1.380649e-16, "erg/K"),
            description: "The Boltzmann constant",
        }

        /// CGS value in Gaussian units
        ElementaryCharge {
            si: (1.602176634e-19, "C"),
            cgs: (4.80320471e-10, "statC"),
            description: "The elementary charge",
        }

        Gravitational {
            si: (6.67430e-11, "m3/(kg.s2)"),
            cgs: (6.67430e-8, "cm3/(g.s2)"),
            description: "The Newtonian constant of gravitation",
        }
    }

    alias_constant!(pub h = Planck);
    alias_constant!(pub c = SpeedOfLight);
    alias_constant!(pub k_B = Boltzmann);
    alias_constant!(pub G = Gravitational);
}

// ============================================================================
// Distances
// ============================================================================

pub mod distance {
    use plato_registry::{alias_constant, constant_group};

    constant_group! {
        group "Distance";

        LightYear {
            si: (92276118600000.0, "m"),
            cgs: (9227611860000000.0, "cm"),
            description: "The distance that light travels in one year",
        }

        /// IAU 2012 (exact)
        AstronomicalUnit {
            si: (1.495978707e11, "m"),
            cgs: (1.495978707e13, "cm"),
            description: "The mean distance between the Earth and the Sun",
        }

        Parsec {
            si: (3.0856775814913673e16, "m"),
            cgs: (3.0856775814913673e18, "cm"),
            description: "The distance at which one astronomical unit subtends one arcsecond",
        }
    }

    alias_constant!(pub AU = AstronomicalUnit);
}

// ============================================================================
// Astronomy
// ============================================================================

pub mod astronomy {
    use plato_registry::constant_group;

    constant_group! {
        group "Astronomy";

        /// IAU 2015 nominal
        SolarMass {
            si: (1.98847e30, "kg"),
            cgs: (1.98847e33, "g"),
            description: "The mass of the Sun",
        }
    }
}
