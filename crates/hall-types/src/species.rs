// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Species
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Propellant elements, charge-state species and the fluids built on them.

use crate::constants::{AMU, K_BOLTZMANN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Propellant gas with its ideal-gas constants.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub short_name: &'static str,
    /// Atomic number, upper bound on the charge state.
    pub atomic_number: u8,
    /// Atomic mass [kg].
    pub mass: f64,
    /// Adiabatic index.
    pub gamma: f64,
    /// Specific gas constant [J/(kg·K)].
    pub r: f64,
    /// Specific heat at constant pressure [J/(kg·K)].
    pub cp: f64,
    /// Specific heat at constant volume [J/(kg·K)].
    pub cv: f64,
}

impl Element {
    pub fn new(
        name: &'static str,
        short_name: &'static str,
        atomic_number: u8,
        mass_amu: f64,
        gamma: f64,
    ) -> Self {
        let mass = mass_amu * AMU;
        let r = K_BOLTZMANN / mass;
        let cp = gamma / (gamma - 1.0) * r;
        Element {
            name,
            short_name,
            atomic_number,
            mass,
            gamma,
            r,
            cp,
            cv: cp - r,
        }
    }

    pub fn xenon() -> Self {
        Self::new("Xenon", "Xe", 54, 131.293, 5.0 / 3.0)
    }

    pub fn krypton() -> Self {
        Self::new("Krypton", "Kr", 36, 83.798, 5.0 / 3.0)
    }

    pub fn argon() -> Self {
        Self::new("Argon", "Ar", 18, 39.948, 5.0 / 3.0)
    }
}

/// Propellant selector used in JSON configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Propellant {
    #[default]
    Xenon,
    Krypton,
    Argon,
}

impl Propellant {
    pub fn element(self) -> Element {
        match self {
            Propellant::Xenon => Element::xenon(),
            Propellant::Krypton => Element::krypton(),
            Propellant::Argon => Element::argon(),
        }
    }
}

/// An element in a given charge state Z (0 = neutral).
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub element: Element,
    pub charge: u8,
}

impl Species {
    pub fn new(element: Element, charge: u8) -> Self {
        Species { element, charge }
    }

    pub fn mass(&self) -> f64 {
        self.element.mass
    }

    pub fn is_neutral(&self) -> bool {
        self.charge == 0
    }

    /// Short label such as `Xe`, `Xe+`, `Xe2+`.
    pub fn short_name(&self) -> String {
        match self.charge {
            0 => self.element.short_name.to_string(),
            1 => format!("{}+", self.element.short_name),
            z => format!("{}{}+", self.element.short_name, z),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

/// Which conservation laws a fluid carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConservationLaw {
    /// Density only; velocity [m/s] and temperature [K] are fixed.
    ContinuityOnly { u: f64, t: f64 },
    /// Density and momentum at a fixed temperature [K].
    IsothermalEuler { t: f64 },
    /// Density, momentum and total energy.
    EulerEquations,
}

impl ConservationLaw {
    /// Number of rows this law occupies in the state array.
    pub fn nvars(&self) -> usize {
        match self {
            ConservationLaw::ContinuityOnly { .. } => 1,
            ConservationLaw::IsothermalEuler { .. } => 2,
            ConservationLaw::EulerEquations => 3,
        }
    }
}

/// A species evolved with a particular conservation law.
#[derive(Debug, Clone, PartialEq)]
pub struct Fluid {
    pub species: Species,
    pub law: ConservationLaw,
}

impl Fluid {
    pub fn new(species: Species, law: ConservationLaw) -> Self {
        Fluid { species, law }
    }

    pub fn nvars(&self) -> usize {
        self.law.nvars()
    }

    pub fn mass(&self) -> f64 {
        self.species.element.mass
    }

    pub fn charge(&self) -> u8 {
        self.species.charge
    }

    pub fn has_momentum(&self) -> bool {
        self.nvars() >= 2
    }
}
