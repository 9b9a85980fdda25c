// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Ionization and Excitation Reactions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reaction sets built once at setup from a rate model.
//!
//! One ionization reaction exists for every pair of charge states
//! `Z0 < Z1` among the simulated species. The built-in fits cover xenon up
//! to Z = 3; the lookup model reads one table per reaction from a directory.

use crate::rates::{BiexponentialFit, RateCoefficient, RateTable};
use hall_types::config::{IonizationModelConfig, MAX_CHARGE};
use hall_types::error::{HallError, HallResult};
use hall_types::species::Species;
use std::path::PathBuf;

/// Xenon energy levels [eV] indexed `[reactant Z][product Z]`.
const XE_IONIZATION_ENERGY: [[f64; 4]; 3] = [
    [0.0, 12.13, 33.1, 64.2],
    [0.0, 0.0, 21.0, 52.1],
    [0.0, 0.0, 0.0, 31.1],
];

/// Approximate biexponential fits of Maxwellian-averaged xenon ionization
/// rates, argument ϵ = 3/2·Te [eV]. Same indexing as the energies.
const XE_IONIZATION_FIT: [[BiexponentialFit; 4]; 3] = {
    const NONE: BiexponentialFit = BiexponentialFit::new(0.0, 0.0, 0.0, 0.0, 0.0);
    [
        [
            NONE,
            BiexponentialFit::new(3.6e-13, 19.4, 1.5, 0.5, 0.0),
            BiexponentialFit::new(4.0e-14, 53.0, 1.4, 0.45, 0.0),
            BiexponentialFit::new(6.0e-15, 103.0, 1.3, 0.4, 0.0),
        ],
        [
            NONE,
            NONE,
            BiexponentialFit::new(1.8e-13, 33.6, 1.5, 0.5, 0.0),
            BiexponentialFit::new(1.2e-14, 83.0, 1.4, 0.45, 0.0),
        ],
        [
            NONE,
            NONE,
            NONE,
            BiexponentialFit::new(9.0e-14, 49.8, 1.5, 0.5, 0.0),
        ],
    ]
};

/// Xenon 5p⁵6s lumped excitation energy [eV].
const XE_EXCITATION_ENERGY: f64 = 8.32;
const XE_EXCITATION_FIT: BiexponentialFit = BiexponentialFit::new(1.2e-13, 13.3, 1.5, 0.5, 0.0);

/// Rate model used to build the reaction sets.
#[derive(Debug, Clone, PartialEq)]
pub enum IonizationModel {
    /// Built-in biexponential fits (xenon, Z ≤ 3).
    Fit,
    /// Rate tables `ionization_<reactant>_<product>.dat` and
    /// `excitation_<species>.dat` in a directory.
    Lookup { directory: PathBuf },
}

impl IonizationModel {
    pub fn name(&self) -> &'static str {
        match self {
            IonizationModel::Fit => "fit",
            IonizationModel::Lookup { .. } => "lookup",
        }
    }

    fn check_species(&self, species: &Species) -> HallResult<()> {
        let supported = match self {
            IonizationModel::Fit => species.element.short_name == "Xe" && species.charge <= MAX_CHARGE,
            IonizationModel::Lookup { .. } => species.charge <= species.element.atomic_number,
        };
        if supported {
            Ok(())
        } else {
            Err(HallError::UnsupportedSpecies {
                model: self.name().to_string(),
                species: species.short_name(),
            })
        }
    }
}

impl From<&IonizationModelConfig> for IonizationModel {
    fn from(config: &IonizationModelConfig) -> Self {
        match config {
            IonizationModelConfig::Fit => IonizationModel::Fit,
            IonizationModelConfig::Lookup { directory } => IonizationModel::Lookup {
                directory: directory.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IonizationReaction {
    pub reactant: Species,
    pub product: Species,
    /// Energy lost by the electrons per event [eV].
    pub energy: f64,
    pub rate: RateCoefficient,
}

impl IonizationReaction {
    pub fn rate_coefficient(&self, epsilon: f64) -> f64 {
        self.rate.rate(epsilon)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExcitationReaction {
    pub species: Species,
    pub energy: f64,
    pub rate: RateCoefficient,
}

impl ExcitationReaction {
    pub fn rate_coefficient(&self, epsilon: f64) -> f64 {
        self.rate.rate(epsilon)
    }
}

/// All ionization reactions between the given species, ordered by
/// (reactant Z, product Z).
pub fn ionization_reactions(
    model: &IonizationModel,
    species: &[Species],
) -> HallResult<Vec<IonizationReaction>> {
    for s in species {
        model.check_species(s)?;
    }
    let mut sorted: Vec<&Species> = species.iter().collect();
    sorted.sort_by_key(|s| s.charge);

    let mut reactions = Vec::new();
    for (a, reactant) in sorted.iter().enumerate() {
        for product in sorted.iter().skip(a + 1) {
            if product.charge == reactant.charge {
                continue;
            }
            let (energy, rate) = match model {
                IonizationModel::Fit => {
                    let (z0, z1) = (reactant.charge as usize, product.charge as usize);
                    (
                        XE_IONIZATION_ENERGY[z0][z1],
                        RateCoefficient::Biexponential(XE_IONIZATION_FIT[z0][z1]),
                    )
                }
                IonizationModel::Lookup { directory } => {
                    let file = format!(
                        "ionization_{}_{}.dat",
                        reactant.short_name(),
                        product.short_name()
                    );
                    let table = RateTable::from_file(directory.join(file))?;
                    (table.reaction_energy, RateCoefficient::Table(table))
                }
            };
            reactions.push(IonizationReaction {
                reactant: (*reactant).clone(),
                product: (*product).clone(),
                energy,
                rate,
            });
        }
    }
    Ok(reactions)
}

/// Excitation reactions of the neutral species in `species`.
pub fn excitation_reactions(
    model: &IonizationModel,
    species: &[Species],
) -> HallResult<Vec<ExcitationReaction>> {
    let mut reactions = Vec::new();
    for s in species.iter().filter(|s| s.is_neutral()) {
        model.check_species(s)?;
        let (energy, rate) = match model {
            IonizationModel::Fit => (
                XE_EXCITATION_ENERGY,
                RateCoefficient::Biexponential(XE_EXCITATION_FIT),
            ),
            IonizationModel::Lookup { directory } => {
                let table =
                    RateTable::from_file(directory.join(format!("excitation_{}.dat", s.short_name())))?;
                (table.reaction_energy, RateCoefficient::Table(table))
            }
        };
        reactions.push(ExcitationReaction {
            species: s.clone(),
            energy,
            rate,
        });
    }
    Ok(reactions)
}
