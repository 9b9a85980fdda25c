// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable setup shared by every step: grid, fluids, reactions, boundary
//! conditions and the numerical scheme.

use crate::bfield::MagneticField;
use crate::boundary::{BoundaryCondition, BoundaryContext, BoundaryPair};
use crate::cache::Cache;
use crate::flux::HyperbolicScheme;
use crate::ionization::{
    excitation_reactions, ionization_reactions, ExcitationReaction, IonizationModel,
    IonizationReaction,
};
use crate::layout::StateIndex;
use crate::potential::{CurrentContinuitySolver, PotentialSolver};
use crate::thermo;
use hall_types::config::SimulationConfig;
use hall_types::error::{HallError, HallResult};
use hall_types::species::{ConservationLaw, Fluid, Species};
use hall_types::state::Grid1D;

/// Ionization reaction bound to the fluids that carry its species.
#[derive(Debug, Clone)]
pub struct BoundIonization {
    pub reaction: IonizationReaction,
    pub reactant: usize,
    pub product: usize,
}

#[derive(Debug, Clone)]
pub struct BoundExcitation {
    pub reaction: ExcitationReaction,
    pub fluid: usize,
}

#[derive(Debug)]
pub struct Params {
    pub config: SimulationConfig,
    pub grid: Grid1D,
    pub fluids: Vec<Fluid>,
    pub index: StateIndex,
    /// Channel cross-section [m²]
    pub area: f64,
    /// Magnetic field at cell centres [T]
    pub bfield: Vec<f64>,
    pub ionization: Vec<BoundIonization>,
    pub excitation: Vec<BoundExcitation>,
    pub left: BoundaryPair,
    pub right: BoundaryPair,
    pub scheme: HyperbolicScheme,
    pub potential_solver: Box<dyn PotentialSolver>,
}

fn fluid_of(fluids: &[Fluid], species: &Species) -> HallResult<usize> {
    fluids
        .iter()
        .position(|f| &f.species == species)
        .ok_or_else(|| HallError::ConfigError(format!("no fluid carries species {species}")))
}

impl Params {
    /// Parameters for an explicit set of fluids and boundary conditions.
    pub fn new(
        config: SimulationConfig,
        grid: Grid1D,
        fluids: Vec<Fluid>,
        left: BoundaryPair,
        right: BoundaryPair,
    ) -> HallResult<Self> {
        config.validate()?;
        if fluids.is_empty() {
            return Err(HallError::ConfigError("at least one fluid is required".into()));
        }
        let index = StateIndex::new(&fluids);
        for (side, pair) in [("left", &left), ("right", &right)] {
            if let BoundaryCondition::Dirichlet { state }
            | BoundaryCondition::DirichletIonBohm { state } = &pair.fluid
            {
                if state.len() != index.fluid_rows() {
                    return Err(HallError::ConfigError(format!(
                        "{side} Dirichlet state has {} entries, expected {}",
                        state.len(),
                        index.fluid_rows()
                    )));
                }
            }
        }

        let model = IonizationModel::from(&config.ionization);
        let species: Vec<Species> = fluids.iter().map(|f| f.species.clone()).collect();
        let ionization = ionization_reactions(&model, &species)?
            .into_iter()
            .map(|reaction| {
                Ok(BoundIonization {
                    reactant: fluid_of(&fluids, &reaction.reactant)?,
                    product: fluid_of(&fluids, &reaction.product)?,
                    reaction,
                })
            })
            .collect::<HallResult<Vec<_>>>()?;
        let excitation = excitation_reactions(&model, &species)?
            .into_iter()
            .map(|reaction| {
                Ok(BoundExcitation {
                    fluid: fluid_of(&fluids, &reaction.species)?,
                    reaction,
                })
            })
            .collect::<HallResult<Vec<_>>>()?;

        let field = MagneticField::from_config(&config.magnetic_field, config.geometry.channel_length);
        let bfield = field.sample(grid.cell_centers());

        Ok(Params {
            area: config.geometry.channel_area(),
            scheme: HyperbolicScheme::from(&config.scheme),
            potential_solver: Box::new(CurrentContinuitySolver),
            config,
            grid,
            fluids,
            index,
            bfield,
            ionization,
            excitation,
            left,
            right,
        })
    }

    /// Standard thruster setup: a continuity-only neutral fed from the anode
    /// plus isothermal ions up to `ncharge`, Bohm conditions on both ends.
    pub fn from_config(config: &SimulationConfig) -> HallResult<Self> {
        config.validate()?;
        let grid = config.create_grid()?;
        let element = config.propellant.element();

        let mut fluids = vec![Fluid::new(
            Species::new(element.clone(), 0),
            ConservationLaw::ContinuityOnly {
                u: config.neutral_velocity,
                t: config.neutral_temperature,
            },
        )];
        for z in 1..=config.ncharge {
            fluids.push(Fluid::new(
                Species::new(element.clone(), z),
                ConservationLaw::IsothermalEuler {
                    t: config.ion_temperature,
                },
            ));
        }
        let index = StateIndex::new(&fluids);

        let inflow_density = config.anode_mass_flow_rate
            / (config.neutral_velocity * config.geometry.channel_area());
        let mut anode_state = Vec::with_capacity(index.fluid_rows());
        for fluid in &fluids {
            let density = if fluid.species.is_neutral() {
                inflow_density
            } else {
                config.min_number_density * fluid.mass()
            };
            let state = thermo::conserved_state(fluid, density, 0.0, 0.0);
            anode_state.extend_from_slice(&state[..fluid.nvars()]);
        }

        let left = BoundaryPair::new(
            BoundaryCondition::DirichletIonBohm { state: anode_state },
            BoundaryCondition::DirichletEnergyUpdateDensity {
                temperature: config.anode_te,
            },
            &index,
        )?;
        let right = BoundaryPair::new(
            BoundaryCondition::NeumannIonBohm,
            BoundaryCondition::DirichletEnergyUpdateDensity {
                temperature: config.cathode_te,
            },
            &index,
        )?;

        let params = Self::new(config.clone(), grid, fluids, left, right)?;
        log::info!(
            "Hall thruster setup: {} cells, {} fluids ({}), {} ionization + {} excitation reactions",
            params.grid.ncells(),
            params.fluids.len(),
            params
                .fluids
                .iter()
                .map(|f| f.species.short_name())
                .collect::<Vec<_>>()
                .join(", "),
            params.ionization.len(),
            params.excitation.len(),
        );
        Ok(params)
    }

    /// Swap the edge-potential solver.
    pub fn with_potential_solver(mut self, solver: Box<dyn PotentialSolver>) -> Self {
        self.potential_solver = solver;
        self
    }

    pub fn boundary_context(&self) -> BoundaryContext<'_> {
        BoundaryContext {
            fluids: &self.fluids,
            index: &self.index,
            min_number_density: self.config.min_number_density,
            min_electron_temperature: self.config.min_electron_temperature,
        }
    }

    /// Empty cache sized for these parameters, with the configured step.
    pub fn new_cache(&self) -> Cache {
        Cache::new(
            self.grid.ncells(),
            self.grid.nedges(),
            self.index.nvars,
            self.ionization.len(),
            self.excitation.len(),
            self.config.timestep.dt,
        )
    }
}
