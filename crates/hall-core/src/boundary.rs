// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Boundary Conditions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Boundary conditions on the first and last (zero-width) cells.
//!
//! Fluid conditions own every fluid row; energy conditions own only the
//! electron energy row. A side applies its fluid condition first so energy
//! conditions see the final boundary densities.

use crate::electrons::electron_density;
use crate::layout::StateIndex;
use crate::thermo;
use hall_types::constants::Q_ELECTRON;
use hall_types::error::{HallError, HallResult};
use hall_types::species::Fluid;
use ndarray::Array2;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// (boundary cell, adjacent interior cell)
    pub fn cells(self, ncells: usize) -> (usize, usize) {
        match self {
            Side::Left => (0, 1),
            Side::Right => (ncells - 1, ncells - 2),
        }
    }
}

impl FromStr for Side {
    type Err = HallError;

    fn from_str(s: &str) -> HallResult<Self> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(HallError::InvalidArgument(format!(
                "boundary side must be 'left' or 'right', got '{other}'"
            ))),
        }
    }
}

/// Everything a boundary condition needs besides the state array.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryContext<'a> {
    pub fluids: &'a [Fluid],
    pub index: &'a StateIndex,
    pub min_number_density: f64,
    pub min_electron_temperature: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryCondition {
    /// Fixed fluid rows.
    Dirichlet { state: Vec<f64> },
    /// Zero gradient on the fluid rows.
    Neumann,
    /// Dirichlet neutrals, ions held at or above the Bohm speed.
    DirichletIonBohm { state: Vec<f64> },
    /// Neumann neutrals, ions held at or above the Bohm speed.
    NeumannIonBohm,
    /// Fixed electron energy density [eV/m³].
    DirichletEnergy { value: f64 },
    /// Zero gradient on the electron energy density.
    NeumannEnergy,
    /// Fixed electron temperature [eV]; the energy density follows the
    /// boundary electron density.
    DirichletEnergyUpdateDensity { temperature: f64 },
}

impl BoundaryCondition {
    pub fn is_energy(&self) -> bool {
        matches!(
            self,
            BoundaryCondition::DirichletEnergy { .. }
                | BoundaryCondition::NeumannEnergy
                | BoundaryCondition::DirichletEnergyUpdateDensity { .. }
        )
    }

    pub fn apply(&self, u: &mut Array2<f64>, side: Side, ctx: &BoundaryContext) {
        let (b, j) = side.cells(u.ncols());
        let nfluid = ctx.index.fluid_rows();
        match self {
            BoundaryCondition::Dirichlet { state } => {
                for (row, &v) in state.iter().enumerate().take(nfluid) {
                    u[[row, b]] = v;
                }
            }
            BoundaryCondition::Neumann => {
                for row in 0..nfluid {
                    u[[row, b]] = u[[row, j]];
                }
            }
            BoundaryCondition::DirichletIonBohm { state } => {
                for (row, &v) in state.iter().enumerate().take(nfluid) {
                    u[[row, b]] = v;
                }
                apply_bohm(u, side, ctx);
            }
            BoundaryCondition::NeumannIonBohm => {
                for row in 0..nfluid {
                    u[[row, b]] = u[[row, j]];
                }
                apply_bohm(u, side, ctx);
            }
            BoundaryCondition::DirichletEnergy { value } => {
                u[[ctx.index.n_eps, b]] = *value;
            }
            BoundaryCondition::NeumannEnergy => {
                u[[ctx.index.n_eps, b]] = u[[ctx.index.n_eps, j]];
            }
            BoundaryCondition::DirichletEnergyUpdateDensity { temperature } => {
                let ne = electron_density(u, ctx.fluids, ctx.index, b)
                    .max(ctx.min_number_density);
                u[[ctx.index.n_eps, b]] = 1.5 * ne * temperature;
            }
        }
    }
}

/// Bohm speed √(2/3·e·Te/m) for electron temperature Te [eV].
#[inline]
pub fn bohm_speed(te: f64, mass: f64) -> f64 {
    (2.0 / 3.0 * Q_ELECTRON * te / mass).sqrt()
}

/// Rewrite the ion rows of the boundary cell so that ions leave the domain at
/// no less than the Bohm speed. The interior flux is carried through whenever
/// it already points out of the domain.
fn apply_bohm(u: &mut Array2<f64>, side: Side, ctx: &BoundaryContext) {
    let (b, j) = side.cells(u.ncols());
    let ne = electron_density(u, ctx.fluids, ctx.index, j).max(ctx.min_number_density);
    let te = (2.0 / 3.0 * u[[ctx.index.n_eps, j]] / ne).max(ctx.min_electron_temperature);

    for &k in &ctx.index.ions {
        let fluid = &ctx.fluids[k];
        if !fluid.has_momentum() {
            continue;
        }
        let rows = ctx.index.fluid_ranges[k].clone();
        let interior = ctx.index.fluid_state(u, k, j);
        let flux = interior[1];
        let u_interior = flux / interior[0];
        let u_bohm = bohm_speed(te, fluid.mass());

        let u_boundary = match side {
            Side::Left => u_interior.min(-u_bohm),
            Side::Right => u_interior.max(u_bohm),
        };
        // Outward interior flux is preserved; otherwise keep the interior density.
        let density = if flux * u_boundary > 0.0 {
            flux / u_boundary
        } else {
            interior[0]
        };
        let t = thermo::temperature(&interior, fluid);
        let state = thermo::conserved_state(fluid, density, u_boundary, t);
        for (slot, row) in rows.enumerate() {
            u[[row, b]] = state[slot];
        }
    }
}

/// Fluid and energy conditions for one side of the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPair {
    pub fluid: BoundaryCondition,
    pub energy: BoundaryCondition,
}

impl BoundaryPair {
    /// Validate the slot of each condition and the length of Dirichlet states.
    pub fn new(
        fluid: BoundaryCondition,
        energy: BoundaryCondition,
        index: &StateIndex,
    ) -> HallResult<Self> {
        if fluid.is_energy() {
            return Err(HallError::ConfigError(format!(
                "energy condition {fluid:?} used as a fluid boundary"
            )));
        }
        if !energy.is_energy() {
            return Err(HallError::ConfigError(format!(
                "fluid condition {energy:?} used as an energy boundary"
            )));
        }
        if let BoundaryCondition::Dirichlet { state }
        | BoundaryCondition::DirichletIonBohm { state } = &fluid
        {
            if state.len() != index.fluid_rows() {
                return Err(HallError::ConfigError(format!(
                    "Dirichlet state has {} entries, expected {}",
                    state.len(),
                    index.fluid_rows()
                )));
            }
        }
        Ok(BoundaryPair { fluid, energy })
    }

    pub fn apply(&self, u: &mut Array2<f64>, side: Side, ctx: &BoundaryContext) {
        self.fluid.apply(u, side, ctx);
        self.energy.apply(u, side, ctx);
    }
}
