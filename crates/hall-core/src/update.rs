// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Per-Step Update
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The single entry point a time stepper calls once per step or stage.
//!
//! Order is fixed: boundaries, per-cell closures, discharge current,
//! electron velocity, edge potential, gradients, electron energy, then a
//! sweep of the whole state for non-finite values.

use crate::boundary::Side;
use crate::cache::Cache;
use crate::electrons::{discharge_current, update_closures, update_electron_velocity};
use crate::energy::update_electron_energy;
use crate::params::Params;
use crate::potential::{compute_gradients, PotentialInputs};
use hall_types::error::HallResult;
use ndarray::Array2;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    NaNDetected,
    InfDetected,
}

/// Result of one call to [`update_values`]. Termination leaves the state as
/// it was when the problem was found; the caller must not resume from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Terminate(TerminationReason),
}

/// Scan the state for NaN first, then for ±Inf.
pub fn check_state(u: &Array2<f64>) -> Option<TerminationReason> {
    if u.iter().any(|v| v.is_nan()) {
        Some(TerminationReason::NaNDetected)
    } else if u.iter().any(|v| v.is_infinite()) {
        Some(TerminationReason::InfDetected)
    } else {
        None
    }
}

/// Apply both sides' boundary conditions.
pub fn apply_boundary_conditions(u: &mut Array2<f64>, params: &Params) {
    let ctx = params.boundary_context();
    params.left.apply(u, Side::Left, &ctx);
    params.right.apply(u, Side::Right, &ctx);
}

/// Electron closures, discharge current, velocity, potential, gradients and
/// Ohmic heating. Leaves the state untouched.
pub fn update_electric_field(u: &Array2<f64>, params: &Params, cache: &mut Cache) -> HallResult<()> {
    update_closures(u, params, cache);

    // Global reduction between the per-cell currents and the electron velocity.
    let id = discharge_current(params, cache);
    if !id.is_finite() {
        log::warn!("non-finite discharge current {id}");
    }
    cache.discharge_current = id;
    update_electron_velocity(params, cache);

    let inputs = PotentialInputs {
        grid: &params.grid,
        ne: &cache.ne,
        mu: &cache.mu,
        ji: &cache.ji,
        grad_pe: &cache.grad_pe,
    };
    let phi_left = params.config.discharge_voltage;
    let phi_right = params.config.cathode_potential;
    params
        .potential_solver
        .solve(&inputs, phi_left, phi_right, &mut cache.phi)?;
    compute_gradients(&params.grid, &cache.phi, &mut cache.phi_cell, &mut cache.grad_phi);

    for i in 0..cache.ncells() {
        cache.ohmic_heating[i] = cache.ne[i] * cache.ue[i] * cache.grad_phi[i];
    }
    Ok(())
}

/// Electron subsystem: [`update_electric_field`], then the implicit energy
/// step over `cache.dt`.
pub fn update_electrons(u: &mut Array2<f64>, params: &Params, cache: &mut Cache) -> HallResult<()> {
    update_electric_field(u, params, cache)?;
    update_electron_energy(u, params, cache)
}

/// Per-step update. Proposes the next step size when adaptive stepping is on,
/// then runs the full physics update and the validity sweep.
///
/// `t` is the simulation time of `u` and is only used for diagnostics.
pub fn update_values(
    u: &mut Array2<f64>,
    params: &Params,
    cache: &mut Cache,
    t: f64,
) -> HallResult<StepOutcome> {
    let timestep = &params.config.timestep;
    if timestep.adaptive && cache.max_timestep.is_finite() && cache.max_timestep > 0.0 {
        cache.dt = timestep.cfl * cache.max_timestep;
    }

    apply_boundary_conditions(u, params);
    if params.config.electrons {
        update_electrons(u, params, cache)?;
    }

    match check_state(u) {
        Some(reason) => {
            log::warn!("terminating at t = {t:.6e} s: {reason:?}");
            Ok(StepOutcome::Terminate(reason))
        }
        None => Ok(StepOutcome::Continue),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryCondition, BoundaryPair};
    use crate::layout::StateIndex;
    use hall_types::config::SimulationConfig;
    use hall_types::species::{ConservationLaw, Element, Fluid, Species};
    use hall_types::state::Grid1D;

    #[test]
    fn test_check_state_prefers_nan() {
        let mut u = Array2::<f64>::zeros((3, 5));
        assert_eq!(check_state(&u), None);
        u[[2, 4]] = f64::INFINITY;
        assert_eq!(check_state(&u), Some(TerminationReason::InfDetected));
        u[[0, 1]] = f64::NAN;
        assert_eq!(check_state(&u), Some(TerminationReason::NaNDetected));
    }

    fn heavy_only(adaptive: bool) -> Params {
        let fluids = vec![Fluid::new(
            Species::new(Element::xenon(), 1),
            ConservationLaw::IsothermalEuler { t: 1000.0 },
        )];
        let index = StateIndex::new(&fluids);
        let pair = || {
            BoundaryPair::new(BoundaryCondition::Neumann, BoundaryCondition::NeumannEnergy, &index)
                .unwrap()
        };
        let mut config = SimulationConfig {
            electrons: false,
            ..SimulationConfig::default()
        };
        config.timestep.adaptive = adaptive;
        config.timestep.cfl = 0.5;
        let grid = Grid1D::uniform(12, 0.0, 0.01).unwrap();
        Params::new(config, grid, fluids, pair(), pair()).unwrap()
    }

    #[test]
    fn test_adaptive_step_proposal() {
        let p = heavy_only(true);
        let mut cache = p.new_cache();
        let mut u = Array2::ones((p.index.nvars, p.grid.ncells()));

        // No flux evaluation yet: keep the configured step.
        update_values(&mut u, &p, &mut cache, 0.0).unwrap();
        assert_eq!(cache.dt, p.config.timestep.dt);

        cache.max_timestep = 2e-8;
        update_values(&mut u, &p, &mut cache, 0.0).unwrap();
        assert!((cache.dt - 1e-8).abs() < 1e-20);

        let p = heavy_only(false);
        let mut cache = p.new_cache();
        cache.max_timestep = 2e-8;
        update_values(&mut u, &p, &mut cache, 0.0).unwrap();
        assert_eq!(cache.dt, p.config.timestep.dt);
    }

    #[test]
    fn test_flux_results_carry_over() {
        let p = heavy_only(false);
        let mut cache = p.new_cache();
        let mut u = Array2::ones((p.index.nvars, p.grid.ncells()));
        cache.max_timestep = 3e-8;
        cache.fluxes[[0, 3]] = 7.0;
        update_values(&mut u, &p, &mut cache, 0.0).unwrap();
        assert_eq!(cache.max_timestep, 3e-8);
        assert_eq!(cache.fluxes[[0, 3]], 7.0);
    }

    #[test]
    fn test_non_finite_state_terminates() {
        let p = heavy_only(false);
        let mut cache = p.new_cache();
        let mut u = Array2::ones((p.index.nvars, p.grid.ncells()));
        u[[1, 5]] = f64::NEG_INFINITY;
        let outcome = update_values(&mut u, &p, &mut cache, 1e-6).unwrap();
        assert_eq!(outcome, StepOutcome::Terminate(TerminationReason::InfDetected));
        u[[0, 5]] = f64::NAN;
        let outcome = update_values(&mut u, &p, &mut cache, 1e-6).unwrap();
        assert_eq!(outcome, StepOutcome::Terminate(TerminationReason::NaNDetected));
    }
}
