//! Heavy-species source terms: ionization transfer and electrostatic ion
//! acceleration.
//!
//! Ionization moves mass from the reactant charge state to the product,
//! carrying the reactant's momentum and stagnation energy with it. Ions are
//! accelerated by E = −∇ϕ only; the ion pressure gradient lives in the flux
//! and the electron pressure enters through Ohm's law in ϕ.

use crate::cache::Cache;
use crate::params::Params;
use crate::thermo;
use hall_types::constants::Q_ELECTRON;
use hall_types::species::ConservationLaw;
use ndarray::Array2;

/// Add the sources of cell `i` to `out` (one entry per state row).
pub fn source_terms(i: usize, u: &Array2<f64>, params: &Params, cache: &Cache, out: &mut [f64]) {
    let index = &params.index;
    let fluids = &params.fluids;
    let ne = cache.ne[i];

    for (r, bound) in params.ionization.iter().enumerate() {
        let reactant = &fluids[bound.reactant];
        let product = &fluids[bound.product];
        let state = index.fluid_state(u, bound.reactant, i);
        let rate = cache.k_iz[[r, i]] * thermo::number_density(&state, reactant) * ne;
        let rho_dot = reactant.mass() * rate;
        let velocity = thermo::velocity(&state, reactant);

        let from = index.fluid_ranges[bound.reactant].start;
        let to = index.fluid_ranges[bound.product].start;
        out[from] -= rho_dot;
        out[to] += rho_dot;
        if product.has_momentum() {
            out[to + 1] += rho_dot * velocity;
        }
        if reactant.has_momentum() {
            out[from + 1] -= rho_dot * velocity;
        }
        let energy = rho_dot * thermo::stagnation_energy(&state, reactant);
        if product.law == ConservationLaw::EulerEquations {
            out[to + 2] += energy;
        }
        if reactant.law == ConservationLaw::EulerEquations {
            out[from + 2] -= energy;
        }
    }

    let field = -cache.grad_phi[i];
    for &k in &index.ions {
        let fluid = &fluids[k];
        if !fluid.has_momentum() {
            continue;
        }
        let state = index.fluid_state(u, k, i);
        let force = fluid.charge() as f64 * Q_ELECTRON * thermo::number_density(&state, fluid) * field;
        let start = index.fluid_ranges[k].start;
        out[start + 1] += force;
        if fluid.law == ConservationLaw::EulerEquations {
            out[start + 2] += force * thermo::velocity(&state, fluid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryCondition, BoundaryPair};
    use crate::layout::StateIndex;
    use hall_types::config::SimulationConfig;
    use hall_types::species::{Element, Fluid, Species};
    use hall_types::state::Grid1D;

    fn params(ion_law: ConservationLaw) -> Params {
        let xe = Element::xenon();
        let fluids = vec![
            Fluid::new(
                Species::new(xe.clone(), 0),
                ConservationLaw::ContinuityOnly { u: 200.0, t: 500.0 },
            ),
            Fluid::new(Species::new(xe, 1), ion_law),
        ];
        let index = StateIndex::new(&fluids);
        let pair = || {
            BoundaryPair::new(BoundaryCondition::Neumann, BoundaryCondition::NeumannEnergy, &index)
                .unwrap()
        };
        let grid = Grid1D::uniform(8, 0.0, 0.05).unwrap();
        Params::new(SimulationConfig::default(), grid, fluids.clone(), pair(), pair()).unwrap()
    }

    #[test]
    fn test_ionization_conserves_mass_and_momentum() {
        let p = params(ConservationLaw::EulerEquations);
        let m = p.fluids[0].mass();
        let mut u = Array2::zeros((p.index.nvars, 8));
        let ion = thermo::conserved_state(&p.fluids[1], 1e17 * m, 3000.0, 1000.0);
        for i in 0..8 {
            u[[0, i]] = 1e19 * m;
            for s in 0..3 {
                u[[1 + s, i]] = ion[s];
            }
        }
        let mut cache = p.new_cache();
        cache.ne[3] = 1e17;
        cache.k_iz[[0, 3]] = 1e-13;

        let mut out = vec![0.0; p.index.nvars];
        source_terms(3, &u, &p, &cache, &mut out);
        let rho_dot = m * 1e-13 * 1e19 * 1e17;
        assert!((out[0] + rho_dot).abs() < 1e-9 * rho_dot);
        assert!((out[1] - rho_dot).abs() < 1e-9 * rho_dot);
        // Neutral momentum (fixed 200 m/s) is handed to the ions.
        assert!((out[2] - rho_dot * 200.0).abs() < 1e-9 * rho_dot * 200.0);
        let e0 = thermo::stagnation_energy(&u.column(3).to_vec()[..1], &p.fluids[0]);
        assert!((out[3] - rho_dot * e0).abs() < 1e-9 * rho_dot * e0);
        assert_eq!(out[4], 0.0);
    }

    #[test]
    fn test_acceleration_follows_field() {
        let p = params(ConservationLaw::IsothermalEuler { t: 1000.0 });
        let m = p.fluids[1].mass();
        let mut u = Array2::zeros((p.index.nvars, 8));
        for i in 0..8 {
            u[[1, i]] = 1e17 * m;
        }
        let mut cache = p.new_cache();
        cache.grad_phi[2] = -1e4;
        let mut out = vec![0.0; p.index.nvars];
        source_terms(2, &u, &p, &cache, &mut out);
        let expected = Q_ELECTRON * 1e17 * 1e4;
        assert!((out[2] - expected).abs() < 1e-9 * expected);
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 0.0);
    }
}
