// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Electron Energy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Implicit update of the electron energy density nϵ = 3/2·ne·Te [eV/m³].
//!
//!   ∂t(nϵ) + ∂z(5/3·ue·nϵ − 10/9·μ·nϵ·∂zϵ) = ne·ue·∂zϕ − W − Σ k·n·ne·E
//!
//! Backward Euler with lagged transport coefficients and explicit sources,
//! one tridiagonal solve per step.

use crate::boundary::BoundaryCondition;
use crate::cache::Cache;
use crate::params::Params;
use hall_math::tridiag::Tridiagonal;
use hall_types::constants::WALL_FREQUENCY_SCALE;
use hall_types::error::HallResult;
use ndarray::Array2;

/// Wall power loss per unit volume [eV/(m³·s)] at electron energy `epsilon`.
pub fn wall_power_loss(params: &Params, z: f64, ne: f64, epsilon: f64) -> f64 {
    let wall = &params.config.wall;
    let alpha = if z < params.config.geometry.channel_length {
        wall.loss_inner
    } else {
        wall.loss_outer
    };
    ne * alpha * WALL_FREQUENCY_SCALE * epsilon * (-wall.loss_energy / epsilon).exp()
}

/// Inelastic (ionization plus excitation) power loss at cell `i` [eV/(m³·s)].
pub fn inelastic_loss(u: &Array2<f64>, params: &Params, cache: &Cache, i: usize) -> f64 {
    let index = &params.index;
    let ne = cache.ne[i];
    let mut loss = 0.0;
    for (r, bound) in params.ionization.iter().enumerate() {
        let fluid = &params.fluids[bound.reactant];
        let n = u[[index.density_row(bound.reactant), i]] / fluid.mass();
        loss += cache.k_iz[[r, i]] * n * ne * bound.reaction.energy;
    }
    for (r, bound) in params.excitation.iter().enumerate() {
        let fluid = &params.fluids[bound.fluid];
        let n = u[[index.density_row(bound.fluid), i]] / fluid.mass();
        loss += cache.k_ex[[r, i]] * n * ne * bound.reaction.energy;
    }
    loss
}

/// Advance the `nϵ` row of `u` by `cache.dt`. Boundary rows follow the
/// energy conditions already applied to the boundary cells.
pub fn update_electron_energy(u: &mut Array2<f64>, params: &Params, cache: &Cache) -> HallResult<()> {
    let grid = &params.grid;
    let n = grid.ncells();
    let row = params.index.n_eps;
    let dt = cache.dt;
    let z = grid.cell_centers();

    let neps_old: Vec<f64> = (0..n).map(|i| u[[row, i]]).collect();

    // Face flux F_j = a_j·x_j + b_j·x_{j+1} on edge j between cells j and j+1.
    let nedges = grid.nedges();
    let mut a = vec![0.0; nedges];
    let mut b = vec![0.0; nedges];
    for j in 0..nedges {
        let ue_face = 0.5 * (cache.ue[j] + cache.ue[j + 1]);
        let mu_face = 0.5 * (cache.mu[j] + cache.mu[j + 1]);
        let neps_face = 0.5 * (neps_old[j] + neps_old[j + 1]);
        let kappa = 10.0 / 9.0 * mu_face * neps_face / grid.center_spacing(j);
        a[j] = 5.0 / 3.0 * ue_face.max(0.0) + kappa / cache.ne[j];
        b[j] = 5.0 / 3.0 * ue_face.min(0.0) - kappa / cache.ne[j + 1];
    }

    let mut m = Tridiagonal::zeros(n);
    let mut rhs = vec![0.0; n];
    for i in 1..n - 1 {
        let dz = grid.cell_width(i);
        let ne = cache.ne[i];
        let epsilon = neps_old[i] / ne;
        let source = cache.ohmic_heating[i]
            - wall_power_loss(params, z[i], ne, epsilon)
            - inelastic_loss(u, params, cache, i);

        m.lower[i] = -a[i - 1] / dz;
        m.diag[i] = 1.0 / dt + (a[i] - b[i - 1]) / dz;
        m.upper[i] = b[i] / dz;
        rhs[i] = neps_old[i] / dt + source;
    }

    boundary_row(&mut m, &mut rhs, &params.left.energy, 0, 1, neps_old[0]);
    boundary_row(&mut m, &mut rhs, &params.right.energy, n - 1, n - 2, neps_old[n - 1]);

    let mut x = vec![0.0; n];
    m.solve_into(&rhs, &mut x)?;

    // Floor the interior only; Dirichlet boundary values are kept as set.
    let floor_t = params.config.min_electron_temperature;
    for i in 1..n - 1 {
        u[[row, i]] = x[i].max(1.5 * cache.ne[i] * floor_t);
    }
    for (bc, b, interior) in [(&params.left.energy, 0, 1), (&params.right.energy, n - 1, n - 2)] {
        u[[row, b]] = match bc {
            BoundaryCondition::NeumannEnergy => u[[row, interior]],
            _ => x[b],
        };
    }
    Ok(())
}

fn boundary_row(
    m: &mut Tridiagonal,
    rhs: &mut [f64],
    bc: &BoundaryCondition,
    b: usize,
    interior: usize,
    value: f64,
) {
    m.set_identity_row(b);
    match bc {
        BoundaryCondition::NeumannEnergy => {
            if interior > b {
                m.upper[b] = -1.0;
            } else {
                m.lower[b] = -1.0;
            }
            rhs[b] = 0.0;
        }
        _ => rhs[b] = value,
    }
}
