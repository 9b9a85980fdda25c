// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Heavy-Species Right-Hand Side
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Finite-volume time derivative of the heavy-species rows.

use crate::cache::Cache;
use crate::flux::{wave_speeds, FluxFunction};
use crate::layout::MAX_FLUID_ROWS;
use crate::params::Params;
use crate::source::source_terms;
use ndarray::Array2;

/// Left and right states of edge `j` for fluid `k`. Faces next to a boundary
/// cell are first order.
fn face_states(
    u: &Array2<f64>,
    params: &Params,
    k: usize,
    j: usize,
) -> ([f64; MAX_FLUID_ROWS], [f64; MAX_FLUID_ROWS]) {
    let index = &params.index;
    let ncells = u.ncols();
    let mut ul = index.fluid_state(u, k, j);
    let mut ur = index.fluid_state(u, k, j + 1);
    let scheme = &params.scheme;
    if !scheme.reconstruct {
        return (ul, ur);
    }
    for (slot, row) in index.fluid_ranges[k].clone().enumerate() {
        if j >= 1 && j + 1 <= ncells - 2 {
            let (_, right_face) = scheme
                .limiter
                .face_values(u[[row, j - 1]], u[[row, j]], u[[row, j + 1]]);
            let (left_face, _) = scheme
                .limiter
                .face_values(u[[row, j]], u[[row, j + 1]], u[[row, j + 2]]);
            ul[slot] = right_face;
            ur[slot] = left_face;
        }
    }
    (ul, ur)
}

/// Evaluate every interface flux exactly once into `cache.fluxes`
/// (`[variable, edge]`) and record the largest stable step in
/// `cache.max_timestep`.
pub fn compute_fluxes(u: &Array2<f64>, params: &Params, cache: &mut Cache) {
    let index = &params.index;
    let grid = &params.grid;
    let ncells = grid.ncells();
    let coupled = params.config.electrons;
    let flux_function = params.scheme.flux_function;
    let mut max_dt = f64::INFINITY;
    let te = &cache.te;

    for (k, fluid) in params.fluids.iter().enumerate() {
        let te_at = |i: usize| if coupled && fluid.charge() > 0 { te[i] } else { 0.0 };

        let global_speed = if flux_function == FluxFunction::GlobalLaxFriedrichs {
            (0..ncells)
                .map(|i| {
                    let (v, a) = wave_speeds(&index.fluid_state(u, k, i), fluid, te_at(i));
                    v.abs() + a
                })
                .fold(0.0, f64::max)
        } else {
            0.0
        };

        let mut fluxes = Vec::with_capacity(grid.nedges());
        for j in 0..grid.nedges() {
            let (ul, ur) = face_states(u, params, k, j);
            let (f, s) = flux_function.flux(&ul, &ur, fluid, (te_at(j), te_at(j + 1)), global_speed);
            if s > 0.0 {
                max_dt = max_dt.min(grid.center_spacing(j) / s);
            }
            fluxes.push(f);
        }
        for (j, f) in fluxes.iter().enumerate() {
            for (slot, row) in index.fluid_ranges[k].clone().enumerate() {
                cache.fluxes[[row, j]] = f[slot];
            }
        }
    }
    cache.max_timestep = max_dt;
}

/// dU/dt for the heavy species: flux divergence plus sources on interior
/// cells. Boundary cells and the electron energy row get zero.
pub fn heavy_species_rhs(du: &mut Array2<f64>, u: &Array2<f64>, params: &Params, cache: &mut Cache) {
    compute_fluxes(u, params, cache);
    du.fill(0.0);

    let ncells = params.grid.ncells();
    let nfluid = params.index.fluid_rows();
    let mut sources = vec![0.0; params.index.nvars];
    for i in 1..ncells - 1 {
        let dz = params.grid.cell_width(i);
        for row in 0..nfluid {
            du[[row, i]] = -(cache.fluxes[[row, i]] - cache.fluxes[[row, i - 1]]) / dz;
        }
        sources.iter_mut().for_each(|s| *s = 0.0);
        source_terms(i, u, params, cache, &mut sources);
        for row in 0..nfluid {
            du[[row, i]] += sources[row];
        }
    }
}
