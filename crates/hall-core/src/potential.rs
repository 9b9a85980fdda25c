// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Potential Solve and Gradients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Electrostatic potential on edges and the potential/pressure gradients on
//! cell centres.
//!
//! Potential lives on the edges. Interior cell `i` lies between edges `i-1`
//! and `i`; the two boundary cells sit on the first and last edge.

use hall_math::finite_diff::{backward_difference, forward_difference, gradient_nonuniform};
use hall_math::interp::lerp;
use hall_math::tridiag::Tridiagonal;
use hall_types::constants::Q_ELECTRON;
use hall_types::error::{HallError, HallResult};
use hall_types::state::Grid1D;
use std::fmt::Debug;

/// Cell-centred inputs of a potential solve.
#[derive(Debug, Clone, Copy)]
pub struct PotentialInputs<'a> {
    pub grid: &'a Grid1D,
    /// Electron density [m⁻³]
    pub ne: &'a [f64],
    /// Cross-field mobility [m²/(V·s)]
    pub mu: &'a [f64],
    /// Ion current density [A/m²]
    pub ji: &'a [f64],
    /// Electron pressure gradient [eV/m⁴]
    pub grad_pe: &'a [f64],
}

/// Computes edge potentials from mobility, currents and the two boundary
/// potentials.
pub trait PotentialSolver: Debug + Send + Sync {
    fn solve(
        &self,
        inputs: &PotentialInputs,
        phi_left: f64,
        phi_right: f64,
        phi: &mut [f64],
    ) -> HallResult<()>;
}

/// Finite-volume discretisation of current continuity on edges,
///
///   ∂z[e·ne·μ·(∂zϕ − ∂z pe/ne)] = ∂z ji,
///
/// with the potential gradient in cell `i` taken as (ϕ_i − ϕ_{i−1})/Δz_i and
/// Dirichlet values on the first and last edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentContinuitySolver;

impl PotentialSolver for CurrentContinuitySolver {
    fn solve(
        &self,
        inputs: &PotentialInputs,
        phi_left: f64,
        phi_right: f64,
        phi: &mut [f64],
    ) -> HallResult<()> {
        let grid = inputs.grid;
        let nedges = grid.nedges();
        if phi.len() != nedges {
            return Err(HallError::InvalidArgument(format!(
                "potential buffer has {} entries, grid has {nedges} edges",
                phi.len()
            )));
        }

        // Conductance of interior cell i: e·ne·μ/Δz
        let sigma = |i: usize| Q_ELECTRON * inputs.ne[i] * inputs.mu[i] / grid.cell_width(i);
        // Ion plus diffusive electron current in cell i
        let source = |i: usize| inputs.ji[i] + Q_ELECTRON * inputs.mu[i] * inputs.grad_pe[i];

        let mut a = Tridiagonal::zeros(nedges);
        let mut rhs = vec![0.0; nedges];
        a.set_identity_row(0);
        rhs[0] = phi_left;
        a.set_identity_row(nedges - 1);
        rhs[nedges - 1] = phi_right;

        for j in 1..nedges - 1 {
            let (s_left, s_right) = (sigma(j), sigma(j + 1));
            a.lower[j] = s_left;
            a.diag[j] = -(s_left + s_right);
            a.upper[j] = s_right;
            rhs[j] = source(j + 1) - source(j);
        }

        a.solve_into(&rhs, phi)?;
        log::trace!(
            "potential solve: phi[0] = {:.3} V, phi[{}] = {:.3} V",
            phi[0],
            nedges - 1,
            phi[nedges - 1]
        );
        Ok(())
    }
}

/// Electron pressure gradient on cell centres: one-sided 3-point stencils at
/// the boundary cells, centred 3-point stencil inside.
pub fn compute_pressure_gradient(z: &[f64], pe: &[f64], grad_pe: &mut [f64]) {
    gradient_nonuniform(z, pe, grad_pe);
}

/// Potential interpolated to cell centres and its gradient per cell.
pub fn compute_gradients(grid: &Grid1D, phi: &[f64], phi_cell: &mut [f64], grad_phi: &mut [f64]) {
    let ncells = grid.ncells();
    let nedges = grid.nedges();
    let e = grid.edge_positions();
    let z = grid.cell_centers();

    phi_cell[0] = phi[0];
    phi_cell[ncells - 1] = phi[nedges - 1];
    for i in 1..ncells - 1 {
        phi_cell[i] = lerp(z[i], e[i - 1], e[i], phi[i - 1], phi[i]);
    }

    grad_phi[0] = forward_difference(phi[0], phi[1], phi[2], e[0], e[1], e[2]);
    grad_phi[ncells - 1] = backward_difference(
        phi[nedges - 3],
        phi[nedges - 2],
        phi[nedges - 1],
        e[nedges - 3],
        e[nedges - 2],
        e[nedges - 1],
    );
    for i in 1..ncells - 1 {
        grad_phi[i] = (phi[i] - phi[i - 1]) / (e[i] - e[i - 1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn solve_uniform(grid: &Grid1D, ji: f64, grad_pe: f64) -> Vec<f64> {
        let n = grid.ncells();
        let ne = vec![1e17; n];
        let mu = vec![2.0; n];
        let ji = vec![ji; n];
        let grad_pe = vec![grad_pe; n];
        let inputs = PotentialInputs {
            grid,
            ne: &ne,
            mu: &mu,
            ji: &ji,
            grad_pe: &grad_pe,
        };
        let mut phi = vec![0.0; grid.nedges()];
        CurrentContinuitySolver
            .solve(&inputs, 300.0, 0.0, &mut phi)
            .expect("valid system");
        phi
    }

    #[test]
    fn test_uniform_plasma_gives_linear_potential() {
        let grid = Grid1D::uniform(52, 0.0, 0.05).unwrap();
        // Uniform currents have zero divergence.
        let phi = solve_uniform(&grid, 40.0, 1e20);
        let e = grid.edge_positions();
        for (j, p) in phi.iter().enumerate() {
            let exact = 300.0 * (1.0 - e[j] / 0.05);
            assert!((p - exact).abs() < 1e-8, "phi[{j}] = {p}, expected {exact}");
        }
    }

    #[test]
    fn test_nonuniform_grid_linear_potential() {
        let edges = Array1::from(vec![0.0, 0.004, 0.01, 0.013, 0.02, 0.031, 0.04]);
        let grid = Grid1D::from_edges(edges).unwrap();
        let phi = solve_uniform(&grid, 0.0, 0.0);
        let e = grid.edge_positions();
        for (j, p) in phi.iter().enumerate() {
            let exact = 300.0 * (1.0 - e[j] / 0.04);
            assert!((p - exact).abs() < 1e-8);
        }
    }

    #[test]
    fn test_solver_rejects_wrong_buffer() {
        let grid = Grid1D::uniform(10, 0.0, 1.0).unwrap();
        let v = vec![1.0; 10];
        let inputs = PotentialInputs {
            grid: &grid,
            ne: &v,
            mu: &v,
            ji: &v,
            grad_pe: &v,
        };
        let mut phi = vec![0.0; 3];
        let err = CurrentContinuitySolver.solve(&inputs, 1.0, 0.0, &mut phi);
        assert!(matches!(err, Err(HallError::InvalidArgument(_))));
    }

    #[test]
    fn test_gradients_of_linear_and_quadratic_potential() {
        let grid = Grid1D::uniform(42, 0.0, 0.04).unwrap();
        let e = grid.edge_positions().to_vec();
        let z = grid.cell_centers().to_vec();
        let n = grid.ncells();
        let mut phi_cell = vec![0.0; n];
        let mut grad = vec![0.0; n];

        let linear: Vec<f64> = e.iter().map(|x| 300.0 - 5000.0 * x).collect();
        compute_gradients(&grid, &linear, &mut phi_cell, &mut grad);
        for i in 0..n {
            assert!((grad[i] + 5000.0).abs() < 1e-6, "grad[{i}] = {}", grad[i]);
            assert!((phi_cell[i] - (300.0 - 5000.0 * z[i])).abs() < 1e-9);
        }

        // Quadratic: one-sided stencils are exact, first differences are exact
        // at the cell midpoint.
        let quad = |x: f64| 1e5 * x * x;
        let dquad = |x: f64| 2e5 * x;
        let phi: Vec<f64> = e.iter().map(|&x| quad(x)).collect();
        compute_gradients(&grid, &phi, &mut phi_cell, &mut grad);
        assert!((grad[0] - dquad(z[0])).abs() < 1e-6);
        assert!((grad[n - 1] - dquad(z[n - 1])).abs() < 1e-6);
        for i in 1..n - 1 {
            assert!((grad[i] - dquad(z[i])).abs() < 1e-6);
        }
        assert_eq!(phi_cell[0], phi[0]);
        assert_eq!(phi_cell[n - 1], phi[e.len() - 1]);
    }

    #[test]
    fn test_pressure_gradient_quadratic() {
        let grid = Grid1D::uniform(22, 0.0, 0.02).unwrap();
        let z = grid.cell_centers();
        let pe: Vec<f64> = z.iter().map(|x| 1e18 * (1.0 + 50.0 * x + 2000.0 * x * x)).collect();
        let mut g = vec![0.0; z.len()];
        compute_pressure_gradient(z, &pe, &mut g);
        for (i, gi) in g.iter().enumerate() {
            let exact = 1e18 * (50.0 + 4000.0 * z[i]);
            assert!((gi - exact).abs() / exact < 1e-9, "grad_pe[{i}]");
        }
    }
}
