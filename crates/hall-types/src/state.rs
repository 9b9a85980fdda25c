// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{HallError, HallResult};
use ndarray::Array1;

/// Smallest grid that still has a 3-point stencil on every boundary.
pub const MIN_CELLS: usize = 4;

/// 1D finite-volume grid along the thruster axis.
///
/// The first and last cells sit exactly on the first and last edge (zero-width
/// ghost cells). Interior cell `i` lies between edges `i - 1` and `i`, so
/// `edges.len() == cells.len() - 1`.
#[derive(Debug, Clone)]
pub struct Grid1D {
    pub cells: Array1<f64>, // Cell centres [ncells]
    pub edges: Array1<f64>, // Face positions [ncells - 1]
}

impl Grid1D {
    /// Uniform grid with `ncells` cells (two of them boundary cells) on [z0, z1].
    pub fn uniform(ncells: usize, z0: f64, z1: f64) -> HallResult<Self> {
        if ncells < MIN_CELLS {
            return Err(HallError::ConfigError(format!(
                "grid requires at least {MIN_CELLS} cells, got {ncells}"
            )));
        }
        let edges = Array1::linspace(z0, z1, ncells - 1);
        Self::from_edges(edges)
    }

    /// Build from an arbitrary, strictly increasing set of edges.
    pub fn from_edges(edges: Array1<f64>) -> HallResult<Self> {
        let nedges = edges.len();
        if nedges + 1 < MIN_CELLS {
            return Err(HallError::ConfigError(format!(
                "grid requires at least {} edges, got {nedges}",
                MIN_CELLS - 1
            )));
        }
        if edges.iter().any(|z| !z.is_finite()) {
            return Err(HallError::ConfigError(
                "grid edges must be finite".to_string(),
            ));
        }
        if (1..nedges).any(|i| edges[i] <= edges[i - 1]) {
            return Err(HallError::ConfigError(
                "grid edges must be strictly increasing".to_string(),
            ));
        }

        let ncells = nedges + 1;
        let cells = Array1::from_shape_fn(ncells, |i| {
            if i == 0 {
                edges[0]
            } else if i == ncells - 1 {
                edges[nedges - 1]
            } else {
                0.5 * (edges[i - 1] + edges[i])
            }
        });

        Ok(Grid1D { cells, edges })
    }

    pub fn ncells(&self) -> usize {
        self.cells.len()
    }

    pub fn nedges(&self) -> usize {
        self.edges.len()
    }

    /// Control-volume width of cell `i`. Boundary cells have zero width.
    pub fn cell_width(&self, i: usize) -> f64 {
        if i == 0 || i == self.ncells() - 1 {
            0.0
        } else {
            self.edges[i] - self.edges[i - 1]
        }
    }

    /// Distance between the two cell centres adjacent to edge `j`.
    pub fn center_spacing(&self, j: usize) -> f64 {
        self.cells[j + 1] - self.cells[j]
    }

    /// Cell centres as a contiguous slice (both arrays are built in standard layout).
    pub fn cell_centers(&self) -> &[f64] {
        self.cells.as_slice().unwrap_or(&[])
    }

    pub fn edge_positions(&self) -> &[f64] {
        self.edges.as_slice().unwrap_or(&[])
    }

    pub fn z_min(&self) -> f64 {
        self.edges[0]
    }

    pub fn z_max(&self) -> f64 {
        self.edges[self.nedges() - 1]
    }
}
