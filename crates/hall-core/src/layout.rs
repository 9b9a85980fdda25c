//! Row layout of the state array `U[variable, cell]`.
//!
//! Fluids occupy consecutive row blocks in the order they were given; the
//! electron energy density `nϵ` is always the last row.

use hall_types::species::Fluid;
use ndarray::Array2;
use std::ops::Range;

/// Maximum rows a single fluid can own (Euler: ρ, ρu, E).
pub const MAX_FLUID_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct StateIndex {
    /// Row range of each fluid, in fluid order.
    pub fluid_ranges: Vec<Range<usize>>,
    /// Fluids with charge 0.
    pub neutrals: Vec<usize>,
    /// Fluids with charge > 0.
    pub ions: Vec<usize>,
    /// Electron energy density row.
    pub n_eps: usize,
    /// Total row count.
    pub nvars: usize,
}

impl StateIndex {
    pub fn new(fluids: &[Fluid]) -> Self {
        let mut fluid_ranges = Vec::with_capacity(fluids.len());
        let mut neutrals = Vec::new();
        let mut ions = Vec::new();
        let mut row = 0;
        for (k, fluid) in fluids.iter().enumerate() {
            fluid_ranges.push(row..row + fluid.nvars());
            row += fluid.nvars();
            if fluid.species.is_neutral() {
                neutrals.push(k);
            } else {
                ions.push(k);
            }
        }
        StateIndex {
            fluid_ranges,
            neutrals,
            ions,
            n_eps: row,
            nvars: row + 1,
        }
    }

    /// Number of rows owned by fluids (everything but `nϵ`).
    pub fn fluid_rows(&self) -> usize {
        self.n_eps
    }

    /// Density row of fluid `k`.
    pub fn density_row(&self, k: usize) -> usize {
        self.fluid_ranges[k].start
    }

    /// Copy fluid `k`'s rows at cell `i` into a fixed buffer.
    #[inline]
    pub fn fluid_state(&self, u: &Array2<f64>, k: usize, i: usize) -> [f64; MAX_FLUID_ROWS] {
        let mut out = [0.0; MAX_FLUID_ROWS];
        for (slot, row) in self.fluid_ranges[k].clone().enumerate() {
            out[slot] = u[[row, i]];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hall_types::species::{ConservationLaw, Element, Species};

    #[test]
    fn test_layout_neutral_plus_three_ions() {
        let xe = Element::xenon();
        let mut fluids = vec![Fluid::new(
            Species::new(xe.clone(), 0),
            ConservationLaw::ContinuityOnly { u: 300.0, t: 500.0 },
        )];
        for z in 1..=3 {
            fluids.push(Fluid::new(
                Species::new(xe.clone(), z),
                ConservationLaw::IsothermalEuler { t: 1000.0 },
            ));
        }
        let index = StateIndex::new(&fluids);
        assert_eq!(index.fluid_ranges[0], 0..1);
        assert_eq!(index.fluid_ranges[1], 1..3);
        assert_eq!(index.fluid_ranges[3], 5..7);
        assert_eq!(index.n_eps, 7);
        assert_eq!(index.nvars, 8);
        assert_eq!(index.neutrals, vec![0]);
        assert_eq!(index.ions, vec![1, 2, 3]);
    }

    #[test]
    fn test_fluid_state_copy() {
        let fluids = vec![Fluid::new(
            Species::new(Element::argon(), 1),
            ConservationLaw::EulerEquations,
        )];
        let index = StateIndex::new(&fluids);
        let u = Array2::from_shape_fn((index.nvars, 4), |(r, c)| (10 * r + c) as f64);
        assert_eq!(index.fluid_state(&u, 0, 2), [2.0, 12.0, 22.0]);
    }
}
