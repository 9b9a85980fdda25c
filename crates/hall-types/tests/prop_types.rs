// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Property-Based Tests (proptest) for hall-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for hall-types using proptest.
//!
//! Covers: Grid1D construction invariants, element gas constants,
//! configuration serialization roundtrip.

use hall_types::config::SimulationConfig;
use hall_types::species::{Element, Propellant};
use hall_types::state::Grid1D;
use ndarray::Array1;
use proptest::prelude::*;

// ── Grid1D Construction Invariants ───────────────────────────────────

proptest! {
    /// Edge count is always one less than the cell count.
    #[test]
    fn grid_edge_count(ncells in 4usize..512) {
        let grid = Grid1D::uniform(ncells, 0.0, 0.05).unwrap();
        prop_assert_eq!(grid.ncells(), ncells);
        prop_assert_eq!(grid.nedges(), ncells - 1);
    }

    /// Boundary cells coincide with the domain ends.
    #[test]
    fn grid_boundary_cells_on_edges(
        ncells in 4usize..256,
        z0 in -1.0f64..1.0,
        length in 0.01f64..10.0,
    ) {
        let grid = Grid1D::uniform(ncells, z0, z0 + length).unwrap();
        prop_assert!((grid.cells[0] - z0).abs() < 1e-12);
        prop_assert!((grid.cells[ncells - 1] - (z0 + length)).abs() < 1e-9);
        prop_assert!((grid.z_max() - grid.z_min() - length).abs() < 1e-9);
    }

    /// Non-uniform grids keep every interior cell strictly between its edges,
    /// and the control volumes tile the domain.
    #[test]
    fn grid_nonuniform_tiling(
        widths in prop::collection::vec(0.001f64..1.0, 3..64),
    ) {
        let mut z = 0.0;
        let mut edges = vec![0.0];
        for w in &widths {
            z += w;
            edges.push(z);
        }
        let grid = Grid1D::from_edges(Array1::from(edges)).unwrap();
        let mut total = 0.0;
        for i in 1..grid.ncells() - 1 {
            prop_assert!(grid.cells[i] > grid.edges[i - 1]);
            prop_assert!(grid.cells[i] < grid.edges[i]);
            total += grid.cell_width(i);
        }
        prop_assert!((total - z).abs() < 1e-9);
    }
}

// ── Element Gas Constants ────────────────────────────────────────────

proptest! {
    /// Mayer's relation and γ = cp/cv hold for any adiabatic index.
    #[test]
    fn element_mayer_relation(mass_amu in 1.0f64..300.0, gamma in 1.05f64..1.8) {
        let el = Element::new("Test", "T", 1, mass_amu, gamma);
        prop_assert!(((el.cp - el.cv) - el.r).abs() / el.r < 1e-12);
        prop_assert!((el.cp / el.cv - gamma).abs() < 1e-12);
    }
}

// ── Config Roundtrip ─────────────────────────────────────────────────

proptest! {
    /// Serialize-deserialize preserves the numeric knobs.
    #[test]
    fn config_roundtrip(
        voltage in 100.0f64..800.0,
        ncells in 4usize..1000,
        cfl in 0.05f64..1.0,
        krypton in any::<bool>(),
    ) {
        let mut cfg = SimulationConfig::default();
        cfg.discharge_voltage = voltage;
        cfg.grid.ncells = ncells;
        cfg.timestep.cfl = cfl;
        if krypton {
            cfg.propellant = Propellant::Krypton;
        }
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2 = SimulationConfig::from_json_str(&json).unwrap();
        prop_assert!((cfg2.discharge_voltage - voltage).abs() < 1e-9);
        prop_assert_eq!(cfg2.grid.ncells, ncells);
        prop_assert_eq!(cfg2.propellant, cfg.propellant);
        prop_assert!(cfg2.validate().is_ok());
    }
}
