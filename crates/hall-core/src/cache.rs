// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Cache
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-step derived quantities.
//!
//! The electron fields are rewritten from `U` and the parameters on each
//! call to `update_values`. Three fields carry over between calls: `fluxes`
//! and `max_timestep` hold the last right-hand-side evaluation, and `dt` is
//! the step size proposed from that `max_timestep`.

use ndarray::Array2;

/// Derived per-cell and per-edge quantities shared through the step pipeline.
#[derive(Debug, Clone)]
pub struct Cache {
    /// Electron number density [m⁻³]
    pub ne: Vec<f64>,
    /// Electron temperature [eV]
    pub te: Vec<f64>,
    /// Electron pressure [eV/m³]
    pub pe: Vec<f64>,
    /// Neutral number density [m⁻³]
    pub nn: Vec<f64>,
    pub nu_en: Vec<f64>,
    pub nu_ei: Vec<f64>,
    pub nu_wall: Vec<f64>,
    pub nu_anom: Vec<f64>,
    pub nu_iz: Vec<f64>,
    pub nu_ex: Vec<f64>,
    /// Total electron momentum-transfer collision frequency [1/s]
    pub nu_c: Vec<f64>,
    /// Cross-field electron mobility [m²/(V·s)]
    pub mu: Vec<f64>,
    pub z_eff: Vec<f64>,
    /// Ion current density [A/m²]
    pub ji: Vec<f64>,
    /// Electron axial velocity [m/s]
    pub ue: Vec<f64>,
    /// Electron kinetic energy [eV]
    pub kinetic: Vec<f64>,
    /// Ohmic heating ne·ue·∇ϕ [eV/(m³·s)]
    pub ohmic_heating: Vec<f64>,
    pub grad_pe: Vec<f64>,
    /// Potential interpolated to cell centres [V]
    pub phi_cell: Vec<f64>,
    pub grad_phi: Vec<f64>,
    /// Potential on edges [V]
    pub phi: Vec<f64>,
    /// Ionization rate coefficients `[reaction, cell]` [m³/s]
    pub k_iz: Array2<f64>,
    /// Excitation rate coefficients `[reaction, cell]` [m³/s]
    pub k_ex: Array2<f64>,
    /// Interface fluxes `[variable, edge]`
    pub fluxes: Array2<f64>,
    /// Discharge current [A]
    pub discharge_current: f64,
    /// Largest stable explicit step from the last flux evaluation [s]
    pub max_timestep: f64,
    /// Current step size [s]
    pub dt: f64,
}

impl Cache {
    pub fn new(
        ncells: usize,
        nedges: usize,
        nvars: usize,
        n_ionization: usize,
        n_excitation: usize,
        dt: f64,
    ) -> Self {
        let cells = || vec![0.0; ncells];
        Cache {
            ne: cells(),
            te: cells(),
            pe: cells(),
            nn: cells(),
            nu_en: cells(),
            nu_ei: cells(),
            nu_wall: cells(),
            nu_anom: cells(),
            nu_iz: cells(),
            nu_ex: cells(),
            nu_c: cells(),
            mu: cells(),
            z_eff: vec![1.0; ncells],
            ji: cells(),
            ue: cells(),
            kinetic: cells(),
            ohmic_heating: cells(),
            grad_pe: cells(),
            phi_cell: cells(),
            grad_phi: cells(),
            phi: vec![0.0; nedges],
            k_iz: Array2::zeros((n_ionization, ncells)),
            k_ex: Array2::zeros((n_excitation, ncells)),
            fluxes: Array2::zeros((nvars, nedges)),
            discharge_current: 0.0,
            max_timestep: f64::INFINITY,
            dt,
        }
    }

    pub fn ncells(&self) -> usize {
        self.ne.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_shapes() {
        let cache = Cache::new(10, 9, 4, 2, 1, 1e-8);
        assert_eq!(cache.ncells(), 10);
        assert_eq!(cache.phi.len(), 9);
        assert_eq!(cache.k_iz.dim(), (2, 10));
        assert_eq!(cache.k_ex.dim(), (1, 10));
        assert_eq!(cache.fluxes.dim(), (4, 9));
        assert!(cache.max_timestep.is_infinite());
        assert!(cache.z_eff.iter().all(|&z| z == 1.0));
    }
}
