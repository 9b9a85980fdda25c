// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Electron Closures
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Electron collision frequencies, cross-field mobility, the discharge current
//! and the electron velocity that follows from current continuity.

use crate::cache::Cache;
use crate::layout::StateIndex;
use crate::params::Params;
use crate::potential::compute_pressure_gradient;
use crate::thermo;
use hall_math::interp::trapz;
use hall_types::config::AnomalousTransport;
use hall_types::constants::{
    BOHM_DIVISOR, LANDMARK_EN_RATE, M_ELECTRON, Q_ELECTRON, SIGMA_EN_REF, WALL_FREQUENCY_SCALE,
};
use hall_types::species::Fluid;
use ndarray::Array2;

/// Quasineutral electron density Σ Z·n_Z at cell `i` (not floored).
pub fn electron_density(u: &Array2<f64>, fluids: &[Fluid], index: &StateIndex, i: usize) -> f64 {
    index
        .ions
        .iter()
        .map(|&k| fluids[k].charge() as f64 * u[[index.density_row(k), i]] / fluids[k].mass())
        .sum()
}

/// Σ n over the neutral fluids at cell `i`.
pub fn neutral_density(u: &Array2<f64>, fluids: &[Fluid], index: &StateIndex, i: usize) -> f64 {
    index
        .neutrals
        .iter()
        .map(|&k| u[[index.density_row(k), i]] / fluids[k].mass())
        .sum()
}

/// Electron cyclotron frequency eB/m_e [rad/s].
#[inline]
pub fn cyclotron_frequency(b: f64) -> f64 {
    Q_ELECTRON * b / M_ELECTRON
}

/// Electron-neutral momentum-transfer frequency [1/s].
pub fn electron_neutral_collision_frequency(te: f64, nn: f64, landmark: bool) -> f64 {
    if landmark {
        return LANDMARK_EN_RATE * nn;
    }
    let x = te / 4.0;
    let sigma = SIGMA_EN_REF * ((x - 0.1) / (1.0 + x.powf(1.6))).max(0.0);
    let v_th = (8.0 * Q_ELECTRON * te / (std::f64::consts::PI * M_ELECTRON)).sqrt();
    sigma * nn * v_th
}

/// Coulomb logarithm for electron-ion collisions (NRL formulary).
pub fn coulomb_logarithm(ne: f64, te: f64, z: f64) -> f64 {
    if te < 10.0 * z * z {
        23.0 - 0.5 * (1e-6 * ne * z * z / (te * te * te)).ln()
    } else {
        24.0 - 0.5 * (1e-6 * ne / (te * te)).ln()
    }
}

/// Electron-ion collision frequency [1/s]; zero under Landmark conventions.
pub fn electron_ion_collision_frequency(ne: f64, te: f64, z: f64, landmark: bool) -> f64 {
    if landmark {
        return 0.0;
    }
    2.9e-12 * z * z * ne * coulomb_logarithm(ne, te, z) / te.powf(1.5)
}

/// Classical wall collision frequency, active inside the channel only.
pub fn wall_collision_frequency(z: f64, channel_length: f64, alpha: f64) -> f64 {
    if z < channel_length {
        alpha * WALL_FREQUENCY_SCALE
    } else {
        0.0
    }
}

/// Anomalous (Bohm-like) collision frequency c·ω_ce/16.
pub fn anomalous_collision_frequency(
    model: &AnomalousTransport,
    z: f64,
    channel_length: f64,
    b: f64,
) -> f64 {
    match model {
        AnomalousTransport::None => 0.0,
        AnomalousTransport::TwoZoneBohm { inner, outer } => {
            let c = if z < channel_length { inner } else { outer };
            c * cyclotron_frequency(b) / BOHM_DIVISOR
        }
    }
}

/// Cross-field mobility μ⊥ = (e / m_e ν_c) / (1 + (ω_ce/ν_c)²) [m²/(V·s)].
#[inline]
pub fn electron_mobility(nu_c: f64, b: f64) -> f64 {
    let omega = cyclotron_frequency(b) / nu_c;
    Q_ELECTRON / (M_ELECTRON * nu_c) / (1.0 + omega * omega)
}

/// Per-cell closures: floors, pressure, collision frequencies, mobility,
/// effective charge, ion current density and reaction rate coefficients.
pub fn update_closures(u: &Array2<f64>, params: &Params, cache: &mut Cache) {
    let cfg = &params.config;
    let index = &params.index;
    let fluids = &params.fluids;
    let landmark = cfg.landmark;
    let channel_length = cfg.geometry.channel_length;

    for i in 0..params.grid.ncells() {
        let z = params.grid.cells[i];
        let b = params.bfield[i];

        let ne = electron_density(u, fluids, index, i).max(cfg.min_number_density);
        let nn = neutral_density(u, fluids, index, i);
        let te = (2.0 / 3.0 * u[[index.n_eps, i]] / ne).max(cfg.min_electron_temperature);
        let epsilon = 1.5 * te;

        let mut n_ion = 0.0;
        let mut zn_ion = 0.0;
        let mut ji = 0.0;
        for &k in &index.ions {
            let fluid = &fluids[k];
            let state = index.fluid_state(u, k, i);
            let n = thermo::number_density(&state, fluid);
            let z_k = fluid.charge() as f64;
            n_ion += n;
            zn_ion += z_k * n;
            ji += z_k * Q_ELECTRON * n * thermo::velocity(&state, fluid);
        }
        let z_eff = if n_ion > 0.0 {
            (zn_ion / n_ion).max(1.0)
        } else {
            1.0
        };

        let mut nu_iz = 0.0;
        for (r, reaction) in params.ionization.iter().enumerate() {
            let k = reaction.reaction.rate_coefficient(epsilon);
            cache.k_iz[[r, i]] = k;
            nu_iz += k * u[[index.density_row(reaction.reactant), i]] / fluids[reaction.reactant].mass();
        }
        let mut nu_ex = 0.0;
        for (r, reaction) in params.excitation.iter().enumerate() {
            let k = reaction.reaction.rate_coefficient(epsilon);
            cache.k_ex[[r, i]] = k;
            nu_ex += k * u[[index.density_row(reaction.fluid), i]] / fluids[reaction.fluid].mass();
        }

        let nu_en = electron_neutral_collision_frequency(te, nn, landmark);
        let nu_ei = electron_ion_collision_frequency(ne, te, z_eff, landmark);
        let nu_wall = wall_collision_frequency(z, channel_length, cfg.wall.collision_coefficient);
        let nu_anom = anomalous_collision_frequency(&cfg.anomalous_transport, z, channel_length, b);
        let mut nu_c = nu_en + nu_ei + nu_wall + nu_anom;
        if !landmark {
            nu_c += nu_iz + nu_ex;
        }

        cache.ne[i] = ne;
        cache.nn[i] = nn;
        cache.te[i] = te;
        cache.pe[i] = if landmark { 1.5 * ne * te } else { ne * te };
        cache.nu_en[i] = nu_en;
        cache.nu_ei[i] = nu_ei;
        cache.nu_wall[i] = nu_wall;
        cache.nu_anom[i] = nu_anom;
        cache.nu_iz[i] = nu_iz;
        cache.nu_ex[i] = nu_ex;
        cache.nu_c[i] = nu_c;
        cache.mu[i] = electron_mobility(nu_c, b);
        cache.z_eff[i] = z_eff;
        cache.ji[i] = ji;
    }
}

/// Discharge current [A] from the integrated electron momentum equation:
///
/// Id = (ΔV + ∫ (ji/(eμ) + ∇pe)/ne dz) / ∫ 1/(e·ne·μ·A) dz
///
/// Fills `cache.grad_pe` on the way, so it must run after `update_closures`.
pub fn discharge_current(params: &Params, cache: &mut Cache) -> f64 {
    let z = params.grid.cell_centers();
    compute_pressure_gradient(z, &cache.pe, &mut cache.grad_pe);

    let area = params.area;
    let drive: Vec<f64> = (0..z.len())
        .map(|i| (cache.ji[i] / (Q_ELECTRON * cache.mu[i]) + cache.grad_pe[i]) / cache.ne[i])
        .collect();
    let resistance: Vec<f64> = (0..z.len())
        .map(|i| 1.0 / (Q_ELECTRON * cache.ne[i] * cache.mu[i] * area))
        .collect();

    let delta_v = params.config.discharge_voltage - params.config.cathode_potential;
    (delta_v + trapz(z, &drive)) / trapz(z, &resistance)
}

/// Electron velocity from current continuity, ue = (ji − Id/A)/(e·ne), and
/// the matching kinetic energy ½·m_e·ue²/e [eV].
pub fn update_electron_velocity(params: &Params, cache: &mut Cache) {
    let jd = cache.discharge_current / params.area;
    for i in 0..cache.ncells() {
        let ue = (cache.ji[i] - jd) / (Q_ELECTRON * cache.ne[i]);
        cache.ue[i] = ue;
        cache.kinetic[i] = 0.5 * M_ELECTRON * ue * ue / Q_ELECTRON;
    }
}
