// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Elementary charge (C)
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Electron mass (kg)
pub const M_ELECTRON: f64 = 9.1093837015e-31;

/// Boltzmann constant (J/K)
pub const K_BOLTZMANN: f64 = 1.380649e-23;

/// Unified atomic mass unit (kg)
pub const AMU: f64 = 1.66053906660e-27;

/// Electron-neutral rate coefficient of the Landmark benchmark (m³/s).
pub const LANDMARK_EN_RATE: f64 = 2.5e-13;

/// Reference electron-neutral cross section for xenon (m²).
pub const SIGMA_EN_REF: f64 = 6.6e-19;

/// Scale of the wall collision/loss frequencies (1/s).
pub const WALL_FREQUENCY_SCALE: f64 = 1e7;

/// Bohm anomalous collision frequency divisor: ν_an = c ω_ce / 16.
pub const BOHM_DIVISOR: f64 = 16.0;
