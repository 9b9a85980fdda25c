// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Thermodynamic Closures
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-cell thermodynamic closures.
//!
//! Every function takes the fluid's own rows at one cell (`[ρ]`, `[ρ, ρu]` or
//! `[ρ, ρu, E]`). Non-positive density gives NaN/Inf rather than a panic; the
//! per-step validity sweep catches it.

use crate::layout::MAX_FLUID_ROWS;
use hall_types::species::{ConservationLaw, Fluid};

#[inline]
pub fn density(u: &[f64]) -> f64 {
    u[0]
}

#[inline]
pub fn number_density(u: &[f64], fluid: &Fluid) -> f64 {
    u[0] / fluid.mass()
}

#[inline]
pub fn velocity(u: &[f64], fluid: &Fluid) -> f64 {
    match fluid.law {
        ConservationLaw::ContinuityOnly { u: v, .. } => v,
        _ => u[1] / u[0],
    }
}

#[inline]
pub fn pressure(u: &[f64], fluid: &Fluid) -> f64 {
    let el = &fluid.species.element;
    match fluid.law {
        ConservationLaw::ContinuityOnly { t, .. } | ConservationLaw::IsothermalEuler { t } => {
            u[0] * el.r * t
        }
        ConservationLaw::EulerEquations => (el.gamma - 1.0) * (u[2] - 0.5 * u[1] * u[1] / u[0]),
    }
}

/// Temperature [K].
#[inline]
pub fn temperature(u: &[f64], fluid: &Fluid) -> f64 {
    match fluid.law {
        ConservationLaw::ContinuityOnly { t, .. } | ConservationLaw::IsothermalEuler { t } => t,
        ConservationLaw::EulerEquations => {
            pressure(u, fluid) / (u[0] * fluid.species.element.r)
        }
    }
}

/// √(γRT)
#[inline]
pub fn sound_speed(u: &[f64], fluid: &Fluid) -> f64 {
    let el = &fluid.species.element;
    (el.gamma * el.r * temperature(u, fluid)).sqrt()
}

#[inline]
pub fn mach_number(u: &[f64], fluid: &Fluid) -> f64 {
    velocity(u, fluid) / sound_speed(u, fluid)
}

/// Specific internal energy [J/kg].
pub fn static_energy(u: &[f64], fluid: &Fluid) -> f64 {
    match fluid.law {
        ConservationLaw::EulerEquations => {
            let v = u[1] / u[0];
            u[2] / u[0] - 0.5 * v * v
        }
        _ => fluid.species.element.cv * temperature(u, fluid),
    }
}

/// Specific total (stagnation) energy [J/kg].
pub fn stagnation_energy(u: &[f64], fluid: &Fluid) -> f64 {
    match fluid.law {
        ConservationLaw::EulerEquations => u[2] / u[0],
        _ => {
            let v = velocity(u, fluid);
            static_energy(u, fluid) + 0.5 * v * v
        }
    }
}

/// Physical flux vector of the fluid's conservation law.
pub fn physical_flux(u: &[f64], fluid: &Fluid) -> [f64; MAX_FLUID_ROWS] {
    let v = velocity(u, fluid);
    match fluid.law {
        ConservationLaw::ContinuityOnly { .. } => [u[0] * v, 0.0, 0.0],
        ConservationLaw::IsothermalEuler { .. } => {
            let p = pressure(u, fluid);
            [u[1], u[1] * v + p, 0.0]
        }
        ConservationLaw::EulerEquations => {
            let p = pressure(u, fluid);
            [u[1], u[1] * v + p, v * (u[2] + p)]
        }
    }
}

/// Conserved rows from (ρ, u, T). ContinuityOnly ignores `velocity`/`temperature`
/// and IsothermalEuler ignores `temperature`.
pub fn conserved_state(
    fluid: &Fluid,
    density: f64,
    velocity: f64,
    temperature: f64,
) -> [f64; MAX_FLUID_ROWS] {
    match fluid.law {
        ConservationLaw::ContinuityOnly { .. } => [density, 0.0, 0.0],
        ConservationLaw::IsothermalEuler { .. } => [density, density * velocity, 0.0],
        ConservationLaw::EulerEquations => {
            let e_int = fluid.species.element.cv * temperature;
            [
                density,
                density * velocity,
                density * (e_int + 0.5 * velocity * velocity),
            ]
        }
    }
}
