// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Numerical Flux Functions
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Approximate Riemann solvers for a single fluid at one interface.
//!
//! All functions return the flux vector and the largest signal speed seen,
//! which bounds the explicit time step.

use crate::layout::MAX_FLUID_ROWS;
use crate::reconstruct::SlopeLimiter;
use crate::thermo;
use hall_types::config::{FluxKind, SchemeConfig};
use hall_types::constants::Q_ELECTRON;
use hall_types::species::{ConservationLaw, Fluid};

type FluxVector = [f64; MAX_FLUID_ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxFunction {
    /// Harten-Lax-van Leer-Einfeldt.
    Hlle,
    /// Local Lax-Friedrichs.
    Rusanov,
    Upwind,
    /// Lax-Friedrichs with one dissipation speed for the whole fluid.
    GlobalLaxFriedrichs,
}

impl From<FluxKind> for FluxFunction {
    fn from(kind: FluxKind) -> Self {
        match kind {
            FluxKind::Hlle => FluxFunction::Hlle,
            FluxKind::Rusanov => FluxFunction::Rusanov,
            FluxKind::Upwind => FluxFunction::Upwind,
            FluxKind::GlobalLaxFriedrichs => FluxFunction::GlobalLaxFriedrichs,
        }
    }
}

/// Velocity and sound speed of a fluid state. `te` [eV] adds the ion-acoustic
/// contribution Z·e·Te/m; continuity-only fluids have no acoustic waves.
#[inline]
pub fn wave_speeds(u: &[f64], fluid: &Fluid, te: f64) -> (f64, f64) {
    let v = thermo::velocity(u, fluid);
    let a = match fluid.law {
        ConservationLaw::ContinuityOnly { .. } => 0.0,
        _ => {
            let el = &fluid.species.element;
            let acoustic = fluid.charge() as f64 * Q_ELECTRON * te / fluid.mass();
            (el.gamma * el.r * thermo::temperature(u, fluid) + acoustic).sqrt()
        }
    };
    (v, a)
}

impl FluxFunction {
    /// Numerical flux between left state `ul` and right state `ur`.
    ///
    /// `te` holds the electron temperatures on either side (zero when the
    /// electrons are not coupled). `global_speed` is only read by
    /// `GlobalLaxFriedrichs`.
    pub fn flux(
        &self,
        ul: &[f64],
        ur: &[f64],
        fluid: &Fluid,
        te: (f64, f64),
        global_speed: f64,
    ) -> (FluxVector, f64) {
        let n = fluid.nvars();
        let (vl, al) = wave_speeds(ul, fluid, te.0);
        let (vr, ar) = wave_speeds(ur, fluid, te.1);
        let fl = thermo::physical_flux(ul, fluid);
        let fr = thermo::physical_flux(ur, fluid);
        let mut f = [0.0; MAX_FLUID_ROWS];

        match self {
            FluxFunction::Hlle => {
                let smin = (vl - al).min(vr - ar).min(0.0);
                let smax = (vl + al).max(vr + ar).max(0.0);
                if smax == smin {
                    for k in 0..n {
                        f[k] = 0.5 * (fl[k] + fr[k]);
                    }
                } else {
                    let inv = 1.0 / (smax - smin);
                    for k in 0..n {
                        f[k] = (smax * fl[k] - smin * fr[k] + smax * smin * (ur[k] - ul[k])) * inv;
                    }
                }
                (f, smax.max(-smin))
            }
            FluxFunction::Rusanov | FluxFunction::GlobalLaxFriedrichs => {
                let local = (vl.abs() + al).max(vr.abs() + ar);
                let s = if *self == FluxFunction::Rusanov {
                    local
                } else {
                    global_speed.max(local)
                };
                for k in 0..n {
                    f[k] = 0.5 * (fl[k] + fr[k]) - 0.5 * s * (ur[k] - ul[k]);
                }
                (f, s)
            }
            FluxFunction::Upwind => {
                let upwind = if 0.5 * (vl + vr) >= 0.0 { &fl } else { &fr };
                f[..n].copy_from_slice(&upwind[..n]);
                (f, (vl.abs() + al).max(vr.abs() + ar))
            }
        }
    }
}

/// Flux function, limiter and reconstruction switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperbolicScheme {
    pub flux_function: FluxFunction,
    pub limiter: SlopeLimiter,
    pub reconstruct: bool,
}

impl From<&SchemeConfig> for HyperbolicScheme {
    fn from(config: &SchemeConfig) -> Self {
        HyperbolicScheme {
            flux_function: config.flux.into(),
            limiter: config.limiter.into(),
            reconstruct: config.reconstruct,
        }
    }
}

impl Default for HyperbolicScheme {
    fn default() -> Self {
        HyperbolicScheme {
            flux_function: FluxFunction::Hlle,
            limiter: SlopeLimiter::Minmod,
            reconstruct: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hall_types::species::{Element, Species};

    const ALL: [FluxFunction; 4] = [
        FluxFunction::Hlle,
        FluxFunction::Rusanov,
        FluxFunction::Upwind,
        FluxFunction::GlobalLaxFriedrichs,
    ];

    fn ion(law: ConservationLaw) -> Fluid {
        Fluid::new(Species::new(Element::xenon(), 1), law)
    }

    #[test]
    fn test_consistency_with_physical_flux() {
        let fluid = ion(ConservationLaw::EulerEquations);
        let u = thermo::conserved_state(&fluid, 2e-7, 1500.0, 900.0);
        let exact = thermo::physical_flux(&u, &fluid);
        for ff in ALL {
            let (f, s) = ff.flux(&u, &u, &fluid, (5.0, 5.0), 0.0);
            for k in 0..3 {
                assert!(
                    (f[k] - exact[k]).abs() <= 1e-12 * exact[k].abs().max(1e-30),
                    "{ff:?} row {k}: {} vs {}",
                    f[k],
                    exact[k]
                );
            }
            assert!(s > 0.0);
        }
    }

    #[test]
    fn test_hlle_supersonic_is_upwind() {
        let fluid = ion(ConservationLaw::IsothermalEuler { t: 1000.0 });
        let ul = [1.0, 20_000.0];
        let ur = [0.5, 9_000.0];
        let (f, _) = FluxFunction::Hlle.flux(&ul, &ur, &fluid, (0.0, 0.0), 0.0);
        let fl = thermo::physical_flux(&ul, &fluid);
        assert!((f[0] - fl[0]).abs() < 1e-9);
        assert!((f[1] - fl[1]).abs() < 1e-6 * fl[1]);

        let (f, _) = FluxFunction::Hlle.flux(
            &[1.0, -20_000.0],
            &[0.5, -9_000.0],
            &fluid,
            (0.0, 0.0),
            0.0,
        );
        let fr = thermo::physical_flux(&[0.5, -9_000.0], &fluid);
        assert!((f[0] - fr[0]).abs() < 1e-9);
    }

    #[test]
    fn test_continuity_waves_travel_at_fixed_velocity() {
        let fluid = Fluid::new(
            Species::new(Element::xenon(), 0),
            ConservationLaw::ContinuityOnly { u: 300.0, t: 500.0 },
        );
        let (f, s) = FluxFunction::Hlle.flux(&[2.0], &[1.0], &fluid, (10.0, 10.0), 0.0);
        assert!((f[0] - 600.0).abs() < 1e-9);
        assert!((s - 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_electron_temperature_raises_ion_sound_speed() {
        let fluid = ion(ConservationLaw::IsothermalEuler { t: 1000.0 });
        let u = [1.0, 0.0];
        let (_, cold) = wave_speeds(&u, &fluid, 0.0);
        let (_, hot) = wave_speeds(&u, &fluid, 10.0);
        let expected = (cold * cold + Q_ELECTRON * 10.0 / fluid.mass()).sqrt();
        assert!((hot - expected).abs() < 1e-9 * expected);
    }

    #[test]
    fn test_global_lax_friedrichs_uses_global_speed() {
        let fluid = ion(ConservationLaw::IsothermalEuler { t: 1000.0 });
        let (_, s) = FluxFunction::GlobalLaxFriedrichs.flux(&[1.0, 0.0], &[1.0, 0.0], &fluid, (0.0, 0.0), 1e5);
        assert_eq!(s, 1e5);
        let (_, s) = FluxFunction::Rusanov.flux(&[1.0, 0.0], &[1.0, 0.0], &fluid, (0.0, 0.0), 1e5);
        assert!(s < 1e5);
    }
}
