// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Simulation Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Initial condition and a forward-Euler reference driver around
//! [`update_values`].

use crate::boundary::bohm_speed;
use crate::cache::Cache;
use crate::params::Params;
use crate::rhs::heavy_species_rhs;
use crate::thermo;
use crate::update::{
    apply_boundary_conditions, check_state, update_electric_field, update_values, StepOutcome,
    TerminationReason,
};
use hall_math::interp::lerp;
use hall_types::constants::Q_ELECTRON;
use hall_types::error::{HallError, HallResult};
use ndarray::Array2;
use serde::Serialize;
use std::path::Path;

/// Neutral density far downstream relative to the anode value.
const NEUTRAL_PLUME_FRACTION: f64 = 0.01;
/// Peak ion number density of the initial Gaussian [m⁻³].
const INITIAL_ION_DENSITY_PEAK: f64 = 5e17;
/// Background ion number density [m⁻³].
const INITIAL_ION_DENSITY_BASE: f64 = 2e17;
/// Peak initial electron temperature per volt of discharge voltage.
const INITIAL_TE_PER_VOLT: f64 = 1.0 / 15.0;

/// Rough steady-state-like profiles: neutrals depleting across the channel
/// exit, a Gaussian ion hump in the channel, ions accelerating from the Bohm
/// speed at the anode, Te peaked at the exit.
///
/// Assumes the fluids built by [`Params::from_config`].
pub fn initial_condition(params: &Params) -> Array2<f64> {
    let cfg = &params.config;
    let l = cfg.geometry.channel_length;
    let z = params.grid.cell_centers();
    let (z0, z1) = (params.grid.z_min(), params.grid.z_max());
    let index = &params.index;
    let mut u = Array2::zeros((index.nvars, z.len()));

    let inflow = cfg.anode_mass_flow_rate / (cfg.neutral_velocity * params.area);
    let te_peak = INITIAL_TE_PER_VOLT * cfg.discharge_voltage;

    for (i, &zi) in z.iter().enumerate() {
        let depletion = 0.5 * (1.0 - ((zi - l) / (0.2 * l)).tanh());
        let te_base = lerp(zi, z0, z1, cfg.anode_te, cfg.cathode_te);
        let te = te_base + te_peak * (-((zi - l) / (0.3 * l)).powi(2)).exp();
        let ni = INITIAL_ION_DENSITY_BASE
            + INITIAL_ION_DENSITY_PEAK * (-((zi - 0.5 * l) / (0.3 * l)).powi(2)).exp();

        let mut ne = 0.0;
        for (k, fluid) in params.fluids.iter().enumerate() {
            let rows = index.fluid_ranges[k].clone();
            let state = if fluid.species.is_neutral() {
                let rho = inflow * (NEUTRAL_PLUME_FRACTION + (1.0 - NEUTRAL_PLUME_FRACTION) * depletion);
                thermo::conserved_state(fluid, rho, 0.0, 0.0)
            } else {
                let zk = fluid.charge() as f64;
                // Higher charge states are rarer.
                let n = ni / (zk * zk * zk);
                ne += zk * n;
                let m = fluid.mass();
                let u_anode = -bohm_speed(cfg.anode_te, m);
                let u_exit = (2.0 * zk * Q_ELECTRON * cfg.discharge_voltage / m).sqrt();
                let v = if zi < l {
                    lerp(zi, z0, l, u_anode, 0.5 * u_exit)
                } else {
                    lerp(zi, l, z1, 0.5 * u_exit, u_exit)
                };
                thermo::conserved_state(fluid, n * m, v, cfg.ion_temperature)
            };
            for (slot, row) in rows.enumerate() {
                u[[row, i]] = state[slot];
            }
        }
        u[[index.n_eps, i]] = 1.5 * ne.max(cfg.min_number_density) * te;
    }
    u
}

/// Read-only copy of the state and the main derived fields at a save point.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub t: f64,
    /// State rows, `u[variable][cell]`
    pub u: Vec<Vec<f64>>,
    pub ne: Vec<f64>,
    pub te: Vec<f64>,
    pub ue: Vec<f64>,
    pub phi_cell: Vec<f64>,
    pub grad_phi: Vec<f64>,
    pub mu: Vec<f64>,
    pub discharge_current: f64,
}

impl Snapshot {
    fn capture(t: f64, u: &Array2<f64>, cache: &Cache) -> Self {
        Snapshot {
            t,
            u: u.outer_iter().map(|row| row.to_vec()).collect(),
            ne: cache.ne.clone(),
            te: cache.te.clone(),
            ue: cache.ue.clone(),
            phi_cell: cache.phi_cell.clone(),
            grad_phi: cache.grad_phi.clone(),
            mu: cache.mu.clone(),
            discharge_current: cache.discharge_current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RetCode {
    Success,
    Terminated(TerminationReason),
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub t: Vec<f64>,
    pub snapshots: Vec<Snapshot>,
    pub retcode: RetCode,
}

impl Solution {
    /// Write the save points as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> HallResult<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Forward-Euler driver: `U += dt·dU/dt` on the heavy species, then
/// [`update_values`] for boundaries and electrons.
#[derive(Debug)]
pub struct Simulation {
    pub u: Array2<f64>,
    pub params: Params,
    pub cache: Cache,
    pub t: f64,
    du: Array2<f64>,
}

impl Simulation {
    /// Take ownership of the initial state, apply the boundary conditions and
    /// fill the cache from it. No time passes, so the electron energy is not
    /// advanced.
    pub fn new(params: Params, u0: Array2<f64>) -> HallResult<Self> {
        let expected = (params.index.nvars, params.grid.ncells());
        if u0.dim() != expected {
            return Err(HallError::InvalidArgument(format!(
                "initial state has shape {:?}, expected {:?}",
                u0.dim(),
                expected
            )));
        }
        let cache = params.new_cache();
        let du = Array2::zeros(expected);
        let mut sim = Simulation {
            u: u0,
            params,
            cache,
            t: 0.0,
            du,
        };
        apply_boundary_conditions(&mut sim.u, &sim.params);
        if sim.params.config.electrons {
            update_electric_field(&sim.u, &sim.params, &mut sim.cache)?;
        }
        if let Some(reason) = check_state(&sim.u) {
            return Err(HallError::PhysicsViolation(format!(
                "initial state is not finite: {reason:?}"
            )));
        }
        Ok(sim)
    }

    /// Set up from a config with [`initial_condition`].
    pub fn from_config(config: &hall_types::config::SimulationConfig) -> HallResult<Self> {
        let params = Params::from_config(config)?;
        let u0 = initial_condition(&params);
        Self::new(params, u0)
    }

    /// One step of size `cache.dt`.
    pub fn step(&mut self) -> HallResult<StepOutcome> {
        let dt = self.cache.dt;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(HallError::PhysicsViolation(format!("invalid time step {dt}")));
        }
        heavy_species_rhs(&mut self.du, &self.u, &self.params, &mut self.cache);
        self.u.scaled_add(dt, &self.du);
        self.t += dt;
        update_values(&mut self.u, &self.params, &mut self.cache, self.t)
    }

    /// Integrate to `t_end`, landing exactly on every time in `saveat`
    /// (in any order; times outside (t, t_end] are ignored).
    pub fn run(&mut self, t_end: f64, saveat: &[f64]) -> HallResult<Solution> {
        let mut stops: Vec<f64> = saveat
            .iter()
            .copied()
            .filter(|&s| s > self.t && s <= t_end)
            .collect();
        stops.sort_by(|a, b| a.total_cmp(b));
        stops.dedup();
        if !matches!(stops.last(), Some(&s) if s >= t_end) {
            stops.push(t_end);
        }
        let save_end = saveat.iter().any(|&s| s == t_end);

        let mut solution = Solution {
            t: Vec::new(),
            snapshots: Vec::new(),
            retcode: RetCode::Success,
        };
        let fixed_dt = !self.params.config.timestep.adaptive;
        let configured_dt = self.params.config.timestep.dt;

        for (n, &stop) in stops.iter().enumerate() {
            while stop - self.t > 1e-12 * self.cache.dt {
                let natural = self.cache.dt;
                let clipped = natural.min(stop - self.t);
                self.cache.dt = clipped;
                let outcome = self.step()?;
                if fixed_dt {
                    self.cache.dt = configured_dt;
                } else if self.cache.dt == clipped {
                    self.cache.dt = natural;
                }
                if let StepOutcome::Terminate(reason) = outcome {
                    solution.retcode = RetCode::Terminated(reason);
                    solution.t.push(self.t);
                    solution.snapshots.push(Snapshot::capture(self.t, &self.u, &self.cache));
                    return Ok(solution);
                }
            }
            let is_final = n + 1 == stops.len();
            if !is_final || save_end {
                log::debug!(
                    "save point t = {:.6e} s, Id = {:.4} A",
                    self.t,
                    self.cache.discharge_current
                );
                solution.t.push(self.t);
                solution.snapshots.push(Snapshot::capture(self.t, &self.u, &self.cache));
            }
        }
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hall_types::config::SimulationConfig;

    fn small_config() -> SimulationConfig {
        let mut config = SimulationConfig::default();
        config.grid.ncells = 42;
        config.timestep.dt = 1e-9;
        config
    }

    #[test]
    fn test_initial_condition_is_physical() {
        let params = Params::from_config(&small_config()).unwrap();
        let u = initial_condition(&params);
        assert_eq!(u.dim(), (params.index.nvars, 42));
        assert!(u.iter().all(|v| v.is_finite()));
        for i in 0..42 {
            assert!(u[[0, i]] > 0.0);
            assert!(u[[1, i]] > 0.0);
            assert!(u[[params.index.n_eps, i]] > 0.0);
        }
        // Neutrals deplete downstream.
        assert!(u[[0, 0]] > 10.0 * u[[0, 41]]);
    }

    #[test]
    fn test_simulation_setup_fills_cache() {
        let sim = Simulation::from_config(&small_config()).expect("valid setup");
        assert!(sim.cache.discharge_current.is_finite());
        assert!(sim.cache.discharge_current > 0.0);
        assert!((sim.cache.phi[0] - 300.0).abs() < 1e-9);
        assert!(sim.cache.phi[sim.params.grid.nedges() - 1].abs() < 1e-9);
        assert!(sim.cache.te.iter().all(|&t| t >= 1.0));
        assert!(sim.cache.mu.iter().all(|&m| m > 0.0 && m.is_finite()));
    }

    #[test]
    fn test_setup_does_not_advance_electron_energy() {
        let params = Params::from_config(&small_config()).unwrap();
        let u0 = initial_condition(&params);
        let n_eps = params.index.n_eps;
        let sim = Simulation::new(params, u0.clone()).unwrap();
        assert_eq!(sim.t, 0.0);
        for i in 1..41 {
            assert_eq!(sim.u[[n_eps, i]], u0[[n_eps, i]], "cell {i}");
        }
        assert!(sim.cache.ohmic_heating.iter().all(|q| q.is_finite()));
    }

    #[test]
    fn test_run_hits_save_points() {
        let mut sim = Simulation::from_config(&small_config()).unwrap();
        let sol = sim.run(5e-9, &[2.5e-9, 5e-9]).expect("run completes");
        assert_eq!(sol.retcode, RetCode::Success);
        assert_eq!(sol.t.len(), 2);
        assert!((sol.t[0] - 2.5e-9).abs() < 1e-18);
        assert!((sol.t[1] - 5e-9).abs() < 1e-18);
        assert_eq!(sol.snapshots[1].u.len(), sim.params.index.nvars);
        assert_eq!(sim.cache.dt, 1e-9);
        let json = serde_json::to_string(&sol.snapshots[0]).unwrap();
        assert!(json.contains("discharge_current"));

        let path = std::env::temp_dir().join(format!("hall_solution_{}.json", std::process::id()));
        sol.write_json(&path).expect("writable temp dir");
        let back: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back["retcode"], "Success");
        assert_eq!(back["snapshots"].as_array().unwrap().len(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_rejects_wrong_state_shape() {
        let params = Params::from_config(&small_config()).unwrap();
        let err = Simulation::new(params, Array2::zeros((2, 2))).unwrap_err();
        assert!(matches!(err, HallError::InvalidArgument(_)));
    }
}
