// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{HallError, HallResult};
use crate::species::Propellant;
use crate::state::{Grid1D, MIN_CELLS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest charge state with built-in reaction data.
pub const MAX_CHARGE: u8 = 3;

/// Top-level simulation configuration.
/// Every field has a default, so `{}` deserializes to the Landmark-like baseline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub propellant: Propellant,
    /// Number of ion charge states evolved (1..=3).
    #[serde(default = "default_ncharge")]
    pub ncharge: u8,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub geometry: Geometry,
    /// Anode potential [V].
    #[serde(default = "default_discharge_voltage")]
    pub discharge_voltage: f64,
    /// Cathode potential [V].
    #[serde(default)]
    pub cathode_potential: f64,
    /// Propellant mass flow through the anode [kg/s].
    #[serde(default = "default_mass_flow")]
    pub anode_mass_flow_rate: f64,
    /// Neutral axial velocity [m/s].
    #[serde(default = "default_neutral_velocity")]
    pub neutral_velocity: f64,
    /// Neutral temperature [K].
    #[serde(default = "default_neutral_temperature")]
    pub neutral_temperature: f64,
    /// Ion temperature [K].
    #[serde(default = "default_ion_temperature")]
    pub ion_temperature: f64,
    /// Electron temperature held at the anode [eV].
    #[serde(default = "default_boundary_te")]
    pub anode_te: f64,
    /// Electron temperature held at the cathode [eV].
    #[serde(default = "default_boundary_te")]
    pub cathode_te: f64,
    /// Floor on electron number density [m⁻³].
    #[serde(default = "default_min_number_density")]
    pub min_number_density: f64,
    /// Floor on electron temperature [eV].
    #[serde(default = "default_min_electron_temperature")]
    pub min_electron_temperature: f64,
    /// Landmark benchmark conventions for pressure and collisions.
    #[serde(default)]
    pub landmark: bool,
    /// Solve the electron subsystem. When false only boundaries and the
    /// validity sweep run in the per-step update.
    #[serde(default = "default_true")]
    pub electrons: bool,
    #[serde(default)]
    pub anomalous_transport: AnomalousTransport,
    #[serde(default)]
    pub wall: WallConfig,
    #[serde(default)]
    pub magnetic_field: MagneticFieldConfig,
    #[serde(default)]
    pub ionization: IonizationModelConfig,
    #[serde(default)]
    pub scheme: SchemeConfig,
    #[serde(default)]
    pub timestep: TimestepConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_ncells")]
    pub ncells: usize,
    #[serde(default)]
    pub z_min: f64,
    #[serde(default = "default_z_max")]
    pub z_max: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            ncells: default_ncells(),
            z_min: 0.0,
            z_max: default_z_max(),
        }
    }
}

/// Annular channel geometry [m].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default = "default_channel_length")]
    pub channel_length: f64,
    #[serde(default = "default_inner_radius")]
    pub inner_radius: f64,
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,
}

impl Geometry {
    /// Channel cross-sectional area [m²].
    pub fn channel_area(&self) -> f64 {
        std::f64::consts::PI * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry {
            channel_length: default_channel_length(),
            inner_radius: default_inner_radius(),
            outer_radius: default_outer_radius(),
        }
    }
}

/// Anomalous electron transport closure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum AnomalousTransport {
    /// ν_an = c ω_ce / 16, with separate coefficients inside and outside the channel.
    TwoZoneBohm { inner: f64, outer: f64 },
    None,
}

impl Default for AnomalousTransport {
    fn default() -> Self {
        AnomalousTransport::TwoZoneBohm {
            inner: 0.1,
            outer: 1.0,
        }
    }
}

/// Wall collision and wall energy-loss coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallConfig {
    /// Wall collision coefficient α_w (ν_w = α_w · 1e7 inside the channel).
    #[serde(default = "default_one")]
    pub collision_coefficient: f64,
    /// Energy-loss coefficient inside the channel.
    #[serde(default = "default_one")]
    pub loss_inner: f64,
    /// Energy-loss coefficient outside the channel.
    #[serde(default = "default_one")]
    pub loss_outer: f64,
    /// Loss energy scale U_w [eV] in exp(-U_w / ϵ).
    #[serde(default = "default_wall_loss_energy")]
    pub loss_energy: f64,
}

impl Default for WallConfig {
    fn default() -> Self {
        WallConfig {
            collision_coefficient: 1.0,
            loss_inner: 1.0,
            loss_outer: 1.0,
            loss_energy: default_wall_loss_energy(),
        }
    }
}

/// Radial magnetic field profile along the axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum MagneticFieldConfig {
    Uniform { b: f64 },
    /// Gaussian peaked at the channel exit.
    Landmark { b_max: f64 },
    /// Tabulated (z, B) pairs, linearly interpolated.
    Table { z: Vec<f64>, b: Vec<f64> },
}

impl Default for MagneticFieldConfig {
    fn default() -> Self {
        MagneticFieldConfig::Landmark { b_max: 0.015 }
    }
}

/// Source of ionization/excitation rate coefficients.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum IonizationModelConfig {
    /// Built-in biexponential fits.
    #[default]
    Fit,
    /// Tabulated rate files in a directory.
    Lookup { directory: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FluxKind {
    #[default]
    Hlle,
    Rusanov,
    Upwind,
    GlobalLaxFriedrichs,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LimiterKind {
    #[default]
    Minmod,
    VanLeer,
    Koren,
    Osher { beta: f64 },
    NoLimiter,
    Zero,
}

/// Hyperbolic scheme selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeConfig {
    #[serde(default)]
    pub flux: FluxKind,
    #[serde(default)]
    pub limiter: LimiterKind,
    /// Second-order MUSCL reconstruction.
    #[serde(default)]
    pub reconstruct: bool,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        SchemeConfig {
            flux: FluxKind::Hlle,
            limiter: LimiterKind::Minmod,
            reconstruct: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimestepConfig {
    /// Fixed step, also the first step when adaptive [s].
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default)]
    pub adaptive: bool,
    #[serde(default = "default_cfl")]
    pub cfl: f64,
}

impl Default for TimestepConfig {
    fn default() -> Self {
        TimestepConfig {
            dt: default_dt(),
            adaptive: false,
            cfl: default_cfl(),
        }
    }
}

fn default_ncharge() -> u8 {
    1
}
fn default_ncells() -> usize {
    202
}
fn default_z_max() -> f64 {
    0.05
}
fn default_channel_length() -> f64 {
    0.025
}
fn default_inner_radius() -> f64 {
    0.0345
}
fn default_outer_radius() -> f64 {
    0.05
}
fn default_discharge_voltage() -> f64 {
    300.0
}
fn default_mass_flow() -> f64 {
    5e-6
}
fn default_neutral_velocity() -> f64 {
    150.0
}
fn default_neutral_temperature() -> f64 {
    500.0
}
fn default_ion_temperature() -> f64 {
    1000.0
}
fn default_boundary_te() -> f64 {
    3.0
}
fn default_min_number_density() -> f64 {
    1e6
}
fn default_min_electron_temperature() -> f64 {
    1.0
}
fn default_true() -> bool {
    true
}
fn default_one() -> f64 {
    1.0
}
fn default_wall_loss_energy() -> f64 {
    20.0
}
fn default_dt() -> f64 {
    5e-9
}
fn default_cfl() -> f64 {
    0.8
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            propellant: Propellant::default(),
            ncharge: default_ncharge(),
            grid: GridConfig::default(),
            geometry: Geometry::default(),
            discharge_voltage: default_discharge_voltage(),
            cathode_potential: 0.0,
            anode_mass_flow_rate: default_mass_flow(),
            neutral_velocity: default_neutral_velocity(),
            neutral_temperature: default_neutral_temperature(),
            ion_temperature: default_ion_temperature(),
            anode_te: default_boundary_te(),
            cathode_te: default_boundary_te(),
            min_number_density: default_min_number_density(),
            min_electron_temperature: default_min_electron_temperature(),
            landmark: false,
            electrons: true,
            anomalous_transport: AnomalousTransport::default(),
            wall: WallConfig::default(),
            magnetic_field: MagneticFieldConfig::default(),
            ionization: IonizationModelConfig::default(),
            scheme: SchemeConfig::default(),
            timestep: TimestepConfig::default(),
        }
    }
}

fn require_positive(name: &str, value: f64) -> HallResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HallError::ConfigError(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> HallResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HallError::ConfigError(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

impl SimulationConfig {
    /// Load from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> HallResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> HallResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Reject physically meaningless settings before any stepping starts.
    pub fn validate(&self) -> HallResult<()> {
        if self.ncharge == 0 || self.ncharge > MAX_CHARGE {
            return Err(HallError::ConfigError(format!(
                "ncharge must be in 1..={MAX_CHARGE}, got {}",
                self.ncharge
            )));
        }
        if self.grid.ncells < MIN_CELLS {
            return Err(HallError::ConfigError(format!(
                "grid requires at least {MIN_CELLS} cells, got {}",
                self.grid.ncells
            )));
        }
        if !(self.grid.z_max > self.grid.z_min) {
            return Err(HallError::ConfigError(format!(
                "grid z_max ({}) must exceed z_min ({})",
                self.grid.z_max, self.grid.z_min
            )));
        }
        require_positive("channel_length", self.geometry.channel_length)?;
        require_non_negative("inner_radius", self.geometry.inner_radius)?;
        if self.geometry.outer_radius <= self.geometry.inner_radius {
            return Err(HallError::ConfigError(
                "outer_radius must exceed inner_radius".to_string(),
            ));
        }
        require_positive("anode_mass_flow_rate", self.anode_mass_flow_rate)?;
        require_positive("neutral_velocity", self.neutral_velocity)?;
        require_positive("neutral_temperature", self.neutral_temperature)?;
        require_positive("ion_temperature", self.ion_temperature)?;
        require_positive("anode_te", self.anode_te)?;
        require_positive("cathode_te", self.cathode_te)?;
        require_positive("min_number_density", self.min_number_density)?;
        require_positive("min_electron_temperature", self.min_electron_temperature)?;
        require_non_negative("wall collision_coefficient", self.wall.collision_coefficient)?;
        require_non_negative("wall loss_inner", self.wall.loss_inner)?;
        require_non_negative("wall loss_outer", self.wall.loss_outer)?;
        require_positive("wall loss_energy", self.wall.loss_energy)?;
        if let AnomalousTransport::TwoZoneBohm { inner, outer } = self.anomalous_transport {
            require_non_negative("anomalous inner coefficient", inner)?;
            require_non_negative("anomalous outer coefficient", outer)?;
        }
        match &self.magnetic_field {
            MagneticFieldConfig::Uniform { b } => require_non_negative("magnetic field b", *b)?,
            MagneticFieldConfig::Landmark { b_max } => {
                require_non_negative("magnetic field b_max", *b_max)?
            }
            MagneticFieldConfig::Table { z, b } => {
                if z.len() != b.len() || z.len() < 2 {
                    return Err(HallError::ConfigError(format!(
                        "magnetic field table needs matching z/b columns of length >= 2, got {} and {}",
                        z.len(),
                        b.len()
                    )));
                }
                if (1..z.len()).any(|i| z[i] <= z[i - 1]) {
                    return Err(HallError::ConfigError(
                        "magnetic field table z must be strictly increasing".to_string(),
                    ));
                }
            }
        }
        require_positive("timestep dt", self.timestep.dt)?;
        if !self.timestep.cfl.is_finite() || self.timestep.cfl <= 0.0 || self.timestep.cfl > 1.0 {
            return Err(HallError::ConfigError(format!(
                "timestep cfl must be in (0, 1], got {}",
                self.timestep.cfl
            )));
        }
        Ok(())
    }

    /// Create the axial grid from this config.
    pub fn create_grid(&self) -> HallResult<Grid1D> {
        Grid1D::uniform(self.grid.ncells, self.grid.z_min, self.grid.z_max)
    }
}
