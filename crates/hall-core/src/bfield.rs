//! Radial magnetic field profile along the thruster axis.
//!
//! The Landmark profile is a Gaussian peaked at the channel exit with
//! different widths upstream and downstream:
//!   B(z) = B_max · exp(-(z - L)² / (2 δ²)),  δ = 0.011 m (z < L), 0.018 m (z ≥ L)

use hall_math::interp::interp1d;
use hall_types::config::MagneticFieldConfig;

/// Gaussian width inside the channel [m].
const LANDMARK_WIDTH_INNER: f64 = 0.011;
/// Gaussian width in the plume [m].
const LANDMARK_WIDTH_OUTER: f64 = 0.018;

#[derive(Debug, Clone, PartialEq)]
pub enum MagneticField {
    Uniform { b: f64 },
    Landmark { b_max: f64, channel_length: f64 },
    Table { z: Vec<f64>, b: Vec<f64> },
}

impl MagneticField {
    pub fn from_config(config: &MagneticFieldConfig, channel_length: f64) -> Self {
        match config {
            MagneticFieldConfig::Uniform { b } => MagneticField::Uniform { b: *b },
            MagneticFieldConfig::Landmark { b_max } => MagneticField::Landmark {
                b_max: *b_max,
                channel_length,
            },
            MagneticFieldConfig::Table { z, b } => MagneticField::Table {
                z: z.clone(),
                b: b.clone(),
            },
        }
    }

    /// Field strength [T] at axial position `z` [m].
    pub fn at(&self, z: f64) -> f64 {
        match self {
            MagneticField::Uniform { b } => *b,
            MagneticField::Landmark {
                b_max,
                channel_length,
            } => {
                let delta = if z < *channel_length {
                    LANDMARK_WIDTH_INNER
                } else {
                    LANDMARK_WIDTH_OUTER
                };
                let x = z - channel_length;
                b_max * (-x * x / (2.0 * delta * delta)).exp()
            }
            MagneticField::Table { z: zs, b } => interp1d(zs, b, z),
        }
    }

    /// Sample the field on a set of positions.
    pub fn sample(&self, positions: &[f64]) -> Vec<f64> {
        positions.iter().map(|&z| self.at(z)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landmark_peak_and_asymmetry() {
        let field = MagneticField::from_config(&MagneticFieldConfig::default(), 0.025);
        assert!((field.at(0.025) - 0.015).abs() < 1e-15);
        // Same distance from the peak, the plume side decays more slowly.
        assert!(field.at(0.035) > field.at(0.015));
        let inner = 0.015 * (-0.5f64).exp();
        assert!((field.at(0.025 - LANDMARK_WIDTH_INNER) - inner).abs() < 1e-12);
    }

    #[test]
    fn test_table_interpolates() {
        let field = MagneticField::Table {
            z: vec![0.0, 0.01, 0.02],
            b: vec![0.0, 0.02, 0.01],
        };
        let b = field.sample(&[0.005, 0.015, 1.0]);
        assert!((b[0] - 0.01).abs() < 1e-15);
        assert!((b[1] - 0.015).abs() < 1e-15);
        assert!((b[2] - 0.01).abs() < 1e-15);
    }
}
