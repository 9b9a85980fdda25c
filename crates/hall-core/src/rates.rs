// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Reaction Rate Coefficients
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rate coefficients k(ϵ) [m³/s] as functions of electron energy ϵ [eV].
//!
//! Two backends: tabulated data loaded once at setup, and closed-form
//! biexponential fits.

use hall_math::interp::interp1d;
use hall_types::error::{HallError, HallResult};
use std::path::Path;

/// Label used in errors for tables that did not come from a file.
const IN_MEMORY: &str = "<memory>";

/// Piecewise-linear rate table, clamped to the end values outside its range.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    energies: Vec<f64>,
    rates: Vec<f64>,
    /// Scalar from the header line, e.g. the ionization energy [eV].
    pub reaction_energy: f64,
}

impl RateTable {
    pub fn new(energies: Vec<f64>, rates: Vec<f64>, reaction_energy: f64) -> HallResult<Self> {
        Self::validated(energies, rates, reaction_energy, IN_MEMORY)
    }

    fn validated(
        energies: Vec<f64>,
        rates: Vec<f64>,
        reaction_energy: f64,
        path: &str,
    ) -> HallResult<Self> {
        let fail = |message: String| HallError::RateTable {
            path: path.to_string(),
            message,
        };
        if energies.len() != rates.len() {
            return Err(fail(format!(
                "column lengths differ: {} energies, {} rates",
                energies.len(),
                rates.len()
            )));
        }
        if energies.len() < 2 {
            return Err(fail(format!(
                "need at least 2 rows, got {}",
                energies.len()
            )));
        }
        if energies.iter().any(|e| !e.is_finite())
            || (1..energies.len()).any(|i| energies[i] <= energies[i - 1])
        {
            return Err(fail("energies must be finite and strictly increasing".into()));
        }
        if let Some(bad) = rates.iter().find(|k| !k.is_finite() || **k < 0.0) {
            return Err(fail(format!("rate coefficient {bad} is not finite and >= 0")));
        }
        if !reaction_energy.is_finite() {
            return Err(fail(format!("reaction energy {reaction_energy} is not finite")));
        }
        Ok(RateTable {
            energies,
            rates,
            reaction_energy,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> HallResult<Self> {
        let label = path.as_ref().display().to_string();
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| HallError::RateTable {
            path: label.clone(),
            message: e.to_string(),
        })?;
        Self::parse(&contents, &label)
    }

    /// Parse the on-disk format:
    ///
    /// ```text
    /// Ionization energy (eV): 12.1298
    /// Energy (eV)   Rate coefficient (m3/s)
    /// 1.0           0.0
    /// 2.0           1.2e-20
    /// ```
    ///
    /// The column-title line is optional. Columns may be separated by
    /// whitespace, tabs or commas.
    pub fn parse(contents: &str, path: &str) -> HallResult<Self> {
        let fail = |message: String| HallError::RateTable {
            path: path.to_string(),
            message,
        };
        let mut lines = contents.lines().filter(|l| !l.trim().is_empty());

        let header = lines.next().ok_or_else(|| fail("file is empty".into()))?;
        let scalar = header.rsplit(':').next().unwrap_or(header).trim();
        let reaction_energy: f64 = scalar
            .parse()
            .map_err(|_| fail(format!("header '{header}' does not end in a number")))?;

        let mut energies = Vec::new();
        let mut rates = Vec::new();
        for (lineno, line) in lines.enumerate() {
            let fields: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty())
                .collect();
            let parsed: Option<(f64, f64)> = match fields.as_slice() {
                [e, k, ..] => e.parse().ok().zip(k.parse().ok()),
                _ => None,
            };
            match parsed {
                Some((e, k)) => {
                    energies.push(e);
                    rates.push(k);
                }
                // Column titles may only precede the data.
                None if lineno == 0 => continue,
                None => {
                    return Err(fail(format!("malformed data line '{}'", line.trim())));
                }
            }
        }
        Self::validated(energies, rates, reaction_energy, path)
    }

    pub fn rate(&self, energy: f64) -> f64 {
        interp1d(&self.energies, &self.rates, energy)
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}

/// `c1·(exp(−c2/(x+c5)) − c4·exp(−c2·c3/(x+c5)))`, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiexponentialFit {
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub c5: f64,
}

impl BiexponentialFit {
    pub const fn new(c1: f64, c2: f64, c3: f64, c4: f64, c5: f64) -> Self {
        BiexponentialFit { c1, c2, c3, c4, c5 }
    }

    pub fn rate(&self, energy: f64) -> f64 {
        let x = energy + self.c5;
        if x <= 0.0 {
            return 0.0;
        }
        let k = self.c1 * ((-self.c2 / x).exp() - self.c4 * (-self.c2 * self.c3 / x).exp());
        k.max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RateCoefficient {
    Table(RateTable),
    Biexponential(BiexponentialFit),
}

impl RateCoefficient {
    #[inline]
    pub fn rate(&self, energy: f64) -> f64 {
        match self {
            RateCoefficient::Table(t) => t.rate(energy),
            RateCoefficient::Biexponential(f) => f.rate(energy),
        }
    }
}
