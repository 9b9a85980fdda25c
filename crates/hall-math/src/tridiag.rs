// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — Tridiag
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Thomas algorithm for tridiagonal systems.
//!
//! Used by the edge-potential solve and the implicit electron energy update.

use hall_types::error::{HallError, HallResult};

/// Tridiagonal matrix stored as three diagonals of equal length.
///
/// - `lower[0]` and `upper[n-1]` are unused.
#[derive(Debug, Clone)]
pub struct Tridiagonal {
    pub lower: Vec<f64>,
    pub diag: Vec<f64>,
    pub upper: Vec<f64>,
}

impl Tridiagonal {
    pub fn zeros(n: usize) -> Self {
        Tridiagonal {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.diag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Replace row `i` with the identity row `x[i] = rhs` (Dirichlet row).
    pub fn set_identity_row(&mut self, i: usize) {
        self.lower[i] = 0.0;
        self.diag[i] = 1.0;
        self.upper[i] = 0.0;
    }

    /// Compute `A x` (used for residual checks).
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        let n = self.len();
        (0..n)
            .map(|i| {
                let mut v = self.diag[i] * x[i];
                if i > 0 {
                    v += self.lower[i] * x[i - 1];
                }
                if i + 1 < n {
                    v += self.upper[i] * x[i + 1];
                }
                v
            })
            .collect()
    }

    /// Solve `A x = rhs` into `x` without allocating beyond one scratch vector.
    ///
    /// Returns `LinAlg` on a dimension mismatch or a zero/non-finite pivot.
    pub fn solve_into(&self, rhs: &[f64], x: &mut [f64]) -> HallResult<()> {
        let n = self.len();
        if n == 0 {
            return Err(HallError::LinAlg("tridiagonal system is empty".into()));
        }
        if self.lower.len() != n || self.upper.len() != n || rhs.len() != n || x.len() != n {
            return Err(HallError::LinAlg(format!(
                "tridiagonal dimension mismatch: n={n}, lower={}, upper={}, rhs={}, x={}",
                self.lower.len(),
                self.upper.len(),
                rhs.len(),
                x.len()
            )));
        }

        let mut c_prime = vec![0.0; n];

        // Forward sweep, d' is stored in x
        let mut den = self.diag[0];
        check_pivot(den, 0)?;
        c_prime[0] = self.upper[0] / den;
        x[0] = rhs[0] / den;

        for i in 1..n {
            den = self.diag[i] - self.lower[i] * c_prime[i - 1];
            check_pivot(den, i)?;
            if i < n - 1 {
                c_prime[i] = self.upper[i] / den;
            }
            x[i] = (rhs[i] - self.lower[i] * x[i - 1]) / den;
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            x[i] -= c_prime[i] * x[i + 1];
        }
        Ok(())
    }

    pub fn solve(&self, rhs: &[f64]) -> HallResult<Vec<f64>> {
        let mut x = vec![0.0; self.len()];
        self.solve_into(rhs, &mut x)?;
        Ok(x)
    }
}

fn check_pivot(den: f64, row: usize) -> HallResult<()> {
    if den == 0.0 || !den.is_finite() {
        return Err(HallError::LinAlg(format!(
            "singular tridiagonal system: pivot {den} at row {row}"
        )));
    }
    Ok(())
}

/// Solve a tridiagonal system given as loose diagonals.
pub fn thomas_solve(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> HallResult<Vec<f64>> {
    let system = Tridiagonal {
        lower: a.to_vec(),
        diag: b.to_vec(),
        upper: c.to_vec(),
    };
    system.solve(d)
}
