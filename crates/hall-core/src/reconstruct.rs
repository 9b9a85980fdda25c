// ─────────────────────────────────────────────────────────────────────
// SCPN Hall Thruster — MUSCL Reconstruction
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Slope-limited linear reconstruction of face states.

use hall_types::config::LimiterKind;

/// Flux limiter φ(r), with r the ratio of downwind to upwind differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlopeLimiter {
    Minmod,
    VanLeer,
    Koren,
    Osher { beta: f64 },
    NoLimiter,
    /// First order.
    Zero,
}

impl SlopeLimiter {
    #[inline]
    pub fn phi(&self, r: f64) -> f64 {
        match self {
            SlopeLimiter::Minmod => r.min(1.0).max(0.0),
            SlopeLimiter::VanLeer => (r + r.abs()) / (1.0 + r.abs()),
            SlopeLimiter::Koren => (2.0 * r).min(((1.0 + 2.0 * r) / 3.0).min(2.0)).max(0.0),
            SlopeLimiter::Osher { beta } => r.min(*beta).max(0.0),
            SlopeLimiter::NoLimiter => 1.0,
            SlopeLimiter::Zero => 0.0,
        }
    }

    /// Limited slope of a cell from its backward and forward differences.
    #[inline]
    pub fn slope(&self, d_minus: f64, d_plus: f64) -> f64 {
        if d_minus == 0.0 {
            return 0.0;
        }
        let r = d_plus / d_minus;
        if !r.is_finite() {
            return 0.0;
        }
        self.phi(r) * d_minus
    }

    /// Values on the (left, right) faces of the middle cell.
    #[inline]
    pub fn face_values(&self, u_minus: f64, u: f64, u_plus: f64) -> (f64, f64) {
        let s = self.slope(u - u_minus, u_plus - u);
        (u - 0.5 * s, u + 0.5 * s)
    }
}

impl From<LimiterKind> for SlopeLimiter {
    fn from(kind: LimiterKind) -> Self {
        match kind {
            LimiterKind::Minmod => SlopeLimiter::Minmod,
            LimiterKind::VanLeer => SlopeLimiter::VanLeer,
            LimiterKind::Koren => SlopeLimiter::Koren,
            LimiterKind::Osher { beta } => SlopeLimiter::Osher { beta },
            LimiterKind::NoLimiter => SlopeLimiter::NoLimiter,
            LimiterKind::Zero => SlopeLimiter::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TVD: [SlopeLimiter; 4] = [
        SlopeLimiter::Minmod,
        SlopeLimiter::VanLeer,
        SlopeLimiter::Koren,
        SlopeLimiter::Osher { beta: 2.0 },
    ];

    #[test]
    fn test_limiter_values() {
        assert_eq!(SlopeLimiter::Minmod.phi(0.5), 0.5);
        assert_eq!(SlopeLimiter::Minmod.phi(3.0), 1.0);
        assert_eq!(SlopeLimiter::Minmod.phi(-1.0), 0.0);
        assert!((SlopeLimiter::VanLeer.phi(1.0) - 1.0).abs() < 1e-15);
        assert_eq!(SlopeLimiter::VanLeer.phi(-2.0), 0.0);
        assert_eq!(SlopeLimiter::Koren.phi(10.0), 2.0);
        assert_eq!(SlopeLimiter::Osher { beta: 1.5 }.phi(4.0), 1.5);
        assert_eq!(SlopeLimiter::NoLimiter.phi(-4.0), 1.0);
        assert_eq!(SlopeLimiter::Zero.phi(1.0), 0.0);
    }

    #[test]
    fn test_tvd_limiters_keep_faces_between_neighbours() {
        let triples = [
            (0.0, 1.0, 5.0),
            (0.0, 4.0, 5.0),
            (5.0, 1.0, 0.0),
            (1.0, 3.0, 2.0),
            (2.0, 2.0, 7.0),
        ];
        for limiter in TVD {
            for (a, b, c) in triples {
                let (l, r) = limiter.face_values(a, b, c);
                let (lo, hi) = (a.min(b).min(c), a.max(b).max(c));
                assert!(l >= lo - 1e-12 && l <= hi + 1e-12, "{limiter:?} {a} {b} {c}");
                assert!(r >= lo - 1e-12 && r <= hi + 1e-12, "{limiter:?} {a} {b} {c}");
            }
        }
    }

    #[test]
    fn test_extrema_are_flattened() {
        for limiter in TVD {
            let (l, r) = limiter.face_values(1.0, 3.0, 2.0);
            assert_eq!((l, r), (3.0, 3.0));
        }
    }

    #[test]
    fn test_zero_backward_difference_gives_zero_slope() {
        assert_eq!(SlopeLimiter::NoLimiter.slope(0.0, 5.0), 0.0);
    }
}
