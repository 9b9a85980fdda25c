//! 1D interpolation and quadrature on non-uniform abscissae.

/// Linear interpolation of `(x0, y0)`–`(x1, y1)` at `x`.
#[inline]
pub fn lerp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}

/// Piecewise-linear interpolation on ascending `xs`, clamped to the end values.
///
/// Empty tables return 0.
pub fn interp1d(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }
    // First index with xs[i] > x; x is strictly inside so 1 <= i <= n-1
    let i = xs[..n].partition_point(|&xi| xi <= x);
    lerp(x, xs[i - 1], xs[i], ys[i - 1], ys[i])
}

/// Trapezoidal integral of `ys` over `xs`.
pub fn trapz(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    (1..n)
        .map(|i| 0.5 * (xs[i] - xs[i - 1]) * (ys[i] + ys[i - 1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interp1d_exact_and_clamped() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [1.0, 3.0, 7.0];
        assert!((interp1d(&xs, &ys, 1.0) - 3.0).abs() < 1e-14);
        assert!((interp1d(&xs, &ys, 2.0) - 5.0).abs() < 1e-14);
        assert!((interp1d(&xs, &ys, -5.0) - 1.0).abs() < 1e-14);
        assert!((interp1d(&xs, &ys, 10.0) - 7.0).abs() < 1e-14);
        assert_eq!(interp1d(&[], &[], 1.0), 0.0);
    }

    #[test]
    fn test_trapz_linear_exact() {
        let xs = [0.0, 0.5, 2.0, 3.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 * x + 1.0).collect();
        // ∫0^3 (2x+1) dx = 9 + 3 = 12
        assert!((trapz(&xs, &ys) - 12.0).abs() < 1e-12);
    }
}
