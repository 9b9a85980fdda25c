//! Three-point finite-difference stencils on non-uniform spacing.
//!
//! All stencils are exact for quadratics. `h1 = x1 - x0`, `h2 = x2 - x1`.

/// First derivative at `x0` from samples at `x0 < x1 < x2`.
#[inline]
pub fn forward_difference(f0: f64, f1: f64, f2: f64, x0: f64, x1: f64, x2: f64) -> f64 {
    let h1 = x1 - x0;
    let h2 = x2 - x1;
    let c0 = -(2.0 * h1 + h2) / (h1 * (h1 + h2));
    let c1 = (h1 + h2) / (h1 * h2);
    let c2 = -h1 / (h2 * (h1 + h2));
    c0 * f0 + c1 * f1 + c2 * f2
}

/// First derivative at `x2` from samples at `x0 < x1 < x2`.
#[inline]
pub fn backward_difference(f0: f64, f1: f64, f2: f64, x0: f64, x1: f64, x2: f64) -> f64 {
    let h1 = x1 - x0;
    let h2 = x2 - x1;
    let c0 = h2 / (h1 * (h1 + h2));
    let c1 = -(h1 + h2) / (h1 * h2);
    let c2 = (h1 + 2.0 * h2) / (h2 * (h1 + h2));
    c0 * f0 + c1 * f1 + c2 * f2
}

/// First derivative at `x1` from samples at `x0 < x1 < x2`.
#[inline]
pub fn central_difference(f0: f64, f1: f64, f2: f64, x0: f64, x1: f64, x2: f64) -> f64 {
    let h1 = x1 - x0;
    let h2 = x2 - x1;
    let c0 = -h2 / (h1 * (h1 + h2));
    let c1 = (h2 - h1) / (h1 * h2);
    let c2 = h1 / (h2 * (h1 + h2));
    c0 * f0 + c1 * f1 + c2 * f2
}

/// Gradient of `f` sampled at `x`: one-sided 3-point stencils at both ends,
/// centred 3-point stencil inside. Requires at least 3 points.
pub fn gradient_nonuniform(x: &[f64], f: &[f64], out: &mut [f64]) {
    let n = x.len();
    debug_assert!(n >= 3 && f.len() == n && out.len() == n);
    out[0] = forward_difference(f[0], f[1], f[2], x[0], x[1], x[2]);
    for i in 1..n - 1 {
        out[i] = central_difference(f[i - 1], f[i], f[i + 1], x[i - 1], x[i], x[i + 1]);
    }
    out[n - 1] = backward_difference(
        f[n - 3],
        f[n - 2],
        f[n - 1],
        x[n - 3],
        x[n - 2],
        x[n - 1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(x: f64) -> f64 {
        3.0 * x * x - 2.0 * x + 0.5
    }

    fn dquad(x: f64) -> f64 {
        6.0 * x - 2.0
    }

    #[test]
    fn test_stencils_exact_for_quadratic() {
        let (x0, x1, x2) = (0.1, 0.25, 0.7);
        let (f0, f1, f2) = (quad(x0), quad(x1), quad(x2));
        assert!((forward_difference(f0, f1, f2, x0, x1, x2) - dquad(x0)).abs() < 1e-12);
        assert!((central_difference(f0, f1, f2, x0, x1, x2) - dquad(x1)).abs() < 1e-12);
        assert!((backward_difference(f0, f1, f2, x0, x1, x2) - dquad(x2)).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_central_reduces_to_classic() {
        let h = 0.2;
        let g = central_difference(1.0, 4.0, 2.0, 0.0, h, 2.0 * h);
        assert!((g - (2.0 - 1.0) / (2.0 * h)).abs() < 1e-12);
    }

    #[test]
    fn test_gradient_nonuniform_linear() {
        let x = [0.0, 0.1, 0.35, 0.4, 1.0];
        let f: Vec<f64> = x.iter().map(|v| 4.0 * v - 1.0).collect();
        let mut g = vec![0.0; x.len()];
        gradient_nonuniform(&x, &f, &mut g);
        for (i, gi) in g.iter().enumerate() {
            assert!((gi - 4.0).abs() < 1e-10, "g[{i}] = {gi}");
        }
    }
}
