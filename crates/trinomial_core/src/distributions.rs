//! Normal distribution helpers for theoretical overlays.
//!
//! By the central limit theorem the terminal position of a long walk is
//! approximately `N(mu_total, sigma_total²)`. This module provides:
//! - `norm_pdf`: Standard normal density
//! - `norm_cdf`: Standard normal cumulative distribution
//! - `normal_pdf`: Density of `N(mu, sigma²)`, `None` when `sigma = 0`

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
#[inline]
fn erfc_approx(x: f64) -> f64 {
    // Abramowitz and Stegun constants (7.1.26)
    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let abs_x = x.abs();
    let t = 1.0 / (1.0 + P * abs_x);
    let poly = A1 + t * (A2 + t * (A3 + t * (A4 + t * A5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// # Examples
/// ```
/// use trinomial_core::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0) < 0.01);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc_approx(-x / SQRT_2)
}

/// Standard normal probability density function.
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Density of `N(mu, sigma²)` at `x`.
///
/// Returns `None` when `sigma` is zero (or not a positive finite number);
/// a point mass has no density curve to draw.
///
/// # Examples
/// ```
/// use trinomial_core::distributions::normal_pdf;
///
/// assert!(normal_pdf(0.0, 0.0, 1.0).is_some());
/// assert!(normal_pdf(0.0, 0.0, 0.0).is_none());
/// ```
#[inline]
pub fn normal_pdf(x: f64, mu: f64, sigma: f64) -> Option<f64> {
    if !(sigma > 0.0 && sigma.is_finite()) {
        return None;
    }
    Some(norm_pdf((x - mu) / sigma) / sigma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_pdf_peak() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0), norm_pdf(-1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_known_values() {
        assert_relative_eq!(norm_cdf(1.96), 0.975, epsilon = 1e-4);
        assert_relative_eq!(norm_cdf(-1.96), 0.025, epsilon = 1e-4);
        assert_relative_eq!(norm_cdf(1.0) + norm_cdf(-1.0), 1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_normal_pdf_scaling() {
        let sigma = 4.0;
        let density = normal_pdf(10.0, 10.0, sigma).unwrap();
        assert_relative_eq!(density, FRAC_1_SQRT_2PI / sigma, epsilon = 1e-15);
    }

    #[test]
    fn test_normal_pdf_degenerate() {
        assert_eq!(normal_pdf(1.0, 1.0, 0.0), None);
        assert_eq!(normal_pdf(1.0, 1.0, -1.0), None);
        assert_eq!(normal_pdf(1.0, 1.0, f64::NAN), None);
    }
}
