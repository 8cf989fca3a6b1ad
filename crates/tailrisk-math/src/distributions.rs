//! Standard normal distribution functions.
//!
//! The cumulative distribution function is evaluated through the
//! complementary error function rather than a polynomial approximation,
//! giving absolute accuracy well below `1e-9` over the range that matters
//! for option pricing (roughly `|x| < 8`).

use statrs::function::erf::erfc;

/// `1 / sqrt(2 * pi)`, the normalizing constant of the standard normal density.
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes `P(Z <= x)` for `Z ~ N(0, 1)` as `erfc(-x / sqrt(2)) / 2`.
///
/// # Example
///
/// ```rust
/// use tailrisk_math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96) - 0.975).abs() < 1e-3);
/// ```
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / std::f64::consts::SQRT_2)
}

/// Standard normal probability density function.
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_symmetry() {
        for x in [-3.0, -1.5, -0.25, 0.0, 0.7, 2.1] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_cdf_reference_values() {
        // Abramowitz & Stegun table values
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(norm_cdf(1.0), 0.841344746068543, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.158655253931457, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.326347874040841), 0.99, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_tails() {
        assert!(norm_cdf(-10.0) < 1e-20);
        assert!(norm_cdf(10.0) > 1.0 - 1e-15);
    }

    #[test]
    fn test_pdf_peak() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(1.0), norm_pdf(-1.0), epsilon = 1e-15);
    }
}
