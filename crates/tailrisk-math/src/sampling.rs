//! Standard normal sampling.
//!
//! Two constructions are provided:
//!
//! - **Box–Muller**: `z = sqrt(-2 ln u1) * cos(2 pi u2)` from two uniform
//!   draws. Reproducible from explicitly supplied uniforms, which makes it
//!   the right choice for compatibility test vectors.
//! - **Ziggurat**: `rand_distr::StandardNormal`, the fastest statistically
//!   correct sampler in the ecosystem.
//!
//! Both take the generator as an argument. Nothing here touches ambient
//! process state, so a fixed seed gives a fixed sample stream.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{MathError, MathResult};

/// Converts two uniform(0,1) draws into one standard normal draw via the
/// Box–Muller transform.
///
/// `u1` must lie in `(0, 1]` (the logarithm is taken of it) and `u2` in
/// `[0, 1)`. Out-of-domain inputs are rejected rather than silently
/// producing NaN or infinity.
///
/// # Example
///
/// ```rust
/// use tailrisk_math::sampling::box_muller;
///
/// // u1 = 1 gives ln(1) = 0, so z = 0 regardless of u2.
/// let z = box_muller(1.0, 0.25).unwrap();
/// assert!(z.abs() < 1e-15);
/// ```
pub fn box_muller(u1: f64, u2: f64) -> MathResult<f64> {
    if !(u1 > 0.0 && u1 <= 1.0) {
        return Err(MathError::UniformOutOfRange { value: u1 });
    }
    if !(0.0..1.0).contains(&u2) {
        return Err(MathError::UniformOutOfRange { value: u2 });
    }

    Ok((-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos())
}

/// Draws one standard normal variate from `rng` via Box–Muller.
///
/// The first uniform is mapped from `[0, 1)` to `(0, 1]` so the logarithm
/// is always defined; with that mapping the transform cannot fail.
pub fn draw_box_muller<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Draws one standard normal variate from `rng` via the ziggurat algorithm.
pub fn draw_ziggurat<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_box_muller_fixed_uniforms() {
        // z = sqrt(-2 ln 0.5) * cos(2 pi * 0.25) = sqrt(2 ln 2) * cos(pi/2) = 0
        let z = box_muller(0.5, 0.25).unwrap();
        assert!(z.abs() < 1e-15);

        // u2 = 0 gives cos(0) = 1, so z = sqrt(-2 ln u1)
        let z = box_muller(0.1, 0.0).unwrap();
        assert_relative_eq!(z, (-2.0 * 0.1_f64.ln()).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_box_muller_rejects_zero_u1() {
        assert!(box_muller(0.0, 0.5).is_err());
        assert!(box_muller(-0.1, 0.5).is_err());
        assert!(box_muller(1.5, 0.5).is_err());
        assert!(box_muller(0.5, 1.0).is_err());
    }

    #[test]
    fn test_draw_deterministic_for_fixed_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(draw_box_muller(&mut a), draw_box_muller(&mut b));
        }
    }

    #[test]
    fn test_draw_moments() {
        // 100k draws: sample mean within ~4 standard errors of zero,
        // sample variance near one.
        let mut rng = StdRng::seed_from_u64(42);
        let n = 100_000;
        let draws: Vec<f64> = (0..n).map(|_| draw_box_muller(&mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.02, "mean = {mean}");
        assert!((var - 1.0).abs() < 0.02, "var = {var}");
    }

    #[test]
    fn test_ziggurat_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 100_000;
        let draws: Vec<f64> = (0..n).map(|_| draw_ziggurat(&mut rng)).collect();

        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|z| (z - mean) * (z - mean)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.02, "mean = {mean}");
        assert!((var - 1.0).abs() < 0.02, "var = {var}");
    }
}
