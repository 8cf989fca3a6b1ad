//! Summary statistics and empirical quantiles over f64 samples.

use crate::error::{MathError, MathResult};

/// Arithmetic mean of a sample.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample.
pub fn mean(sample: &[f64]) -> MathResult<f64> {
    if sample.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Population standard deviation of a sample (divisor `n`, not `n - 1`).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty sample.
pub fn population_std_dev(sample: &[f64]) -> MathResult<f64> {
    let m = mean(sample)?;
    let var = sample.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / sample.len() as f64;
    Ok(var.sqrt())
}

/// Rank of the lower-tail empirical quantile in a sorted sample of size `n`.
///
/// Computes `floor(tail_probability * n)` clamped to `[0, n - 1]`, the rank
/// convention used for empirical VaR: for `tail_probability = 1 - confidence`
/// the element at this rank in the ascending-sorted sample is the scenario
/// not undershot with the given confidence.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if `n == 0` or `tail_probability` is
/// not a finite value in `[0, 1]`.
pub fn lower_tail_rank(tail_probability: f64, n: usize) -> MathResult<usize> {
    if n == 0 {
        return Err(MathError::invalid_input("sample size must be positive"));
    }
    if !tail_probability.is_finite() || !(0.0..=1.0).contains(&tail_probability) {
        return Err(MathError::invalid_input(format!(
            "tail probability {tail_probability} outside [0, 1]"
        )));
    }

    let rank = (tail_probability * n as f64).floor() as usize;
    Ok(rank.min(n - 1))
}

/// Sorts a sample ascending with a total order on f64 (NaN sorts last).
pub fn sort_ascending(sample: &mut [f64]) {
    sample.sort_unstable_by(f64::total_cmp);
}
