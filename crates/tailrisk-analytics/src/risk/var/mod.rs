//! Value at Risk calculation.
//!
//! VaR is the loss magnitude not exceeded with a given confidence level
//! over a given horizon. The implementation here estimates it by Monte
//! Carlo simulation: generate a synthetic distribution of horizon
//! profit/loss scenarios, sort it, and read off the left-tail empirical
//! quantile.

pub mod monte_carlo;

pub use monte_carlo::{MonteCarloVaR, SamplingMethod};

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Assumed expected daily portfolio return used when none is supplied.
pub const DEFAULT_DAILY_RETURN: f64 = 0.0003;

/// Assumed daily portfolio volatility used when none is supplied.
pub const DEFAULT_DAILY_VOLATILITY: f64 = 0.008;

/// Inputs to a Monte Carlo VaR estimation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaRParameters {
    /// Current portfolio value in currency units.
    pub portfolio_value: f64,
    /// Risk horizon in trading days.
    pub horizon_days: u32,
    /// Confidence level in (0, 1), e.g. 0.95 for 95%.
    pub confidence_level: f64,
    /// Number of independent simulated scenarios.
    pub simulations: usize,
    /// Expected daily portfolio return (simple, as a decimal).
    pub daily_return: f64,
    /// Daily portfolio volatility (standard deviation of daily returns).
    pub daily_volatility: f64,
}

impl VaRParameters {
    /// Creates a parameter set with the default market assumptions
    /// ([`DEFAULT_DAILY_RETURN`], [`DEFAULT_DAILY_VOLATILITY`]).
    #[must_use]
    pub fn new(
        portfolio_value: f64,
        horizon_days: u32,
        confidence_level: f64,
        simulations: usize,
    ) -> Self {
        Self {
            portfolio_value,
            horizon_days,
            confidence_level,
            simulations,
            daily_return: DEFAULT_DAILY_RETURN,
            daily_volatility: DEFAULT_DAILY_VOLATILITY,
        }
    }

    /// Replaces the default market assumptions.
    #[must_use]
    pub fn with_market_assumptions(mut self, daily_return: f64, daily_volatility: f64) -> Self {
        self.daily_return = daily_return;
        self.daily_volatility = daily_volatility;
        self
    }

    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidInput`] or
    /// [`AnalyticsError::OutOfBounds`] for a non-positive portfolio value,
    /// horizon or simulation count, a confidence level outside the open
    /// interval (0, 1), a non-finite market assumption, or a negative
    /// daily volatility.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.portfolio_value.is_finite() || self.portfolio_value <= 0.0 {
            return Err(AnalyticsError::invalid_input(format!(
                "portfolio value must be a positive finite number, got {}",
                self.portfolio_value
            )));
        }
        if self.horizon_days == 0 {
            return Err(AnalyticsError::invalid_input(
                "horizon must be at least one day",
            ));
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(AnalyticsError::out_of_bounds(
                "confidence_level",
                self.confidence_level,
                0.0,
                1.0,
            ));
        }
        if self.simulations == 0 {
            return Err(AnalyticsError::invalid_input(
                "simulation count must be positive",
            ));
        }
        if !self.daily_return.is_finite() {
            return Err(AnalyticsError::invalid_input(format!(
                "daily return must be finite, got {}",
                self.daily_return
            )));
        }
        if !self.daily_volatility.is_finite() || self.daily_volatility < 0.0 {
            return Err(AnalyticsError::invalid_input(format!(
                "daily volatility must be a non-negative finite number, got {}",
                self.daily_volatility
            )));
        }
        Ok(())
    }
}

/// Output of a Monte Carlo VaR estimation.
///
/// The full sorted scenario sample is included so callers can render a
/// histogram of the simulated profit/loss distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaRResult {
    /// The VaR: loss magnitude at the requested confidence level. The
    /// left-tail scenario sign-flipped, so a positive number is a loss.
    pub var_value: f64,
    /// Mean of the simulated scenario profit/loss values.
    pub mean_return: f64,
    /// Population standard deviation of the simulated scenarios.
    pub std_dev: f64,
    /// Confidence level the VaR was taken at.
    pub confidence_level: f64,
    /// Risk horizon in trading days.
    pub horizon_days: u32,
    /// All simulated scenario profit/loss values, sorted ascending.
    pub sorted_scenarios: Vec<f64>,
}

impl VaRResult {
    /// Number of scenarios backing the estimate.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sorted_scenarios.len()
    }

    /// The VaR expressed as a fraction of the given portfolio value.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidInput`] if `portfolio_value` is
    /// not a positive finite number, rather than silently dividing into
    /// infinity or NaN.
    pub fn var_fraction(&self, portfolio_value: f64) -> AnalyticsResult<f64> {
        if !portfolio_value.is_finite() || portfolio_value <= 0.0 {
            return Err(AnalyticsError::invalid_input(format!(
                "portfolio value must be a positive finite number, got {portfolio_value}"
            )));
        }
        Ok(self.var_value / portfolio_value)
    }
}
