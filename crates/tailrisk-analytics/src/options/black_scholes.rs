//! Closed-form Black–Scholes pricing for European options.

use serde::{Deserialize, Serialize};
use tailrisk_math::distributions::norm_cdf;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Inputs to the Black–Scholes formula.
///
/// All fields are plain annualized quantities: `expiry` is the time to
/// expiration in years, `rate` and `volatility` are annualized decimals
/// (0.05 for 5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Current price of the underlying (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiration in years (T).
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Annualized volatility of the underlying (sigma).
    pub volatility: f64,
}

impl OptionParameters {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        }
    }

    /// Validates the parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidInput`] if any of spot, strike,
    /// expiry or volatility is non-positive or non-finite, if the rate is
    /// non-finite, or if `volatility * sqrt(expiry)` underflows to zero
    /// (the formula divides by it).
    pub fn validate(&self) -> AnalyticsResult<()> {
        for (name, value) in [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("volatility", self.volatility),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalyticsError::invalid_input(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        if !self.rate.is_finite() {
            return Err(AnalyticsError::invalid_input(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }

        let sigma_sqrt_t = self.volatility * self.expiry.sqrt();
        if sigma_sqrt_t == 0.0 || !sigma_sqrt_t.is_finite() {
            return Err(AnalyticsError::invalid_input(format!(
                "volatility * sqrt(expiry) degenerates to {sigma_sqrt_t}"
            )));
        }

        Ok(())
    }
}

/// Output of the Black–Scholes formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPricingResult {
    /// Standardized moneyness variable d1.
    pub d1: f64,
    /// d2 = d1 - sigma * sqrt(T).
    pub d2: f64,
    /// European call price.
    pub call_price: f64,
    /// European put price.
    pub put_price: f64,
}

/// Prices a European call and put under the Black–Scholes model.
///
/// ```text
/// d1   = (ln(S/K) + (r + sigma^2/2) T) / (sigma sqrt(T))
/// d2   = d1 - sigma sqrt(T)
/// call = S N(d1) - K e^{-rT} N(d2)
/// put  = K e^{-rT} N(-d2) - S N(-d1)
/// ```
///
/// where `N` is the standard normal CDF.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidInput`] for any precondition violation
/// (see [`OptionParameters::validate`]). Invalid inputs never surface as
/// silent NaN in the result.
///
/// # Example
///
/// ```rust
/// use tailrisk_analytics::options::{black_scholes, OptionParameters};
///
/// let params = OptionParameters::new(45.0, 40.0, 0.5, 0.1, 0.2);
/// let result = black_scholes(&params).unwrap();
/// assert!(result.call_price > 0.0);
/// // Put-call parity: C - P = S - K e^{-rT}
/// let forward = 45.0 - 40.0 * (-0.1_f64 * 0.5).exp();
/// assert!((result.call_price - result.put_price - forward).abs() < 1e-9);
/// ```
pub fn black_scholes(params: &OptionParameters) -> AnalyticsResult<OptionPricingResult> {
    params.validate()?;

    let OptionParameters {
        spot,
        strike,
        expiry,
        rate,
        volatility,
    } = *params;

    let sigma_sqrt_t = volatility * expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * expiry)
        / sigma_sqrt_t;
    let d2 = d1 - sigma_sqrt_t;

    let discounted_strike = strike * (-rate * expiry).exp();
    let call_price = spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put_price = discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1);

    Ok(OptionPricingResult {
        d1,
        d2,
        call_price,
        put_price,
    })
}
