//! # Tailrisk Analytics
//!
//! Option pricing and portfolio Value at Risk.
//!
//! This crate provides the two computational entry points of the library:
//!
//! - **Options**: Closed-form Black–Scholes pricing for European calls
//!   and puts ([`options::black_scholes`])
//! - **Risk**: Monte Carlo Value at Risk over a configurable horizon
//!   ([`risk::var::MonteCarloVaR`])
//!
//! ## Architecture
//!
//! Both components are stateless functions over explicit parameter
//! structures. They share no state with each other or between calls;
//! randomness for the Monte Carlo engine is injected as a seedable
//! generator, never drawn from ambient process state. All parameter and
//! result types derive `serde` traits so any transport shell (HTTP, CLI,
//! FFI) can move them without this crate knowing about it.
//!
//! ## Usage
//!
//! ```rust
//! use tailrisk_analytics::prelude::*;
//!
//! // Price a European option.
//! let pricing = black_scholes(&OptionParameters::new(45.0, 40.0, 0.5, 0.1, 0.2))?;
//! println!("call = {:.2}, put = {:.2}", pricing.call_price, pricing.put_price);
//!
//! // Estimate 20-day 95% VaR on a $1M portfolio from 10,000 scenarios.
//! let engine = MonteCarloVaR::new();
//! let params = VaRParameters::new(1_000_000.0, 20, 0.95, 10_000);
//! let risk = engine.estimate_seeded(&params, 42)?;
//! println!("VaR = {:.0}", risk.var_value);
//! # Ok::<(), tailrisk_analytics::AnalyticsError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod options;
pub mod portfolio;
pub mod risk;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use tailrisk_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::options::{black_scholes, OptionParameters, OptionPricingResult};
    pub use crate::portfolio::parse_ticker_list;
    pub use crate::risk::var::{
        MonteCarloVaR, SamplingMethod, VaRParameters, VaRResult, DEFAULT_DAILY_RETURN,
        DEFAULT_DAILY_VOLATILITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = AnalyticsError::invalid_input("test");
        assert!(err.to_string().contains("test"));
    }
}
