//! Portfolio risk analytics.
//!
//! This module provides:
//!
//! - **VaR**: Value at Risk via Monte Carlo simulation
//!
//! Each calculation is a self-contained call over explicit parameter
//! structures; no state is shared between invocations.

pub mod var;

pub use var::{
    MonteCarloVaR, SamplingMethod, VaRParameters, VaRResult, DEFAULT_DAILY_RETURN,
    DEFAULT_DAILY_VOLATILITY,
};
