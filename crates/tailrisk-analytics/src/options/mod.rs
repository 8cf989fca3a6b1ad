//! Option pricing models.
//!
//! Currently provides the closed-form Black–Scholes model for European
//! options. The pricer is a pure function over an explicit parameter
//! struct: same inputs, same outputs, no hidden state.

mod black_scholes;

pub use black_scholes::{black_scholes, OptionParameters, OptionPricingResult};
