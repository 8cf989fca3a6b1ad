//! # Tailrisk Math
//!
//! Numerical substrate for the Tailrisk option pricing and VaR analytics
//! library.
//!
//! This crate provides:
//!
//! - **Distributions**: Standard normal CDF/PDF via the complementary
//!   error function
//! - **Sampling**: Standard normal draws (Box–Muller and ziggurat)
//!   over injected generators
//! - **Statistics**: Sample mean, population standard deviation,
//!   empirical quantile ranks
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: CDF accuracy below `1e-9` across the
//!   pricing-relevant range, no crude polynomial approximations
//! - **Determinism**: Every sampler takes its generator as an argument;
//!   a fixed seed gives a fixed stream

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]

pub mod distributions;
pub mod error;
pub mod sampling;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::distributions::{norm_cdf, norm_pdf};
    pub use crate::error::{MathError, MathResult};
    pub use crate::sampling::{box_muller, draw_box_muller, draw_ziggurat};
    pub use crate::stats::{lower_tail_rank, mean, population_std_dev, sort_ascending};
}

pub use error::{MathError, MathResult};
