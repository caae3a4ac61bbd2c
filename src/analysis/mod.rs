//! Empirical measurement of generated levels
//!
//! The configured densities are per-cell probabilities, not exact quotas;
//! rejection sampling and the wall pass running before the hazard pass both
//! bias the realised fractions. Measuring across a level range makes the
//! realised behaviour visible for tuning and testing.

/// Density and reseed statistics across a level range
pub mod statistics;

pub use statistics::{DensitySample, DensitySummary, measure_levels};
