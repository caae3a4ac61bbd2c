//! Input/output operations and presentation glue
//!
//! Everything here consumes boards produced by the algorithm modules; none of
//! it feeds back into generation.

/// Command-line interface for generating and exporting levels
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for configuration and export operations
pub mod error;
/// PNG export of generated boards
pub mod image;
/// Batch progress display for multi-level runs
pub mod progress;
/// ASCII rendering of generated boards
pub mod render;
