//! Board data model
//!
//! This module contains the generated level's data structures:
//! - Coordinates and cell categories
//! - The immutable board produced by synthesis

/// Coordinates, categories, and individual cells
pub mod cell;
/// The generated board and its accessors
pub mod grid;

pub use cell::{Category, Cell, Coordinate};
pub use grid::Board;
