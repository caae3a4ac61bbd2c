//! The generated board
//!
//! A board is the immutable output of synthesis: a square cell matrix plus
//! its designated start and end coordinates. Nothing in this crate mutates a
//! board after construction; the caller owns the value and applies its own
//! rules (such as revealing a hazard) downstream.

use ndarray::Array2;

use crate::algorithm::reachability::{Blocking, route_exists};
use crate::board::cell::{Category, Cell, Coordinate};

/// Square cell matrix with designated start and end coordinates
///
/// Invariants upheld by synthesis: exactly one `Start` and one `End` cell
/// exist, at distinct coordinates, and each cell's stored coordinate matches
/// its matrix position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Cell>,
    start: Coordinate,
    end: Coordinate,
}

impl Board {
    /// Assemble a board from a category matrix and its start/end coordinates
    ///
    /// The matrix is indexed `[row, column]`. Callers are responsible for the
    /// start/end coordinates actually referencing `Start`/`End` cells; the
    /// synthesizer constructs its candidates that way.
    pub fn from_categories(
        categories: &Array2<Category>,
        start: Coordinate,
        end: Coordinate,
    ) -> Self {
        let cells = Array2::from_shape_fn(categories.dim(), |(row, column)| {
            let coordinate = Coordinate::new(column, row);
            let category = categories.get((row, column)).copied().unwrap_or_default();
            Cell::new(coordinate, category)
        });

        Self { cells, start, end }
    }

    /// Board dimension N for the N×N cell matrix
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// The designated entry coordinate
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// The designated goal coordinate
    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// Look up the cell at a coordinate, if it is on the board
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells.get((coordinate.row, coordinate.column))
    }

    /// Category of the cell at a coordinate, `Empty` off-board
    pub fn category(&self, coordinate: Coordinate) -> Category {
        self.cell(coordinate).map_or(Category::Empty, |cell| cell.category)
    }

    /// Row-major iterator over all cells (row ascending, then column)
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells carrying a category
    pub fn category_count(&self, category: Category) -> usize {
        self.cells()
            .filter(|cell| cell.category == category)
            .count()
    }

    /// Re-run the reachability verification query against this board
    ///
    /// Answers whether the end is reachable from the start under the given
    /// blocking rule. Generated boards satisfy this for both rules; the
    /// helper exists so consumers and tests can check for themselves.
    pub fn route_exists(&self, blocking: Blocking) -> bool {
        route_exists(self.size(), self.start, self.end, |coordinate| {
            blocking.blocks(self.category(coordinate))
        })
    }
}
