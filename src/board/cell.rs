//! Coordinates, cell categories, and individual board cells

/// Zero-indexed board position, bounded to `[0, N)` on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Horizontal position (x axis)
    pub column: usize,
    /// Vertical position (y axis)
    pub row: usize,
}

impl Coordinate {
    /// Create a coordinate from column and row positions
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Linear row-major index into a `size`×`size` grid
    pub const fn linear_index(self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// The 4-connected neighbours that stay inside a `size`×`size` grid
    ///
    /// No diagonals; traversal order is up, down, left, right.
    pub fn neighbours(self, size: usize) -> impl Iterator<Item = Self> {
        let up = self.row.checked_sub(1).map(|row| Self::new(self.column, row));
        let down = (self.row + 1 < size).then(|| Self::new(self.column, self.row + 1));
        let left = self
            .column
            .checked_sub(1)
            .map(|column| Self::new(column, self.row));
        let right = (self.column + 1 < size).then(|| Self::new(self.column + 1, self.row));

        [up, down, left, right].into_iter().flatten()
    }
}

/// Role of a cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// Freely traversable cell
    #[default]
    Empty,
    /// Impassable obstacle, always visible
    Wall,
    /// Fatal to cross, visually indistinguishable from empty until revealed
    Hazard,
    /// The designated entry cell
    Start,
    /// The designated goal cell
    End,
}

/// A single board cell
///
/// The stored coordinate is redundant with the cell's grid position but
/// convenient for consumers that iterate cells without tracking indices.
/// `revealed` is meaningful only for hazards; flipping it belongs to the
/// move-application layer that consumes the board, not to generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Position of this cell on the board
    pub coordinate: Coordinate,
    /// Role of this cell
    pub category: Category,
    /// Whether a hazard has been stepped onto and exposed
    pub revealed: bool,
}

impl Cell {
    /// Create an unrevealed cell at a position
    pub const fn new(coordinate: Coordinate, category: Category) -> Self {
        Self {
            coordinate,
            category,
            revealed: false,
        }
    }
}
