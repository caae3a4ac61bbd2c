//! ASCII rendering of generated boards
//!
//! The player-facing convention is that an unrevealed hazard looks exactly
//! like an empty cell; `expose_hazards` overrides that for debugging and for
//! golden-fixture comparison in tests.

use crate::board::cell::Category;
use crate::board::grid::Board;

/// Render a board as one character per cell, one line per row
///
/// `S` start, `E` end, `#` wall, `.` empty. Hazards render as `!` when
/// revealed or when `expose_hazards` is set, and as `.` otherwise.
pub fn render_ascii(board: &Board, expose_hazards: bool) -> String {
    let size = board.size();
    // One char per cell plus a newline per row
    let mut output = String::with_capacity(size * (size + 1));

    for cell in board.cells() {
        let symbol = match cell.category {
            Category::Empty => '.',
            Category::Wall => '#',
            Category::Start => 'S',
            Category::End => 'E',
            Category::Hazard => {
                if cell.revealed || expose_hazards {
                    '!'
                } else {
                    '.'
                }
            }
        };
        output.push(symbol);
        if cell.coordinate.column + 1 == size {
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::render_ascii;
    use crate::board::cell::{Category, Coordinate};
    use crate::board::grid::Board;
    use ndarray::Array2;

    fn two_by_two() -> Board {
        let mut categories = Array2::from_elem((2, 2), Category::Empty);
        if let Some(slot) = categories.get_mut((0, 0)) {
            *slot = Category::Start;
        }
        if let Some(slot) = categories.get_mut((1, 1)) {
            *slot = Category::End;
        }
        if let Some(slot) = categories.get_mut((0, 1)) {
            *slot = Category::Hazard;
        }
        Board::from_categories(&categories, Coordinate::new(0, 0), Coordinate::new(1, 1))
    }

    #[test]
    fn test_unrevealed_hazard_renders_as_empty() {
        assert_eq!(render_ascii(&two_by_two(), false), "S.\n.E\n");
    }

    #[test]
    fn test_exposed_hazard_renders_as_marker() {
        assert_eq!(render_ascii(&two_by_two(), true), "S!\n.E\n");
    }
}
