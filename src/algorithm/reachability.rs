//! Breadth-first reachability verification
//!
//! Both acceptance checks of the synthesizer are the same traversal with a
//! different blocking rule: walls alone when verifying that the layout is
//! solvable at all, walls and hazards together when verifying that a
//! completely safe route exists. The traversal is generic over a category
//! lookup so it runs against candidate grids during synthesis and against
//! finished boards afterwards.

use std::collections::VecDeque;

use bitvec::bitvec;

use crate::board::cell::{Category, Coordinate};

/// Which categories block traversal during a reachability query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocking {
    /// Only walls block; hazards are permeable
    Walls,
    /// Walls and hazards both block
    WallsAndHazards,
}

impl Blocking {
    /// Whether a cell of the given category blocks traversal under this rule
    pub const fn blocks(self, category: Category) -> bool {
        match category {
            Category::Wall => true,
            Category::Hazard => matches!(self, Self::WallsAndHazards),
            Category::Empty | Category::Start | Category::End => false,
        }
    }
}

/// Whether `end` is reachable from `start` over 4-connected neighbours
///
/// `blocked` answers whether a coordinate may not be entered. Each cell is
/// visited at most once, so the traversal terminates in O(N²) time and space.
/// The start cell is never tested against the predicate; a blocked end is
/// simply unreachable.
pub fn route_exists(
    size: usize,
    start: Coordinate,
    end: Coordinate,
    blocked: impl Fn(Coordinate) -> bool,
) -> bool {
    let mut visited = bitvec![0; size * size];
    let mut queue = VecDeque::new();

    if let Some(mut slot) = visited.get_mut(start.linear_index(size)) {
        *slot = true;
    }
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return true;
        }

        for neighbour in current.neighbours(size) {
            let index = neighbour.linear_index(size);
            let seen = visited.get(index).is_some_and(|bit| *bit);
            if seen || blocked(neighbour) {
                continue;
            }
            if let Some(mut slot) = visited.get_mut(index) {
                *slot = true;
            }
            queue.push_back(neighbour);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{Blocking, route_exists};
    use crate::board::cell::{Category, Coordinate};

    #[test]
    fn test_blocking_rules() {
        assert!(Blocking::Walls.blocks(Category::Wall));
        assert!(!Blocking::Walls.blocks(Category::Hazard));
        assert!(Blocking::WallsAndHazards.blocks(Category::Hazard));
        assert!(!Blocking::WallsAndHazards.blocks(Category::End));
    }

    #[test]
    fn test_open_grid_is_fully_reachable() {
        assert!(route_exists(
            4,
            Coordinate::new(0, 0),
            Coordinate::new(3, 3),
            |_| false,
        ));
    }

    #[test]
    fn test_full_wall_row_disconnects() {
        // Row 1 blocked across the whole width
        let reachable = route_exists(
            4,
            Coordinate::new(0, 0),
            Coordinate::new(3, 3),
            |coordinate| coordinate.row == 1,
        );
        assert!(!reachable);
    }

    #[test]
    fn test_gap_in_wall_row_connects() {
        let reachable = route_exists(
            4,
            Coordinate::new(0, 0),
            Coordinate::new(3, 3),
            |coordinate| coordinate.row == 1 && coordinate.column != 2,
        );
        assert!(reachable);
    }

    #[test]
    fn test_start_equals_end() {
        let origin = Coordinate::new(2, 2);
        assert!(route_exists(5, origin, origin, |_| true));
    }

    #[test]
    fn test_blocked_end_is_unreachable() {
        let end = Coordinate::new(1, 0);
        let reachable = route_exists(3, Coordinate::new(0, 0), end, |coordinate| {
            coordinate == end
        });
        assert!(!reachable);
    }
}
