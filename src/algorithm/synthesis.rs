//! Deterministic board synthesis with rejection-retry
//!
//! A level number is mapped to a 32-bit seed, and candidate layouts are drawn
//! from that seed's sequence until one passes both reachability checks: walls
//! first, so that draws are not wasted hazard-placing on layouts that are
//! already disconnected, then walls and hazards together, which guarantees
//! that at least one completely safe route survives. Rejected candidates keep
//! consuming the same sequence; attempts are not independently reseeded.

use ndarray::Array2;

use crate::algorithm::reachability::{Blocking, route_exists};
use crate::board::cell::{Category, Coordinate};
use crate::board::grid::Board;
use crate::io::configuration::{
    BOARD_SIZE, COLLISION_REDRAW_LIMIT, HAZARD_DENSITY, MAX_ATTEMPTS, MAX_BOARD_DIMENSION,
    SEED_FACTOR, WALL_DENSITY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::random::source::RandomSource;

/// Synthesis parameters controlling board layout and the retry policy
#[derive(Clone, Copy, Debug)]
pub struct SynthesisConfig {
    /// Board dimension N for the N×N level
    pub size: usize,
    /// Probability for an empty cell to become a wall
    pub wall_density: f64,
    /// Probability for an empty cell to become a hidden hazard
    pub hazard_density: f64,
    /// Multiplier deriving the seed from the level number
    pub seed_factor: u32,
    /// Layout attempts per seed before escalating to the next level's seed
    pub max_attempts: usize,
    /// End-coordinate redraws permitted on collision with the start
    pub collision_redraw_limit: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            wall_density: WALL_DENSITY,
            hazard_density: HAZARD_DENSITY,
            seed_factor: SEED_FACTOR,
            max_attempts: MAX_ATTEMPTS,
            collision_redraw_limit: COLLISION_REDRAW_LIMIT,
        }
    }
}

impl SynthesisConfig {
    /// Validate the parameter set
    ///
    /// # Errors
    ///
    /// Returns an error if the board dimension is below 2 or above the safety
    /// cap, a density lies outside `[0, 1)`, or a retry budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.size < 2 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"board dimension must be at least 2",
            ));
        }
        if self.size > MAX_BOARD_DIMENSION {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &format!("board dimension must not exceed {MAX_BOARD_DIMENSION}"),
            ));
        }
        for (parameter, density) in [
            ("wall_density", self.wall_density),
            ("hazard_density", self.hazard_density),
        ] {
            if !density.is_finite() || !(0.0..1.0).contains(&density) {
                return Err(invalid_parameter(
                    parameter,
                    &density,
                    &"density must lie in [0, 1)",
                ));
            }
        }
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt per seed is required",
            ));
        }
        if self.collision_redraw_limit == 0 {
            return Err(invalid_parameter(
                "collision_redraw_limit",
                &self.collision_redraw_limit,
                &"at least one redraw is required",
            ));
        }
        Ok(())
    }
}

/// Outcome metadata for one generation call
///
/// `seeded_level` diverges from `requested_level` only when every attempt for
/// a seed was rejected and synthesis escalated to the next level's seed. That
/// indicates a parameter misconfiguration (density too high for the board
/// dimension), which the presentation layer is expected to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisReport {
    /// Level number the caller asked for
    pub requested_level: u32,
    /// Level number whose seed actually produced the board
    pub seeded_level: u32,
    /// Attempts consumed within the successful seed's sequence
    pub attempts: usize,
    /// Seed escalations performed before a board was accepted
    pub reseeds: u32,
}

/// Deterministic level synthesizer
///
/// Pure with respect to its level argument: equal levels yield bit-identical
/// boards, within a run and across platforms. Each call owns its random
/// source and board, so independent invocations need no synchronisation.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            config: SynthesisConfig::default(),
        }
    }
}

impl Synthesizer {
    /// Create a synthesizer with a validated parameter set
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: SynthesisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The parameter set this synthesizer generates with
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Generate the board for a level number
    ///
    /// Level numbers start at 1. The call never fails: an exhausted attempt
    /// budget escalates to the next level's seed rather than raising.
    pub fn generate(&self, level: u32) -> Board {
        self.generate_with_report(level).0
    }

    /// Generate the board for a level number along with outcome metadata
    pub fn generate_with_report(&self, level: u32) -> (Board, SynthesisReport) {
        let mut seeded_level = level;
        let mut reseeds = 0;

        loop {
            let seed = seeded_level.wrapping_mul(self.config.seed_factor);
            let mut source = RandomSource::new(seed);

            for attempt in 1..=self.config.max_attempts {
                if let Some(board) = self.attempt(&mut source) {
                    let report = SynthesisReport {
                        requested_level: level,
                        seeded_level,
                        attempts: attempt,
                        reseeds,
                    };
                    return (board, report);
                }
            }

            // Budget exhausted: prefer eventual termination over an error
            // and fall back to the next level's seed.
            reseeds += 1;
            seeded_level = seeded_level.wrapping_add(1);
        }
    }

    /// Build one candidate layout, or reject it
    ///
    /// Rejection leaves the random source advanced; the next attempt
    /// continues within the same sequence.
    fn attempt(&self, source: &mut RandomSource) -> Option<Board> {
        let size = self.config.size;
        let mut categories = Array2::from_elem((size, size), Category::Empty);

        let start = self.draw_start(source);
        let end = self.draw_end(source, start);

        set_category(&mut categories, start, Category::Start);
        set_category(&mut categories, end, Category::End);

        self.scatter(&mut categories, source, self.config.wall_density, Category::Wall);
        if !self.candidate_route_exists(&categories, start, end, Blocking::Walls) {
            return None;
        }

        self.scatter(
            &mut categories,
            source,
            self.config.hazard_density,
            Category::Hazard,
        );
        if !self.candidate_route_exists(&categories, start, end, Blocking::WallsAndHazards) {
            return None;
        }

        Some(Board::from_categories(&categories, start, end))
    }

    /// Draw the start coordinate within the top-left quadrant
    fn draw_start(&self, source: &mut RandomSource) -> Coordinate {
        let span = self.config.size.div_ceil(2);
        let column = source.next_bounded(span);
        let row = source.next_bounded(span);
        Coordinate::new(column, row)
    }

    /// Draw the end coordinate within the bottom-right quadrant
    ///
    /// The quadrants are disjoint for even dimensions but share the centre
    /// cell for odd ones, so a collision with the start is possible. Collision
    /// redraws range over the full board, capped, with a deterministic
    /// row-major fallback so the draw always terminates.
    fn draw_end(&self, source: &mut RandomSource, start: Coordinate) -> Coordinate {
        let size = self.config.size;
        let base = size / 2;
        let span = size - base;

        let mut end = Coordinate::new(
            base + source.next_bounded(span),
            base + source.next_bounded(span),
        );

        if end != start {
            return end;
        }

        for _ in 0..self.config.collision_redraw_limit {
            end = Coordinate::new(source.next_bounded(size), source.next_bounded(size));
            if end != start {
                return end;
            }
        }

        first_distinct_coordinate(size, start)
    }

    /// One scatter pass: for every empty cell in row-major order, draw once
    /// and convert the cell when the draw falls below the density threshold
    ///
    /// Cells that already carry a category consume no draw, which keeps the
    /// draw sequence reproducible across the wall and hazard passes.
    fn scatter(
        &self,
        categories: &mut Array2<Category>,
        source: &mut RandomSource,
        density: f64,
        category: Category,
    ) {
        let size = self.config.size;
        for row in 0..size {
            for column in 0..size {
                if let Some(slot) = categories.get_mut((row, column)) {
                    if *slot == Category::Empty && source.next_f64() < density {
                        *slot = category;
                    }
                }
            }
        }
    }

    fn candidate_route_exists(
        &self,
        categories: &Array2<Category>,
        start: Coordinate,
        end: Coordinate,
        blocking: Blocking,
    ) -> bool {
        route_exists(self.config.size, start, end, |coordinate| {
            let category = categories
                .get((coordinate.row, coordinate.column))
                .copied()
                .unwrap_or_default();
            blocking.blocks(category)
        })
    }
}

/// Generate the board for a level number with the default configuration
///
/// Convenience wrapper over [`Synthesizer::generate`]; equal level numbers
/// always reproduce the identical board.
pub fn generate(level: u32) -> Board {
    Synthesizer::default().generate(level)
}

fn set_category(categories: &mut Array2<Category>, coordinate: Coordinate, category: Category) {
    if let Some(slot) = categories.get_mut((coordinate.row, coordinate.column)) {
        *slot = category;
    }
}

/// First row-major coordinate distinct from `taken`
fn first_distinct_coordinate(size: usize, taken: Coordinate) -> Coordinate {
    for row in 0..size {
        for column in 0..size {
            let candidate = Coordinate::new(column, row);
            if candidate != taken {
                return candidate;
            }
        }
    }
    taken
}

#[cfg(test)]
mod tests {
    use super::{SynthesisConfig, first_distinct_coordinate};
    use crate::board::cell::Coordinate;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SynthesisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_dimension() {
        let config = SynthesisConfig {
            size: 1,
            ..SynthesisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_saturated_density() {
        let config = SynthesisConfig {
            wall_density: 1.0,
            ..SynthesisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fallback_coordinate_skips_taken() {
        let fallback = first_distinct_coordinate(3, Coordinate::new(0, 0));
        assert_eq!(fallback, Coordinate::new(1, 0));

        let fallback = first_distinct_coordinate(3, Coordinate::new(1, 1));
        assert_eq!(fallback, Coordinate::new(0, 0));
    }
}
