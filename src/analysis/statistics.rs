//! Density and reseed statistics across a level range

use std::fmt;
use std::ops::RangeInclusive;

use crate::algorithm::synthesis::Synthesizer;
use crate::board::cell::Category;
use crate::board::grid::Board;

/// Realised cell fractions for a single generated level
#[derive(Debug, Clone, Copy)]
pub struct DensitySample {
    /// Level number the sample was generated from
    pub level: u32,
    /// Fraction of non-start/end cells that are walls
    pub wall_fraction: f64,
    /// Fraction of non-start/end cells that are hazards
    pub hazard_fraction: f64,
    /// Attempts consumed before the board was accepted
    pub attempts: usize,
    /// Seed escalations performed for this level
    pub reseeds: u32,
}

impl DensitySample {
    /// Measure the realised fractions of an already generated board
    pub fn of_board(level: u32, board: &Board, attempts: usize, reseeds: u32) -> Self {
        let markers = 2;
        let population = board.size() * board.size() - markers;
        let walls = board.category_count(Category::Wall);
        let hazards = board.category_count(Category::Hazard);

        Self {
            level,
            wall_fraction: walls as f64 / population as f64,
            hazard_fraction: hazards as f64 / population as f64,
            attempts,
            reseeds,
        }
    }
}

/// Aggregated statistics over a measured level range
#[derive(Debug, Clone, Copy)]
pub struct DensitySummary {
    /// Number of levels measured
    pub samples: usize,
    /// Mean wall fraction over all samples
    pub mean_wall_fraction: f64,
    /// Mean hazard fraction over all samples
    pub mean_hazard_fraction: f64,
    /// Largest attempt count any level needed
    pub max_attempts: usize,
    /// Total seed escalations across the range
    pub total_reseeds: u32,
}

impl fmt::Display for DensitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} levels: walls {:.3}, hazards {:.3}, max attempts {}, reseeds {}",
            self.samples,
            self.mean_wall_fraction,
            self.mean_hazard_fraction,
            self.max_attempts,
            self.total_reseeds
        )
    }
}

impl DensitySummary {
    /// Aggregate per-level samples into range statistics
    pub fn from_samples(samples: &[DensitySample]) -> Self {
        let count = samples.len().max(1) as f64;
        Self {
            samples: samples.len(),
            mean_wall_fraction: samples.iter().map(|s| s.wall_fraction).sum::<f64>() / count,
            mean_hazard_fraction: samples.iter().map(|s| s.hazard_fraction).sum::<f64>() / count,
            max_attempts: samples.iter().map(|s| s.attempts).max().unwrap_or(0),
            total_reseeds: samples.iter().map(|s| s.reseeds).sum(),
        }
    }
}

/// Generate and measure every level in a range
pub fn measure_levels(synthesizer: &Synthesizer, levels: RangeInclusive<u32>) -> DensitySummary {
    let samples: Vec<DensitySample> = levels
        .map(|level| {
            let (board, report) = synthesizer.generate_with_report(level);
            DensitySample::of_board(level, &board, report.attempts, report.reseeds)
        })
        .collect();

    DensitySummary::from_samples(&samples)
}

#[cfg(test)]
mod tests {
    use super::{DensitySample, DensitySummary};

    #[test]
    fn test_summary_aggregates_means() {
        let samples = [
            DensitySample {
                level: 1,
                wall_fraction: 0.2,
                hazard_fraction: 0.1,
                attempts: 1,
                reseeds: 0,
            },
            DensitySample {
                level: 2,
                wall_fraction: 0.4,
                hazard_fraction: 0.3,
                attempts: 3,
                reseeds: 1,
            },
        ];

        let summary = DensitySummary::from_samples(&samples);
        assert_eq!(summary.samples, 2);
        assert!((summary.mean_wall_fraction - 0.3).abs() < 1e-12);
        assert!((summary.mean_hazard_fraction - 0.2).abs() < 1e-12);
        assert_eq!(summary.max_attempts, 3);
        assert_eq!(summary.total_reseeds, 1);
    }

    #[test]
    fn test_summary_of_no_samples() {
        let summary = DensitySummary::from_samples(&[]);
        assert_eq!(summary.samples, 0);
        assert_eq!(summary.max_attempts, 0);
    }
}
