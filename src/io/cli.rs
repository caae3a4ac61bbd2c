//! Command-line interface for generating and exporting puzzle levels

use crate::algorithm::synthesis::{SynthesisConfig, Synthesizer};
use crate::analysis::statistics::{DensitySample, DensitySummary};
use crate::io::configuration::{BATCH_PROGRESS_THRESHOLD, DEFAULT_LEVEL, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use crate::io::render::render_ascii;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridworld")]
#[command(
    author,
    version,
    about = "Generate deterministic grid puzzle levels with verified safe routes"
)]
/// Command-line arguments for the level generation tool
pub struct Cli {
    /// First level number to generate
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    pub level: u32,

    /// Number of consecutive levels to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: u32,

    /// Board dimension override
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Wall density override in [0, 1)
    #[arg(short, long)]
    pub wall_density: Option<f64>,

    /// Hazard density override in [0, 1)
    #[arg(short = 'z', long)]
    pub hazard_density: Option<f64>,

    /// Directory to write PNG level maps into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Expose unrevealed hazards in the ASCII output
    #[arg(short = 'x', long)]
    pub expose_hazards: bool,

    /// Print a density summary after generation
    #[arg(short, long)]
    pub analysis: bool,

    /// Suppress board and progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Synthesis parameters with CLI overrides applied
    pub fn synthesis_config(&self) -> SynthesisConfig {
        let defaults = SynthesisConfig::default();
        SynthesisConfig {
            size: self.size.unwrap_or(defaults.size),
            wall_density: self.wall_density.unwrap_or(defaults.wall_density),
            hazard_density: self.hazard_density.unwrap_or(defaults.hazard_density),
            ..defaults
        }
    }

    /// Whether boards are printed individually rather than tracked by a bar
    pub const fn prints_boards(&self) -> bool {
        !self.quiet && self.count < BATCH_PROGRESS_THRESHOLD
    }
}

/// Orchestrates level generation, rendering, and export
pub struct LevelProcessor {
    cli: Cli,
}

impl LevelProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate levels according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation or PNG export fails.
    // Allow print for user feedback on generated boards and reseed warnings
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let synthesizer = Synthesizer::new(self.cli.synthesis_config())?;

        let progress = (!self.cli.quiet && self.cli.count >= BATCH_PROGRESS_THRESHOLD)
            .then(|| ProgressManager::new(u64::from(self.cli.count)));

        let mut samples = Vec::new();

        for offset in 0..self.cli.count {
            let level = self.cli.level.wrapping_add(offset);
            let (board, report) = synthesizer.generate_with_report(level);

            // Persistent reseeding indicates densities too high for the
            // board dimension; surface it even in batch runs.
            if report.reseeds > 0 && !self.cli.quiet {
                eprintln!(
                    "Warning: level {level} fell back to seed of level {} after {} reseed(s)",
                    report.seeded_level, report.reseeds
                );
            }

            if self.cli.prints_boards() {
                println!("Level {level}");
                println!("{}", render_ascii(&board, self.cli.expose_hazards));
            }

            if let Some(directory) = &self.cli.output {
                let file = directory.join(format!("{OUTPUT_PREFIX}{level}.png"));
                export_board_as_png(&board, &file.to_string_lossy())?;
            }

            if self.cli.analysis {
                samples.push(DensitySample::of_board(
                    level,
                    &board,
                    report.attempts,
                    report.reseeds,
                ));
            }

            if let Some(ref bar) = progress {
                bar.complete_level();
            }
        }

        if let Some(bar) = progress {
            bar.finish();
        }

        if self.cli.analysis && !self.cli.quiet {
            println!("{}", DensitySummary::from_samples(&samples));
        }

        Ok(())
    }
}
