//! Algorithm constants and runtime configuration defaults

/// Board dimension N for the default N×N level
pub const BOARD_SIZE: usize = 10;

/// Probability for an empty cell to become a wall
pub const WALL_DENSITY: f64 = 0.2;

/// Probability for an empty cell to become a hidden hazard
pub const HAZARD_DENSITY: f64 = 0.15;

/// Multiplier deriving a 32-bit seed from a level number
pub const SEED_FACTOR: u32 = 12345;

/// Layout attempts per seed before escalating to the next level's seed
pub const MAX_ATTEMPTS: usize = 1000;

// Persistent collision is vanishingly unlikely; the cap only guards
// against an infinite redraw loop in degenerate configurations.
/// End-coordinate redraws permitted when the draw collides with the start
pub const COLLISION_REDRAW_LIMIT: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed board dimension
pub const MAX_BOARD_DIMENSION: usize = 1024;

// Default values for configurable parameters
/// First level of the progression
pub const DEFAULT_LEVEL: u32 = 1;

// Progress bar display settings
/// Level count above which batch runs show a progress bar
pub const BATCH_PROGRESS_THRESHOLD: u32 = 16;

// Output settings
/// Edge length in pixels of one cell in PNG output
pub const CELL_PIXEL_SIZE: u32 = 24;
/// Prefix for exported level image filenames
pub const OUTPUT_PREFIX: &str = "level_";
