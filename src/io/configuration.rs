//! Synthesis constants and runtime configuration defaults

// Tile geometry
/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: usize = 64;
/// Default overlap between neighboring tiles in pixels
pub const DEFAULT_OVERLAP: usize = 16;

// Candidate search
/// Default number of random source origins scored per tile
pub const DEFAULT_CANDIDATE_BUDGET: usize = 512;
/// Default number of lowest-cost candidates eligible for the final pick
pub const DEFAULT_SELECTION_POOL: usize = 5;

// Output dimensions
/// Default output edge length when no size is given
pub const DEFAULT_OUTPUT_SIZE: usize = 512;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension
pub const MAX_OUTPUT_DIMENSION: usize = 16_384;

// Default values for configurable parameters
/// Fixed seed for reproducible synthesis
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_quilt";
