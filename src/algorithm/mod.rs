/// Hard-cut compositing of chosen patches into the canvas
pub mod compositor;
/// Overlap cost metrics and cost fields
pub mod cost;
/// Tile-by-tile quilting executor
pub mod executor;
/// Random candidate search and pool selection
pub mod sampler;
/// Minimum-cost seam paths through overlap strips
pub mod seam;
