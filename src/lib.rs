//! Patch-based texture quilting with minimum-cost seam cuts
//!
//! The system samples square tiles from a small exemplar image, chooses each
//! tile so that it agrees with its already-placed neighbors along the overlap,
//! and hides the join with a dynamic-programming seam instead of a straight
//! edge.

#![forbid(unsafe_code)]

/// Tile selection, seam solving and compositing
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Canvas, tile grid and placement geometry
pub mod spatial;

pub use algorithm::executor::{PlacementStrategy, QuiltConfig, Quilter, synthesize};
pub use io::error::{QuiltError, Result};
