//! Spatial data structures for the output canvas
//!
//! This module contains spatial-related functionality including:
//! - Pixel buffer access for exemplar and output
//! - Tile grid geometry and clipping
//! - Tile placements and source origins

/// Pixel buffer traits and the output canvas
pub mod canvas;
/// Tile grid layout over the output canvas
pub mod grid;
/// Tile placement and source origin types
pub mod tiles;

pub use canvas::{Canvas, Color, PixelBuffer, PixelBufferMut};
pub use grid::TileGrid;
pub use tiles::{SourceOrigin, TilePlacement};
