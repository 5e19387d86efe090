//! Tile grid geometry for the output canvas
//!
//! Tiles are laid out on a regular lattice with stride `tile_size - overlap`,
//! so consecutive tiles share exactly `overlap` pixels along common edges.
//! The last row and column are clipped to the canvas bounds, which shrinks
//! their footprint and, when the clipped footprint is narrower than the
//! overlap, their overlap strip as well.

use crate::spatial::tiles::TilePlacement;

/// Row-major lattice of tile placements covering the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tile_size: usize,
    overlap: usize,
    step: usize,
    rows: usize,
    cols: usize,
}

impl TileGrid {
    /// Create the lattice for a `width` x `height` canvas
    ///
    /// Expects validated parameters (`overlap < tile_size`). A degenerate
    /// stride is raised to 1 so the lattice always terminates.
    pub const fn new(width: usize, height: usize, tile_size: usize, overlap: usize) -> Self {
        let step = tile_size.saturating_sub(overlap);
        let step = if step == 0 { 1 } else { step };

        Self {
            width,
            height,
            tile_size,
            overlap,
            step,
            rows: height.div_ceil(step),
            cols: width.div_ceil(step),
        }
    }

    /// Number of tile rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of tile columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the grid holds no tiles (zero-sized canvas)
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between successive tile origins
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Canvas dimensions `(width, height)`
    pub const fn canvas_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Placement of the tile at grid cell `(row, col)`
    pub const fn placement(&self, row: usize, col: usize) -> Option<TilePlacement> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        let x = col * self.step;
        let y = row * self.step;
        let width = clip(self.tile_size, self.width - x);
        let height = clip(self.tile_size, self.height - y);

        let left_overlap = if col == 0 { 0 } else { clip(self.overlap, width) };
        let top_overlap = if row == 0 { 0 } else { clip(self.overlap, height) };

        Some(TilePlacement {
            row,
            col,
            x,
            y,
            width,
            height,
            left_overlap,
            top_overlap,
        })
    }

    /// Placement of the `index`-th tile in row-major order
    pub const fn placement_at(&self, index: usize) -> Option<TilePlacement> {
        if self.cols == 0 {
            return None;
        }
        self.placement(index / self.cols, index % self.cols)
    }

    /// Iterate placements top-to-bottom, left-to-right
    pub fn iter(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        (0..self.len()).filter_map(|index| self.placement_at(index))
    }
}

const fn clip(value: usize, limit: usize) -> usize {
    if value < limit { value } else { limit }
}
