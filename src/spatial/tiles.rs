//! Tile placements on the output canvas and source origins in the exemplar
//!
//! A placement describes where one cell of the tile grid lands in the output:
//! its pixel origin, its footprint after clipping to the canvas, and how much
//! of that footprint overlaps the already-placed left and top neighbors.

/// Top-left corner of a candidate patch inside the exemplar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceOrigin {
    /// Column of the patch's top-left pixel
    pub x: usize,
    /// Row of the patch's top-left pixel
    pub y: usize,
}

impl SourceOrigin {
    /// Create a source origin
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One cell of the output tile grid, clipped to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    /// Tile grid row
    pub row: usize,
    /// Tile grid column
    pub col: usize,
    /// Output column of the footprint's top-left pixel
    pub x: usize,
    /// Output row of the footprint's top-left pixel
    pub y: usize,
    /// Footprint width after clipping
    pub width: usize,
    /// Footprint height after clipping
    pub height: usize,
    /// Width of the strip shared with the left neighbor (0 in the first column)
    pub left_overlap: usize,
    /// Height of the strip shared with the top neighbor (0 in the first row)
    pub top_overlap: usize,
}

impl TilePlacement {
    /// Whether the tile shares pixels with a previously placed neighbor
    pub const fn has_overlap(&self) -> bool {
        self.left_overlap > 0 || self.top_overlap > 0
    }

    /// Whether the tile overlaps both a left and a top neighbor
    pub const fn has_corner(&self) -> bool {
        self.left_overlap > 0 && self.top_overlap > 0
    }

    /// Whether the footprint-local pixel `(dx, dy)` lies in an overlap strip
    pub const fn in_overlap(&self, dx: usize, dy: usize) -> bool {
        dx < self.left_overlap || dy < self.top_overlap
    }

    /// Number of footprint pixels shared with earlier tiles
    pub const fn overlap_area(&self) -> usize {
        let left = self.left_overlap * self.height;
        let top = self.top_overlap * self.width;
        let corner = self.left_overlap * self.top_overlap;
        left + top - corner
    }

    /// Number of pixels in the clipped footprint
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}
