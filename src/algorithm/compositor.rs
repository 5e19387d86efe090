//! Hard-cut compositing of a chosen patch into the output canvas
//!
//! Each footprint pixel either keeps the color already on the canvas or takes
//! the candidate patch's color. There is no blending across the seam.

use crate::algorithm::seam::SeamPath;
use crate::spatial::{PixelBuffer, PixelBufferMut, SourceOrigin, TilePlacement};

/// Seam paths for the overlap strips of one placement
///
/// A strip without a path is taken entirely by the new tile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSeams {
    /// Cut through the left strip, one column position per footprint row
    pub vertical: Option<SeamPath>,
    /// Cut through the top strip, one row position per footprint column
    pub horizontal: Option<SeamPath>,
}

impl TileSeams {
    /// Whether the footprint-local pixel `(dx, dy)` takes the new tile's color
    ///
    /// Inside the left strip the pixel is new when `dx` reaches the vertical
    /// seam of its row; inside the top strip when `dy` reaches the horizontal
    /// seam of its column. A corner pixel must be new for both seams, so the
    /// previously placed neighbor wins any disagreement.
    pub fn keeps_new(&self, placement: &TilePlacement, dx: usize, dy: usize) -> bool {
        if !placement.in_overlap(dx, dy) {
            return true;
        }

        let vertical_new = dx >= placement.left_overlap
            || self
                .vertical
                .as_ref()
                .is_none_or(|seam| seam.get(dy).is_none_or(|cut| dx >= cut));

        let horizontal_new = dy >= placement.top_overlap
            || self
                .horizontal
                .as_ref()
                .is_none_or(|seam| seam.get(dx).is_none_or(|cut| dy >= cut));

        vertical_new && horizontal_new
    }
}

/// Copy the new side of every seam from the exemplar into the canvas
///
/// Returns the number of pixels written. Pixels on the old side are left
/// untouched.
pub fn composite_tile<E, C>(
    canvas: &mut C,
    exemplar: &E,
    placement: &TilePlacement,
    source: SourceOrigin,
    seams: &TileSeams,
) -> usize
where
    E: PixelBuffer + ?Sized,
    C: PixelBufferMut + ?Sized,
{
    let mut written = 0;

    for dy in 0..placement.height {
        for dx in 0..placement.width {
            if !seams.keeps_new(placement, dx, dy) {
                continue;
            }
            let Some(color) = exemplar.get(source.x + dx, source.y + dy) else {
                continue;
            };
            if canvas.set(placement.x + dx, placement.y + dy, color) {
                written += 1;
            }
        }
    }

    written
}
