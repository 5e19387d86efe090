//! Overlap cost between already-synthesized output and a candidate patch
//!
//! The cost of a candidate is measured only where its footprint coincides with
//! pixels painted by earlier tiles: the left strip, the top strip, and their
//! shared corner (counted once).

use crate::spatial::{Color, PixelBuffer, SourceOrigin, TilePlacement};
use ndarray::Array2;

/// Per-pixel dissimilarity between an old and a candidate color
pub trait OverlapMetric: Sync {
    /// Non-negative cost of replacing `old` with `new`
    fn pixel_cost(&self, old: Color, new: Color) -> f64;
}

/// Squared Euclidean distance in RGB space
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredRgb;

impl OverlapMetric for SquaredRgb {
    fn pixel_cost(&self, old: Color, new: Color) -> f64 {
        old.0
            .iter()
            .zip(new.0.iter())
            .map(|(&a, &b)| {
                let diff = f64::from(a) - f64::from(b);
                diff * diff
            })
            .sum()
    }
}

/// Cost fields for the overlap strips of one placement
///
/// `left` has shape `(height, left_overlap)` and `top` has shape
/// `(top_overlap, width)`, both indexed `[row, col]` in footprint-local
/// coordinates. A strip that does not exist for the placement is `None`.
#[derive(Debug, Clone, Default)]
pub struct OverlapCost {
    /// Field over the strip shared with the left neighbor
    pub left: Option<Array2<f64>>,
    /// Field over the strip shared with the top neighbor
    pub top: Option<Array2<f64>>,
    /// Sum of per-pixel cost over the union of both strips
    pub total: f64,
}

/// Cost of one footprint-local pixel
fn local_cost<M, E, C>(
    metric: &M,
    exemplar: &E,
    canvas: &C,
    placement: &TilePlacement,
    source: SourceOrigin,
    dx: usize,
    dy: usize,
) -> f64
where
    M: OverlapMetric + ?Sized,
    E: PixelBuffer + ?Sized,
    C: PixelBuffer + ?Sized,
{
    let old = canvas.get(placement.x + dx, placement.y + dy);
    let new = exemplar.get(source.x + dx, source.y + dy);
    match (old, new) {
        (Some(old), Some(new)) => metric.pixel_cost(old, new),
        _ => 0.0,
    }
}

/// Aggregate overlap cost of placing the patch at `source` on `placement`
///
/// Returns 0 without consulting the metric when the placement shares no
/// pixels with an earlier tile.
pub fn aggregate_overlap_cost<M, E, C>(
    metric: &M,
    exemplar: &E,
    canvas: &C,
    placement: &TilePlacement,
    source: SourceOrigin,
) -> f64
where
    M: OverlapMetric + ?Sized,
    E: PixelBuffer + ?Sized,
    C: PixelBuffer + ?Sized,
{
    if placement.overlap_area() == 0 {
        return 0.0;
    }

    let mut total = 0.0;
    for dy in 0..placement.height {
        // Rows inside the top strip are fully overlapped, the rest only on the left
        let cols = if dy < placement.top_overlap {
            placement.width
        } else {
            placement.left_overlap
        };
        for dx in 0..cols {
            total += local_cost(metric, exemplar, canvas, placement, source, dx, dy);
        }
    }
    total
}

/// Build the per-pixel cost fields and their aggregate for one candidate
pub fn evaluate_overlap<M, E, C>(
    metric: &M,
    exemplar: &E,
    canvas: &C,
    placement: &TilePlacement,
    source: SourceOrigin,
) -> OverlapCost
where
    M: OverlapMetric + ?Sized,
    E: PixelBuffer + ?Sized,
    C: PixelBuffer + ?Sized,
{
    let left = (placement.left_overlap > 0).then(|| {
        Array2::from_shape_fn((placement.height, placement.left_overlap), |(dy, dx)| {
            local_cost(metric, exemplar, canvas, placement, source, dx, dy)
        })
    });

    let top = (placement.top_overlap > 0).then(|| {
        Array2::from_shape_fn((placement.top_overlap, placement.width), |(dy, dx)| {
            local_cost(metric, exemplar, canvas, placement, source, dx, dy)
        })
    });

    let left_sum = left.as_ref().map_or(0.0, |field| field.sum());
    let top_sum = top.as_ref().map_or(0.0, |field| field.sum());

    // The corner appears in both fields
    let corner_sum = match (&left, &top) {
        (Some(left_field), Some(_)) => left_field
            .rows()
            .into_iter()
            .take(placement.top_overlap)
            .map(|row| row.sum())
            .sum::<f64>(),
        _ => 0.0,
    };

    OverlapCost {
        left,
        top,
        total: left_sum + top_sum - corner_sum,
    }
}
