//! Minimum-cost seam paths through overlap strips
//!
//! A seam crosses the strip along its long axis, choosing one cut position per
//! step. Positions of consecutive steps differ by at most one, so the cut is a
//! connected boundary between the old and the new tile. The path minimizing
//! the summed cost is found by accumulating costs row by row and walking back
//! from the cheapest end.

use ndarray::{Array2, ArrayView1, ArrayView2};

/// Cut positions through an overlap strip, one per step along the strip
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeamPath {
    positions: Vec<usize>,
}

impl SeamPath {
    /// Wrap precomputed cut positions
    pub const fn from_positions(positions: Vec<usize>) -> Self {
        Self { positions }
    }

    /// Straight cut at `position` over `len` steps
    pub fn straight(len: usize, position: usize) -> Self {
        Self {
            positions: vec![position; len],
        }
    }

    /// Cut position at step `index`
    pub fn get(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// All cut positions in order
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the path has no steps
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether adjacent positions differ by at most one
    pub fn is_connected(&self) -> bool {
        self.positions
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if a.abs_diff(*b) <= 1))
    }
}

/// Accumulated cost grid for a top-to-bottom path through `cost`
///
/// Row 0 copies the cost field; every later cell adds the cheapest of the
/// (up to) three cells above it. Neighbors outside the field are skipped.
pub fn accumulate_costs(cost: ArrayView2<'_, f64>) -> Array2<f64> {
    let (rows, cols) = cost.dim();
    let mut accumulated = cost.to_owned();

    for i in 1..rows {
        for j in 0..cols {
            let lo = j.saturating_sub(1);
            let hi = (j + 1).min(cols - 1);
            let best = (lo..=hi)
                .filter_map(|k| accumulated.get((i - 1, k)).copied())
                .fold(f64::INFINITY, f64::min);
            if let Some(cell) = accumulated.get_mut((i, j)) {
                *cell += best;
            }
        }
    }

    accumulated
}

/// Walk an accumulated grid back from its cheapest last-row cell
///
/// The last-row minimum prefers the lowest index on ties. Each backward step
/// prefers the cell straight above, then up-left, then up-right.
pub fn backtrack(accumulated: ArrayView2<'_, f64>) -> SeamPath {
    let (rows, cols) = accumulated.dim();
    if rows == 0 || cols == 0 {
        return SeamPath::default();
    }

    let mut positions = vec![0; rows];
    let mut current = argmin(accumulated.row(rows - 1));
    if let Some(last) = positions.last_mut() {
        *last = current;
    }

    for i in (0..rows - 1).rev() {
        current = best_predecessor(accumulated.row(i), current);
        if let Some(slot) = positions.get_mut(i) {
            *slot = current;
        }
    }

    SeamPath { positions }
}

fn argmin(row: ArrayView1<'_, f64>) -> usize {
    let mut best_index = 0;
    let mut best_value = f64::INFINITY;
    for (index, &value) in row.iter().enumerate() {
        if value < best_value {
            best_index = index;
            best_value = value;
        }
    }
    best_index
}

fn best_predecessor(row: ArrayView1<'_, f64>, column: usize) -> usize {
    let right = (column + 1 < row.len()).then_some(column + 1);
    let candidates = [Some(column), column.checked_sub(1), right];

    let mut best_index = column;
    let mut best_value = f64::INFINITY;
    for index in candidates.into_iter().flatten() {
        if let Some(&value) = row.get(index) {
            if value < best_value {
                best_index = index;
                best_value = value;
            }
        }
    }
    best_index
}

/// Seam through a vertical strip (left overlap)
///
/// `cost` has one row per output row; the result holds, for each row, the
/// first column that takes the new tile's color.
pub fn solve_vertical(cost: ArrayView2<'_, f64>) -> SeamPath {
    backtrack(accumulate_costs(cost).view())
}

/// Seam through a horizontal strip (top overlap)
///
/// `cost` has one column per output column; the result holds, for each
/// column, the first row that takes the new tile's color.
pub fn solve_horizontal(cost: ArrayView2<'_, f64>) -> SeamPath {
    solve_vertical(cost.t())
}
