//! Random candidate search for the next tile's source patch
//!
//! A fixed budget of source origins is drawn uniformly from the exemplar and
//! scored against the overlap with already-placed tiles. The final pick is
//! uniform among the cheapest few, which keeps continuity at the borders
//! without copying the same best patch over and over.

use crate::algorithm::cost::{OverlapMetric, aggregate_overlap_cost};
use crate::io::error::{QuiltError, Result};
use crate::spatial::{PixelBuffer, SourceOrigin, TilePlacement};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// A scored source patch for one placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Top-left corner of the patch in the exemplar
    pub origin: SourceOrigin,
    /// Aggregate overlap cost against the current canvas
    pub cost: f64,
}

/// Largest valid source origin `(x, y)` for square tiles of `tile_size`
///
/// # Errors
///
/// Returns `ExemplarTooSmall` when the exemplar cannot contain a full tile.
pub fn source_range<E>(exemplar: &E, tile_size: usize) -> Result<(usize, usize)>
where
    E: PixelBuffer + ?Sized,
{
    let (width, height) = (exemplar.width(), exemplar.height());
    match (width.checked_sub(tile_size), height.checked_sub(tile_size)) {
        (Some(max_x), Some(max_y)) if tile_size > 0 => Ok((max_x, max_y)),
        _ => Err(QuiltError::ExemplarTooSmall {
            exemplar_width: width,
            exemplar_height: height,
            tile_size,
        }),
    }
}

/// Score every origin against the placement's overlap, in parallel
///
/// Results keep the order of `origins`.
pub fn score_candidates<M, E, C>(
    metric: &M,
    exemplar: &E,
    canvas: &C,
    placement: &TilePlacement,
    origins: &[SourceOrigin],
) -> Vec<Candidate>
where
    M: OverlapMetric + ?Sized,
    E: PixelBuffer + Sync + ?Sized,
    C: PixelBuffer + Sync + ?Sized,
{
    origins
        .par_iter()
        .map(|&origin| Candidate {
            origin,
            cost: aggregate_overlap_cost(metric, exemplar, canvas, placement, origin),
        })
        .collect()
}

/// Seeded sampler drawing and picking source patches
pub struct CandidateSampler {
    rng: StdRng,
}

impl CandidateSampler {
    /// Create a deterministic sampler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one source origin uniformly from the valid range
    ///
    /// # Errors
    ///
    /// Returns `ExemplarTooSmall` when no origin fits a full tile.
    pub fn random_origin<E>(&mut self, exemplar: &E, tile_size: usize) -> Result<SourceOrigin>
    where
        E: PixelBuffer + ?Sized,
    {
        let (max_x, max_y) = source_range(exemplar, tile_size)?;
        Ok(SourceOrigin::new(
            self.rng.random_range(0..=max_x),
            self.rng.random_range(0..=max_y),
        ))
    }

    /// Draw `count` source origins uniformly from the valid range
    ///
    /// # Errors
    ///
    /// Returns `ExemplarTooSmall` when no origin fits a full tile.
    pub fn draw_origins<E>(
        &mut self,
        exemplar: &E,
        tile_size: usize,
        count: usize,
    ) -> Result<Vec<SourceOrigin>>
    where
        E: PixelBuffer + ?Sized,
    {
        let (max_x, max_y) = source_range(exemplar, tile_size)?;
        Ok((0..count)
            .map(|_| {
                SourceOrigin::new(
                    self.rng.random_range(0..=max_x),
                    self.rng.random_range(0..=max_y),
                )
            })
            .collect())
    }

    /// Keep the `pool_size` cheapest candidates and pick one uniformly
    ///
    /// The pool is clamped to the number of candidates. Equal costs keep their
    /// draw order. Returns `None` for an empty candidate list.
    pub fn pick_from_pool(
        &mut self,
        mut candidates: Vec<Candidate>,
        pool_size: usize,
    ) -> Option<Candidate> {
        candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));
        let pool = pool_size.clamp(1, candidates.len().max(1));
        candidates.truncate(pool);
        if candidates.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..candidates.len());
        candidates.get(index).copied()
    }

    /// Choose the source patch for `placement`
    ///
    /// A placement without overlapping neighbors takes a uniformly random
    /// origin and never consults the metric. Otherwise `budget` origins are
    /// scored and one of the `pool_size` cheapest is returned.
    ///
    /// # Errors
    ///
    /// Returns `ExemplarTooSmall` when no origin fits a full tile, and
    /// `InvalidParameter` for a zero budget.
    pub fn select<M, E, C>(
        &mut self,
        metric: &M,
        exemplar: &E,
        canvas: &C,
        placement: &TilePlacement,
        tile_size: usize,
        budget: usize,
        pool_size: usize,
    ) -> Result<Candidate>
    where
        M: OverlapMetric + ?Sized,
        E: PixelBuffer + Sync + ?Sized,
        C: PixelBuffer + Sync + ?Sized,
    {
        if !placement.has_overlap() {
            let origin = self.random_origin(exemplar, tile_size)?;
            return Ok(Candidate { origin, cost: 0.0 });
        }

        let origins = self.draw_origins(exemplar, tile_size, budget)?;
        let candidates = score_candidates(metric, exemplar, canvas, placement, &origins);

        self.pick_from_pool(candidates, pool_size).ok_or_else(|| {
            crate::io::error::invalid_parameter(
                "candidate_budget",
                &budget,
                &"at least one candidate must be drawn",
            )
        })
    }
}
