use crate::{
    algorithm::compositor::{TileSeams, composite_tile},
    algorithm::cost::{OverlapMetric, SquaredRgb, evaluate_overlap},
    algorithm::sampler::{Candidate, CandidateSampler},
    algorithm::seam::{SeamPath, solve_horizontal, solve_vertical},
    io::configuration::MAX_OUTPUT_DIMENSION,
    io::error::{QuiltError, Result, computation_error, invalid_parameter},
    spatial::{Canvas, PixelBuffer, TileGrid, TilePlacement},
};

/// How tiles are chosen and how their overlaps are resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Uniformly random patches pasted over their neighbors
    Random,
    /// Low-overlap-cost patches joined by a straight cut mid-overlap
    Fitting,
    /// Low-overlap-cost patches joined along minimum-cost seams
    #[default]
    PathCut,
}

impl PlacementStrategy {
    /// Whether candidates are scored against the overlap
    pub const fn matches_overlap(self) -> bool {
        !matches!(self, Self::Random)
    }
}

/// Synthesis parameters for one output image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuiltConfig {
    /// Output width in pixels
    pub output_width: usize,
    /// Output height in pixels
    pub output_height: usize,
    /// Tile edge length in pixels
    pub tile_size: usize,
    /// Pixels shared by neighboring tiles
    pub overlap: usize,
    /// Number of random source origins scored per tile
    pub candidate_budget: usize,
    /// Number of cheapest candidates eligible for the final pick
    pub selection_pool_size: usize,
    /// Tile choice and seam policy
    pub strategy: PlacementStrategy,
}

impl QuiltConfig {
    /// Create a path-cut configuration
    pub const fn new(
        output_width: usize,
        output_height: usize,
        tile_size: usize,
        overlap: usize,
        candidate_budget: usize,
        selection_pool_size: usize,
    ) -> Self {
        Self {
            output_width,
            output_height,
            tile_size,
            overlap,
            candidate_budget,
            selection_pool_size,
            strategy: PlacementStrategy::PathCut,
        }
    }

    /// Replace the placement strategy
    #[must_use]
    pub const fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Pool size actually used, never larger than the budget
    pub const fn effective_pool_size(&self) -> usize {
        if self.selection_pool_size < self.candidate_budget {
            self.selection_pool_size
        } else {
            self.candidate_budget
        }
    }

    /// Check the configuration against an exemplar of the given size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for zero or oversized dimensions, a zero
    /// budget or pool, or an overlap not smaller than the tile, and
    /// `ExemplarTooSmall` when the exemplar cannot hold one tile.
    pub fn validate(&self, exemplar_width: usize, exemplar_height: usize) -> Result<()> {
        for (parameter, value) in [
            ("output_width", self.output_width),
            ("output_height", self.output_height),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_OUTPUT_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_OUTPUT_DIMENSION}"),
                ));
            }
        }

        for (parameter, value) in [
            ("tile_size", self.tile_size),
            ("overlap", self.overlap),
            ("candidate_budget", self.candidate_budget),
            ("selection_pool_size", self.selection_pool_size),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        if self.overlap >= self.tile_size {
            return Err(invalid_parameter(
                "overlap",
                &self.overlap,
                &format!("must be smaller than tile_size ({})", self.tile_size),
            ));
        }

        if self.tile_size > exemplar_width.min(exemplar_height) {
            return Err(QuiltError::ExemplarTooSmall {
                exemplar_width,
                exemplar_height,
                tile_size: self.tile_size,
            });
        }

        Ok(())
    }
}

/// Tile-by-tile quilting executor
///
/// Owns the output canvas and visits the tile grid in row-major order, so a
/// tile's left and top neighbors are always final when it is placed and no
/// right or bottom neighbor exists yet.
pub struct Quilter<'a, E: ?Sized, M = SquaredRgb> {
    exemplar: &'a E,
    config: QuiltConfig,
    grid: TileGrid,
    canvas: Canvas,
    sampler: CandidateSampler,
    metric: M,
    next_tile: usize,
}

impl<'a, E> Quilter<'a, E, SquaredRgb>
where
    E: PixelBuffer + Sync + ?Sized,
{
    /// Create an executor using squared RGB distance
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid for `exemplar`.
    pub fn new(exemplar: &'a E, config: QuiltConfig, seed: u64) -> Result<Self> {
        Self::with_metric(exemplar, config, seed, SquaredRgb)
    }
}

impl<'a, E, M> Quilter<'a, E, M>
where
    E: PixelBuffer + Sync + ?Sized,
    M: OverlapMetric,
{
    /// Create an executor with a custom overlap metric
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid for `exemplar`.
    pub fn with_metric(exemplar: &'a E, config: QuiltConfig, seed: u64, metric: M) -> Result<Self> {
        config.validate(exemplar.width(), exemplar.height())?;

        let grid = TileGrid::new(
            config.output_width,
            config.output_height,
            config.tile_size,
            config.overlap,
        );

        tracing::info!(
            width = config.output_width,
            height = config.output_height,
            tile_size = config.tile_size,
            overlap = config.overlap,
            tiles = grid.len(),
            strategy = ?config.strategy,
            "starting quilting"
        );

        Ok(Self {
            exemplar,
            config,
            grid,
            canvas: Canvas::new(config.output_width, config.output_height),
            sampler: CandidateSampler::new(seed),
            metric,
            next_tile: 0,
        })
    }

    /// Configuration in use
    pub const fn config(&self) -> &QuiltConfig {
        &self.config
    }

    /// Tile grid being filled
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Overlap metric in use
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// Number of tiles placed so far
    pub const fn tiles_placed(&self) -> usize {
        self.next_tile
    }

    /// Total number of tiles in the grid
    pub const fn tile_count(&self) -> usize {
        self.grid.len()
    }

    /// Whether every tile has been placed
    pub const fn is_finished(&self) -> bool {
        self.next_tile >= self.grid.len()
    }

    /// Place the next tile in scan order
    ///
    /// Returns `false` once the grid is complete.
    ///
    /// # Errors
    ///
    /// Returns an error if no source patch can be drawn.
    pub fn execute_tile(&mut self) -> Result<bool> {
        let Some(placement) = self.grid.placement_at(self.next_tile) else {
            return Ok(false);
        };

        let candidate = self.choose_candidate(&placement)?;
        let seams = self.compute_seams(&placement, &candidate)?;
        let written = composite_tile(
            &mut self.canvas,
            self.exemplar,
            &placement,
            candidate.origin,
            &seams,
        );

        tracing::debug!(
            row = placement.row,
            col = placement.col,
            source_x = candidate.origin.x,
            source_y = candidate.origin.y,
            cost = candidate.cost,
            overlap_pixels = placement.overlap_area(),
            written,
            "placed tile"
        );

        self.next_tile += 1;
        Ok(true)
    }

    /// Place all remaining tiles and return the finished canvas
    ///
    /// # Errors
    ///
    /// Returns an error if a tile cannot be placed or the canvas ends up with
    /// unpainted pixels.
    pub fn run(mut self) -> Result<Canvas> {
        while self.execute_tile()? {}

        let unpainted = self.canvas.unpainted_count();
        if unpainted > 0 {
            return Err(computation_error(
                "quilting",
                &format!("{unpainted} pixels left unpainted"),
            ));
        }

        tracing::info!(tiles = self.next_tile, "quilting finished");
        Ok(self.canvas)
    }

    /// Consume the executor and return the canvas as it stands
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }

    fn choose_candidate(&mut self, placement: &TilePlacement) -> Result<Candidate> {
        if !self.config.strategy.matches_overlap() {
            let origin = self
                .sampler
                .random_origin(self.exemplar, self.config.tile_size)?;
            return Ok(Candidate { origin, cost: 0.0 });
        }

        self.sampler.select(
            &self.metric,
            self.exemplar,
            &self.canvas,
            placement,
            self.config.tile_size,
            self.config.candidate_budget,
            self.config.effective_pool_size(),
        )
    }

    fn compute_seams(
        &self,
        placement: &TilePlacement,
        candidate: &Candidate,
    ) -> Result<TileSeams> {
        let seams = match self.config.strategy {
            PlacementStrategy::Random => TileSeams::default(),
            PlacementStrategy::Fitting => TileSeams {
                vertical: (placement.left_overlap > 0).then(|| {
                    SeamPath::straight(placement.height, placement.left_overlap / 2)
                }),
                horizontal: (placement.top_overlap > 0)
                    .then(|| SeamPath::straight(placement.width, placement.top_overlap / 2)),
            },
            PlacementStrategy::PathCut => {
                if !placement.has_overlap() {
                    return Ok(TileSeams::default());
                }
                let cost = evaluate_overlap(
                    &self.metric,
                    self.exemplar,
                    &self.canvas,
                    placement,
                    candidate.origin,
                );
                let seams = TileSeams {
                    vertical: cost.left.as_ref().map(|field| solve_vertical(field.view())),
                    horizontal: cost.top.as_ref().map(|field| solve_horizontal(field.view())),
                };
                tracing::trace!(
                    row = placement.row,
                    col = placement.col,
                    overlap_cost = cost.total,
                    "computed seams"
                );
                seams
            }
        };

        check_seams(&seams)?;
        Ok(seams)
    }
}

/// Reject seams whose consecutive cut positions jump by more than one
///
/// # Errors
///
/// Returns a computation error naming the disconnected seam.
pub fn check_seams(seams: &TileSeams) -> Result<()> {
    for (name, seam) in [("vertical", &seams.vertical), ("horizontal", &seams.horizontal)] {
        if seam.as_ref().is_some_and(|path| !path.is_connected()) {
            return Err(computation_error(
                "seam solving",
                &format!("{name} seam is not connected"),
            ));
        }
    }
    Ok(())
}

/// Synthesize a complete output canvas from `exemplar`
///
/// # Errors
///
/// Returns a configuration error before any work starts if `config` is
/// invalid for `exemplar`.
pub fn synthesize<E>(exemplar: &E, config: QuiltConfig, seed: u64) -> Result<Canvas>
where
    E: PixelBuffer + Sync + ?Sized,
{
    Quilter::new(exemplar, config, seed)?.run()
}
