//! Command-line interface for batch quilting of PNG exemplars

use crate::algorithm::executor::{PlacementStrategy, QuiltConfig, Quilter};
use crate::io::configuration::{
    DEFAULT_CANDIDATE_BUDGET, DEFAULT_OUTPUT_SIZE, DEFAULT_OVERLAP, DEFAULT_SEED,
    DEFAULT_SELECTION_POOL, DEFAULT_TILE_SIZE, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_path};
use crate::io::image::{load_exemplar, save_canvas};
use crate::io::progress::ProgressManager;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Placement strategy names accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Random tiles, no overlap matching
    Random,
    /// Matched tiles joined by a straight cut
    Fitting,
    /// Matched tiles joined along minimum-cost seams
    PathCut,
}

impl From<StrategyArg> for PlacementStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => Self::Random,
            StrategyArg::Fitting => Self::Fitting,
            StrategyArg::PathCut => Self::PathCut,
        }
    }
}

#[derive(Parser)]
#[command(name = "quiltcut")]
#[command(
    author,
    version,
    about = "Synthesize large textures by quilting patches of a small exemplar"
)]
/// Command-line arguments for the quilting tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible synthesis
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in pixels (implies square if height not specified)
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Overlap between neighboring tiles in pixels
    #[arg(short, long, default_value_t = DEFAULT_OVERLAP)]
    pub overlap: usize,

    /// Random source positions scored per tile
    #[arg(short, long, default_value_t = DEFAULT_CANDIDATE_BUDGET)]
    pub candidates: usize,

    /// Number of cheapest candidates to pick from
    #[arg(short, long, default_value_t = DEFAULT_SELECTION_POOL)]
    pub pool: usize,

    /// Tile placement strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::PathCut)]
    pub strategy: StrategyArg,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output dimensions `(width, height)`, square when only one is given
    pub fn output_size(&self) -> (usize, usize) {
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, w),
            (None, Some(h)) => (h, h),
            (None, None) => (DEFAULT_OUTPUT_SIZE, DEFAULT_OUTPUT_SIZE),
        }
    }

    /// Synthesis configuration described by the arguments
    pub fn quilt_config(&self) -> QuiltConfig {
        let (width, height) = self.output_size();
        QuiltConfig::new(
            width,
            height,
            self.tile_size,
            self.overlap,
            self.candidates,
            self.pool,
        )
        .with_strategy(self.strategy.into())
    }
}

/// Orchestrates batch processing of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, synthesis or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Input files selected by the target argument
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a PNG file nor a readable
    /// directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_png(&self.cli.target) && !is_output(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_path("Target file must be a PNG exemplar"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                // Earlier results sit next to their inputs
                if is_png(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_path("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            tracing::warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let exemplar = load_exemplar(input_path)?;
        let mut quilter = Quilter::new(&exemplar, self.cli.quilt_config(), self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, quilter.tile_count());
        }

        while quilter.execute_tile()? {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_tiles(index, quilter.tiles_placed());
            }
        }

        save_canvas(quilter.canvas(), &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        tracing::info!(
            input = %input_path.display(),
            output = %output_path.display(),
            elapsed_secs = start_time.elapsed().as_secs_f64(),
            "quilted exemplar"
        );

        Ok(())
    }

    /// Output path for an input exemplar: `<stem>_quilt.<ext>` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
