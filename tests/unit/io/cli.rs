//! Tests for argument parsing, output naming and target collection

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use quiltcut::algorithm::executor::PlacementStrategy;
    use quiltcut::io::cli::{Cli, FileProcessor, StrategyArg};
    use quiltcut::io::configuration::{
        DEFAULT_CANDIDATE_BUDGET, DEFAULT_OUTPUT_SIZE, DEFAULT_SEED, DEFAULT_TILE_SIZE,
    };
    use std::path::{Path, PathBuf};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap_or_else(|e| unreachable!("arguments rejected: {e}"))
    }

    fn write_png(path: &Path) {
        RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]))
            .save(path)
            .unwrap_or_else(|e| unreachable!("fixture not written: {e}"));
    }

    // Tests defaults are applied when only a target is given
    // Verified by dropping the default_value_t attributes
    #[test]
    fn test_defaults() {
        let cli = parse(&["quiltcut", "texture.png"]);

        assert_eq!(cli.target, PathBuf::from("texture.png"));
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.candidates, DEFAULT_CANDIDATE_BUDGET);
        assert_eq!(cli.strategy, StrategyArg::PathCut);
        assert_eq!(cli.output_size(), (DEFAULT_OUTPUT_SIZE, DEFAULT_OUTPUT_SIZE));
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.verbose, 0);
    }

    // Tests a single dimension implies a square output
    // Verified by falling back to the default for the missing side
    #[test]
    fn test_output_size_square_fallback() {
        assert_eq!(parse(&["quiltcut", "a.png", "-w", "300"]).output_size(), (300, 300));
        assert_eq!(parse(&["quiltcut", "a.png", "-H", "120"]).output_size(), (120, 120));
        assert_eq!(
            parse(&["quiltcut", "a.png", "-w", "300", "-H", "120"]).output_size(),
            (300, 120)
        );
    }

    // Tests flags flow into the synthesis configuration
    // Verified by ignoring the strategy flag when building the config
    #[test]
    fn test_quilt_config_from_flags() {
        let cli = parse(&[
            "quiltcut", "a.png", "-w", "96", "-t", "24", "-o", "6", "-c", "40", "-p", "3",
            "--strategy", "fitting", "-vv", "-q", "-n",
        ]);
        let config = cli.quilt_config();

        assert_eq!((config.output_width, config.output_height), (96, 96));
        assert_eq!((config.tile_size, config.overlap), (24, 6));
        assert_eq!(config.candidate_budget, 40);
        assert_eq!(config.selection_pool_size, 3);
        assert_eq!(config.strategy, PlacementStrategy::Fitting);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.should_show_progress());
        assert!(!cli.skip_existing());
    }

    // Tests strategy names map onto placement strategies
    // Verified by mapping fitting to path cut
    #[test]
    fn test_strategy_conversion() {
        assert_eq!(PlacementStrategy::from(StrategyArg::Random), PlacementStrategy::Random);
        assert_eq!(PlacementStrategy::from(StrategyArg::Fitting), PlacementStrategy::Fitting);
        assert_eq!(PlacementStrategy::from(StrategyArg::PathCut), PlacementStrategy::PathCut);
        assert!(Cli::try_parse_from(["quiltcut", "a.png", "--strategy", "blend"]).is_err());
    }

    // Tests output files are written beside the input with a suffix
    // Verified by replacing the extension with the suffix
    #[test]
    fn test_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("textures/brick.png")),
            PathBuf::from("textures/brick_quilt.png")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("moss.png")),
            PathBuf::from("moss_quilt.png")
        );
    }

    // Tests directory targets skip non-PNG files and earlier outputs
    // Verified by collecting every directory entry
    #[test]
    fn test_collect_directory() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("no temp dir: {e}"));
        write_png(&dir.path().join("b.png"));
        write_png(&dir.path().join("a.png"));
        write_png(&dir.path().join("c_quilt.png"));
        std::fs::write(dir.path().join("notes.txt"), "x")
            .unwrap_or_else(|e| unreachable!("fixture not written: {e}"));

        let target = dir.path().to_string_lossy().to_string();
        let processor = FileProcessor::new(parse(&["quiltcut", &target, "-q"]));
        let files = processor.collect_files().unwrap_or_default();

        assert_eq!(
            files,
            vec![dir.path().join("a.png"), dir.path().join("b.png")]
        );
    }

    // Tests inputs with an existing output are skipped unless forced
    // Verified by ignoring the no-skip flag
    #[test]
    fn test_collect_skips_existing_output() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("no temp dir: {e}"));
        let input = dir.path().join("a.png");
        write_png(&input);
        write_png(&dir.path().join("a_quilt.png"));
        let target = input.to_string_lossy().to_string();

        let skipping = FileProcessor::new(parse(&["quiltcut", &target, "-q"]));
        assert_eq!(skipping.collect_files().map(|f| f.len()).ok(), Some(0));

        let forcing = FileProcessor::new(parse(&["quiltcut", &target, "-q", "-n"]));
        assert_eq!(forcing.collect_files().ok(), Some(vec![input]));
    }

    // Tests unusable targets are rejected
    // Verified by returning an empty list for missing targets
    #[test]
    fn test_collect_rejects_bad_target() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("no temp dir: {e}"));
        let text = dir.path().join("notes.txt");
        std::fs::write(&text, "x").unwrap_or_else(|e| unreachable!("fixture not written: {e}"));

        let missing = dir.path().join("missing.png").to_string_lossy().to_string();
        let text = text.to_string_lossy().to_string();

        assert!(FileProcessor::new(parse(&["quiltcut", &missing, "-q"])).collect_files().is_err());
        assert!(FileProcessor::new(parse(&["quiltcut", &text, "-q"])).collect_files().is_err());
    }

    // Tests a full run writes a complete quilt beside the input
    // Verified by saving before the last tile is placed
    #[test]
    fn test_process_writes_output() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| unreachable!("no temp dir: {e}"));
        let input = dir.path().join("stripes.png");
        RgbImage::from_fn(16, 16, |x, _| Rgb([(x * 15) as u8, 0, 0]))
            .save(&input)
            .unwrap_or_else(|e| unreachable!("fixture not written: {e}"));
        let target = input.to_string_lossy().to_string();

        let mut processor = FileProcessor::new(parse(&[
            "quiltcut", &target, "-q", "-w", "30", "-H", "20", "-t", "8", "-o", "2", "-c", "8",
        ]));
        let result = processor.process();

        assert!(result.is_ok());
        let output = image::open(dir.path().join("stripes_quilt.png"))
            .map(|img| img.to_rgb8())
            .unwrap_or_else(|e| unreachable!("output not readable: {e}"));
        assert_eq!(output.dimensions(), (30, 20));
    }
}
