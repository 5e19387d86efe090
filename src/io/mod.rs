/// Command-line interface and batch file processing
pub mod cli;
/// Synthesis constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Exemplar loading and canvas export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
