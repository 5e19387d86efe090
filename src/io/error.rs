//! Error types for configuration validation, synthesis and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all quilting operations
#[derive(Debug)]
pub enum QuiltError {
    /// Failed to load the exemplar image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A synthesis parameter is out of range or inconsistent with another
    ///
    /// Raised once, before any tile is placed. Nothing is written to the
    /// output canvas when validation fails.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The exemplar cannot hold a single tile, so no source origin exists
    ExemplarTooSmall {
        /// Exemplar width in pixels
        exemplar_width: usize,
        /// Exemplar height in pixels
        exemplar_height: usize,
        /// Requested tile edge length in pixels
        tile_size: usize,
    },

    /// Failed to save the synthesized image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal computation produced an unusable result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for QuiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ExemplarTooSmall {
                exemplar_width,
                exemplar_height,
                tile_size,
            } => {
                write!(
                    f,
                    "Exemplar {exemplar_width}x{exemplar_height} is too small for {tile_size}px tiles"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for QuiltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for quilting results
pub type Result<T> = std::result::Result<T, QuiltError>;

impl From<std::io::Error> for QuiltError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl QuiltError {
    /// Whether this error stems from invalid synthesis parameters
    ///
    /// Configuration errors are detected before any work starts.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::ExemplarTooSmall { .. }
        )
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuiltError {
    QuiltError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> QuiltError {
    QuiltError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable input or output path
pub fn invalid_path(msg: &str) -> QuiltError {
    QuiltError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}
