//! Exemplar loading and PNG export of finished canvases

use crate::io::error::{QuiltError, Result, computation_error};
use crate::spatial::Canvas;
use image::RgbImage;
use std::path::Path;

/// Load an exemplar image as 8-bit RGB
///
/// Alpha is dropped and other pixel formats are converted.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded.
pub fn load_exemplar<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| QuiltError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Save a fully painted canvas to `output_path`
///
/// The image format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - Some canvas pixels were never painted
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_canvas<P: AsRef<Path>>(canvas: &Canvas, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    let unpainted = canvas.unpainted_count();
    if unpainted > 0 {
        return Err(computation_error(
            "canvas export",
            &format!("{unpainted} pixels were never painted"),
        ));
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| QuiltError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .image()
        .save(output_path)
        .map_err(|e| QuiltError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
