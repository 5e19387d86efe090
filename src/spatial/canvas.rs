//! Pixel buffer access for the exemplar and the output canvas
//!
//! The quilting core only ever reads and writes single RGB pixels addressed by
//! `(x, y)`. These traits are the narrow seam between the algorithm and the
//! `image` crate's buffers.

use image::{Rgb, RgbImage};
use ndarray::Array2;

/// Three-channel color with 8-bit precision per channel
pub type Color = Rgb<u8>;

/// Color written to unpainted canvas pixels
pub const PLACEHOLDER_COLOR: Color = Rgb([0, 0, 0]);

/// Read-only access to a 2D RGB pixel grid
pub trait PixelBuffer {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Color at `(x, y)`, or `None` outside the buffer
    fn get(&self, x: usize, y: usize) -> Option<Color>;
}

/// Read/write access to a 2D RGB pixel grid
pub trait PixelBufferMut: PixelBuffer {
    /// Write `color` at `(x, y)`
    ///
    /// Returns `false` and leaves the buffer untouched outside its bounds.
    fn set(&mut self, x: usize, y: usize, color: Color) -> bool;
}

impl PixelBuffer for RgbImage {
    fn width(&self) -> usize {
        Self::width(self) as usize
    }

    fn height(&self) -> usize {
        Self::height(self) as usize
    }

    fn get(&self, x: usize, y: usize) -> Option<Color> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get_pixel_checked(x, y).copied()
    }
}

impl PixelBufferMut for RgbImage {
    fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        self.get_pixel_mut_checked(x, y)
            .map(|pixel| *pixel = color)
            .is_some()
    }
}

/// Output canvas that remembers which pixels have been painted
///
/// Starts filled with [`PLACEHOLDER_COLOR`]. The painted mask is indexed
/// `[row, col]` like the rest of the crate's `ndarray` grids.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
    painted: Array2<bool>,
}

impl Canvas {
    /// Create an unpainted canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            image: RgbImage::from_pixel(width as u32, height as u32, PLACEHOLDER_COLOR),
            painted: Array2::from_elem((height, width), false),
        }
    }

    /// Whether `(x, y)` has received a color from any tile
    pub fn is_painted(&self, x: usize, y: usize) -> bool {
        self.painted.get((y, x)).copied().unwrap_or(false)
    }

    /// Number of pixels that have not been painted yet
    pub fn unpainted_count(&self) -> usize {
        self.painted.iter().filter(|&&painted| !painted).count()
    }

    /// Whether every pixel has been painted
    pub fn is_complete(&self) -> bool {
        self.painted.iter().all(|&painted| painted)
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas and return its image
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl PixelBuffer for Canvas {
    fn width(&self) -> usize {
        self.image.width() as usize
    }

    fn height(&self) -> usize {
        self.image.height() as usize
    }

    fn get(&self, x: usize, y: usize) -> Option<Color> {
        PixelBuffer::get(&self.image, x, y)
    }
}

impl PixelBufferMut for Canvas {
    fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        if !self.image.set(x, y, color) {
            return false;
        }
        if let Some(flag) = self.painted.get_mut((y, x)) {
            *flag = true;
        }
        true
    }
}
