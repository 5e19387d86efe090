//! Tests for pixel buffer access and painted-pixel tracking

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use quiltcut::spatial::canvas::PLACEHOLDER_COLOR;
    use quiltcut::spatial::{Canvas, PixelBuffer, PixelBufferMut};

    // Tests a new canvas is unpainted placeholder color
    // Verified by marking pixels painted on construction
    #[test]
    fn test_new_canvas_unpainted() {
        let canvas = Canvas::new(4, 3);

        assert_eq!(PixelBuffer::width(&canvas), 4);
        assert_eq!(PixelBuffer::height(&canvas), 3);
        assert_eq!(canvas.unpainted_count(), 12);
        assert!(!canvas.is_complete());
        assert_eq!(canvas.get(3, 2), Some(PLACEHOLDER_COLOR));
    }

    // Tests writes mark pixels painted and store color
    // Verified by transposing the painted mask index
    #[test]
    fn test_set_marks_painted() {
        let mut canvas = Canvas::new(4, 3);

        assert!(canvas.set(3, 1, Rgb([1, 2, 3])));
        assert!(canvas.is_painted(3, 1));
        assert!(!canvas.is_painted(1, 3));
        assert_eq!(canvas.get(3, 1), Some(Rgb([1, 2, 3])));
        assert_eq!(canvas.unpainted_count(), 11);
    }

    // Tests out-of-bounds access is rejected without panicking
    // Verified by removing the bounds checks
    #[test]
    fn test_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2);

        assert!(!canvas.set(2, 0, Rgb([9, 9, 9])));
        assert_eq!(canvas.get(0, 2), None);
        assert!(!canvas.is_painted(5, 5));
        assert_eq!(canvas.unpainted_count(), 4);
    }

    // Tests a fully painted canvas reports completion
    // Verified by counting painted instead of unpainted pixels
    #[test]
    fn test_complete_canvas() {
        let mut canvas = Canvas::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                canvas.set(x, y, Rgb([7, 7, 7]));
            }
        }

        assert!(canvas.is_complete());
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(2, 1), &Rgb([7, 7, 7]));
    }

    // Tests the RgbImage accessor implementation
    // Verified by swapping x and y in the accessor
    #[test]
    fn test_rgb_image_accessor() {
        let mut image = RgbImage::from_fn(5, 2, |x, y| Rgb([x as u8, y as u8, 0]));

        assert_eq!(PixelBuffer::width(&image), 5);
        assert_eq!(PixelBuffer::height(&image), 2);
        assert_eq!(PixelBuffer::get(&image, 4, 1), Some(Rgb([4, 1, 0])));
        assert_eq!(PixelBuffer::get(&image, 1, 4), None);
        assert!(PixelBufferMut::set(&mut image, 0, 0, Rgb([50, 50, 50])));
        assert!(!PixelBufferMut::set(&mut image, 5, 0, Rgb([50, 50, 50])));
        assert_eq!(image.get_pixel(0, 0), &Rgb([50, 50, 50]));
    }
}
