//! Raster processors: apply one [`PixelTransform`] over every pixel.
//!
//! The input raster is never mutated and each output cell is written
//! exactly once, so there is no ordering dependency between pixels.
//! [`process`] is the sequential reference loop; [`process_par`] computes
//! rows in parallel with rayon and produces bit-identical output.

use rayon::prelude::*;
use tracing::debug;

use crate::filter::PixelTransform;
use crate::raster::{Raster, Rgb};

/// Apply `transform` to every pixel of `input`.
///
/// Allocates an output raster of identical dimensions, fills every
/// coordinate with `transform.compute(input, x, y)`, and returns it.
/// No partial results: the caller either gets a complete raster or the
/// defect that interrupted it.
pub fn process(input: &Raster, transform: &PixelTransform) -> Raster {
    let (width, height) = (input.width(), input.height());
    debug!(width, height, filter = transform.name(), "processing raster");

    let mut output = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            output.set(x, y, transform.compute(input, x, y));
        }
    }
    output
}

/// Row-parallel variant of [`process`].
///
/// Safe to parallelize because the input is read-only and every output
/// cell has a single writer; each worker handles disjoint rows.
pub fn process_par(input: &Raster, transform: &PixelTransform) -> Raster {
    let (width, height) = (input.width(), input.height());
    debug!(
        width,
        height,
        filter = transform.name(),
        "processing raster (parallel)"
    );

    let rows: Vec<Vec<Rgb>> = (0..height)
        .into_par_iter()
        .map(|y| (0..width).map(|x| transform.compute(input, x, y)).collect())
        .collect();

    let mut output = Raster::new(width, height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, color) in row.into_iter().enumerate() {
            output.set(x, y, color);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> Raster {
        Raster::from_fn(width, height, |x, y| {
            Rgb::new(
                (x * 41 % 256) as u8,
                (y * 59 % 256) as u8,
                ((x + y) * 23 % 256) as u8,
            )
        })
    }

    #[test]
    fn test_output_dimensions_match_input() {
        let input = gradient(7, 5);
        let output = process(&input, &PixelTransform::grayscale());
        assert_eq!(output.width(), 7);
        assert_eq!(output.height(), 5);
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let input = gradient(8, 6);
        let invert = PixelTransform::invert();
        let back = process(&process(&input, &invert), &invert);
        assert_eq!(back, input);
    }

    #[test]
    fn test_blur_radius_zero_is_identity() {
        let input = gradient(5, 4);
        assert_eq!(process(&input, &PixelTransform::blur(0)), input);
    }

    #[test]
    fn test_sobel_on_uniform_raster_is_black() {
        let input = Raster::filled(3, 3, Rgb::new(100, 100, 100));
        let output = process(&input, &PixelTransform::sobel());
        assert_eq!(output, Raster::filled(3, 3, Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_sepia_and_contrast_stay_in_range_on_extremes() {
        // u8 storage already bounds the channels; the interesting part is
        // that extreme inputs do not panic or wrap on the way there.
        for color in [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)] {
            let input = Raster::filled(4, 4, color);
            let _ = process(&input, &PixelTransform::sepia());
            let _ = process(&input, &PixelTransform::contrast());
        }
    }

    #[test]
    fn test_single_pixel_raster_all_filters() {
        let input = Raster::filled(1, 1, Rgb::new(10, 20, 30));
        let filters = [
            PixelTransform::invert(),
            PixelTransform::grayscale(),
            PixelTransform::sepia(),
            PixelTransform::contrast(),
            PixelTransform::blur(1),
            PixelTransform::gaussian(1, 3.0).unwrap(),
            PixelTransform::sobel(),
            PixelTransform::sharpen(),
        ];
        for filter in &filters {
            let output = process(&input, filter);
            assert_eq!(output.width(), 1);
            assert_eq!(output.height(), 1);
        }
    }

    #[test]
    fn test_empty_raster() {
        let input = Raster::new(0, 0);
        let output = process(&input, &PixelTransform::invert());
        assert!(output.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let input = gradient(16, 11);
        let filters = [
            PixelTransform::invert(),
            PixelTransform::grayscale(),
            PixelTransform::sepia(),
            PixelTransform::contrast(),
            PixelTransform::blur(2),
            PixelTransform::gaussian(2, 1.5).unwrap(),
            PixelTransform::sobel(),
            PixelTransform::sharpen(),
        ];
        for filter in &filters {
            assert_eq!(
                process(&input, filter),
                process_par(&input, filter),
                "{}",
                filter.name()
            );
        }
    }
}
