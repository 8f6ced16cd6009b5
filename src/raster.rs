//! RGB color and raster types.
//!
//! A [`Raster`] is a width × height grid of [`Rgb`] pixels backed by an
//! `ndarray` array of shape `(height, width, 3)`. The filter engine never
//! mutates an input raster; processors allocate a fresh output of the
//! same shape and write each cell exactly once.

use ndarray::Array3;

use crate::clamp::clamp;

/// One pixel: three independent 8-bit channels, no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Owned 2D grid of [`Rgb`] pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Allocate a black raster of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Raster {
            data: Array3::zeros((height, width, 3)),
        }
    }

    /// Build a raster by evaluating `f` at every coordinate.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut raster = Raster::new(width, height);
        for y in 0..height {
            for x in 0..width {
                raster.set(x, y, f(x, y));
            }
        }
        raster
    }

    /// Fill a raster of the given dimensions with one color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Raster::from_fn(width, height, |_, _| color)
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// True if the raster has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Pixel at `(x, y)`. Panics if the coordinate is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        Rgb {
            r: self.data[[y, x, 0]],
            g: self.data[[y, x, 1]],
            b: self.data[[y, x, 2]],
        }
    }

    /// Store `color` at `(x, y)`. Panics if the coordinate is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.data[[y, x, 0]] = color.r;
        self.data[[y, x, 1]] = color.g;
        self.data[[y, x, 2]] = color.b;
    }

    /// Pixel at `(x, y)` with each coordinate independently clamped into
    /// bounds (edge replication).
    ///
    /// This is the boundary rule every kernel-driven filter uses for
    /// neighbor sampling: an off-raster offset reads the nearest edge
    /// pixel, never zero and never a wrapped pixel.
    pub fn get_clamped(&self, x: isize, y: isize) -> Rgb {
        let cx = clamp(x, 0, self.width() as isize - 1) as usize;
        let cy = clamp(y, 0, self.height() as isize - 1) as usize;
        self.get(cx, cy)
    }

    /// The underlying `(height, width, 3)` channel array.
    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }
}
