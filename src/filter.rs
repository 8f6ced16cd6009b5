//! Filter variants and their per-pixel semantics.
//!
//! Every filter is a value of the [`PixelTransform`] enum: the per-pixel
//! kinds (Invert, GrayScale, Sepia, Contrast) carry at most a scalar
//! parameter, while the neighborhood kinds (Matrix, Sobel) own the
//! [`Kernel`]s they convolve with. A single `match` in
//! [`PixelTransform::compute`] dispatches them all; no filter carries
//! mutable state across pixels.
//!
//! ## Channel arithmetic
//!
//! Intermediate sums run in f32 and are saturated into `[0, 255]` with
//! round-to-nearest before u8 storage (see [`crate::clamp::to_channel`]).
//! The same convention applies to every variant, so results are
//! reproducible across filters.

use crate::clamp::{clamp, to_channel};
use crate::kernel::{Kernel, KernelError};
use crate::raster::{Raster, Rgb};

/// Luma weights for grayscale intensity (ITU-R BT.601).
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Default sepia tint strength.
const SEPIA_K: f32 = 21.0;
/// Default contrast (brightness shift) offset.
const CONTRAST_K: i32 = 69;

/// Weighted grayscale intensity of a pixel.
fn luma(color: Rgb) -> f32 {
    LUMA_R * color.r as f32 + LUMA_G * color.g as f32 + LUMA_B * color.b as f32
}

/// A filter, bound to its kernels and parameters at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelTransform {
    /// Channel-wise negation: `255 - c`.
    Invert,
    /// Luma of the source pixel on all three channels.
    GrayScale,
    /// Warm tint around the source luma: `R = luma + 2k`,
    /// `G = luma + k/2`, `B = luma - k`.
    Sepia { k: f32 },
    /// Flat additive shift `c + k` on every channel. Kept as the literal
    /// (historically mislabeled) behavior: a brightness offset, not a
    /// midpoint contrast stretch.
    Contrast { k: i32 },
    /// Kernel convolution with edge-replicated sampling.
    Matrix { kernel: Kernel },
    /// Gradient magnitude from a horizontal and a vertical kernel:
    /// `sqrt(gx² + gy²)` per channel.
    Sobel { kernel_x: Kernel, kernel_y: Kernel },
}

impl PixelTransform {
    // ========================================================================
    // Presets
    // ========================================================================

    pub fn invert() -> Self {
        PixelTransform::Invert
    }

    pub fn grayscale() -> Self {
        PixelTransform::GrayScale
    }

    pub fn sepia() -> Self {
        PixelTransform::Sepia { k: SEPIA_K }
    }

    pub fn contrast() -> Self {
        PixelTransform::Contrast { k: CONTRAST_K }
    }

    /// Box blur over a `(2·radius+1)²` neighborhood. Radius 0 is the
    /// identity.
    pub fn blur(radius: usize) -> Self {
        PixelTransform::Matrix {
            kernel: Kernel::box_blur(radius),
        }
    }

    /// Gaussian blur. Fails for non-positive or non-finite sigma.
    pub fn gaussian(radius: usize, sigma: f32) -> Result<Self, KernelError> {
        Ok(PixelTransform::Matrix {
            kernel: Kernel::gaussian(radius, sigma)?,
        })
    }

    pub fn sobel() -> Self {
        PixelTransform::Sobel {
            kernel_x: Kernel::sobel_x(),
            kernel_y: Kernel::sobel_y(),
        }
    }

    pub fn sharpen() -> Self {
        PixelTransform::Matrix {
            kernel: Kernel::sharpen(),
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Compute the output color for coordinate `(x, y)` of `raster`.
    ///
    /// Pure: reads only the immutable input raster and the parameters
    /// bound at construction.
    pub fn compute(&self, raster: &Raster, x: usize, y: usize) -> Rgb {
        match self {
            PixelTransform::Invert => {
                let c = raster.get(x, y);
                Rgb::new(255 - c.r, 255 - c.g, 255 - c.b)
            }
            PixelTransform::GrayScale => {
                let gray = to_channel(luma(raster.get(x, y)));
                Rgb::new(gray, gray, gray)
            }
            PixelTransform::Sepia { k } => {
                // Luma is computed once from the source pixel and shared
                // by all three channel offsets.
                let l = luma(raster.get(x, y));
                Rgb::new(
                    to_channel(l + 2.0 * k),
                    to_channel(l + 0.5 * k),
                    to_channel(l - k),
                )
            }
            PixelTransform::Contrast { k } => {
                let c = raster.get(x, y);
                Rgb::new(
                    clamp(c.r as i32 + k, 0, 255) as u8,
                    clamp(c.g as i32 + k, 0, 255) as u8,
                    clamp(c.b as i32 + k, 0, 255) as u8,
                )
            }
            PixelTransform::Matrix { kernel } => {
                let [r, g, b] = convolve(raster, kernel, x, y);
                Rgb::new(to_channel(r), to_channel(g), to_channel(b))
            }
            PixelTransform::Sobel { kernel_x, kernel_y } => {
                let [rx, gx, bx] = convolve(raster, kernel_x, x, y);
                let [ry, gy, by] = convolve(raster, kernel_y, x, y);
                Rgb::new(
                    to_channel(rx.hypot(ry)),
                    to_channel(gx.hypot(gy)),
                    to_channel(bx.hypot(by)),
                )
            }
        }
    }

    /// Variant kind name, for logs and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            PixelTransform::Invert => "Invert",
            PixelTransform::GrayScale => "GrayScale",
            PixelTransform::Sepia { .. } => "Sepia",
            PixelTransform::Contrast { .. } => "Contrast",
            PixelTransform::Matrix { .. } => "Matrix",
            PixelTransform::Sobel { .. } => "Sobel",
        }
    }
}

/// Raw per-channel kernel sums at `(x, y)`, before saturation.
///
/// Every neighbor is sampled with edge replication, so the convolution is
/// defined for all coordinates of a non-empty raster, including a 1×1 one.
fn convolve(raster: &Raster, kernel: &Kernel, x: usize, y: usize) -> [f32; 3] {
    let r = kernel.radius() as isize;
    let mut sums = [0.0f32; 3];

    for dy in -r..=r {
        for dx in -r..=r {
            let w = kernel.get(dy, dx);
            let c = raster.get_clamped(x as isize + dx, y as isize + dy);
            sums[0] += c.r as f32 * w;
            sums[1] += c.g as f32 * w;
            sums[2] += c.b as f32 * w;
        }
    }

    sums
}
