//! rasterfx: per-pixel and convolution filters for RGB rasters.
//!
//! The engine applies one [`PixelTransform`] uniformly over a 2D raster
//! and returns a new raster of identical dimensions. The input is never
//! mutated, so pixel order does not matter and a row-parallel processor
//! ([`process_par`]) is available alongside the sequential one.
//!
//! ## Filters
//!
//! - **Per-pixel**: Invert, GrayScale, Sepia, Contrast (a literal
//!   brightness shift, kept for compatibility)
//! - **Kernel-driven**: box Blur, Gaussian blur, Sobel gradient
//!   magnitude, Sharpen
//!
//! Kernel filters sample out-of-bounds neighbors with edge replication:
//! each coordinate is clamped independently into the raster bounds.
//!
//! ## Example
//!
//! ```
//! use rasterfx::{process, PixelTransform, Raster, Rgb};
//!
//! let input = Raster::filled(2, 2, Rgb::new(10, 20, 30));
//! let output = process(&input, &PixelTransform::invert());
//! assert_eq!(output.get(0, 0), Rgb::new(245, 235, 225));
//! ```
//!
//! Channel arithmetic runs in f32 and saturates into `[0, 255]` with
//! round-to-nearest before storage, identically in every filter.

pub mod clamp;
pub mod filter;
pub mod kernel;
pub mod process;
pub mod raster;

pub use crate::filter::PixelTransform;
pub use crate::kernel::{Kernel, KernelError};
pub use crate::process::{process, process_par};
pub use crate::raster::{Raster, Rgb};
