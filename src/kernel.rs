//! Convolution kernels and their factories.
//!
//! A [`Kernel`] is an immutable square weight matrix of odd side length
//! `2 * radius + 1`, addressed by signed offsets from the center. The
//! factories build the specific kernels the filter presets use: box blur,
//! gaussian blur, the two sobel gradient kernels, and the sharpening
//! kernel.

use thiserror::Error;

/// Kernel construction errors.
#[derive(Debug, Error, PartialEq)]
pub enum KernelError {
    /// Gaussian sigma must be positive and finite; a zero sigma would
    /// divide by zero during normalization and yield NaN weights.
    #[error("gaussian sigma must be positive and finite, got {0}")]
    InvalidSigma(f32),
}

/// Square weight matrix of side length `2 * radius + 1`.
///
/// Weights are stored flat in row-major order; entry `(dy, dx)` with
/// `dy, dx` in `[-radius, +radius]` lives at
/// `(dy + radius) * size + (dx + radius)`. The buffer length always
/// equals `size * size` by construction, and `Clone` copies the buffer,
/// so kernels never share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    radius: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a zero-filled kernel with the given radius.
    pub fn new(radius: usize) -> Self {
        let size = 2 * radius + 1;
        Kernel {
            radius,
            weights: vec![0.0; size * size],
        }
    }

    /// Kernel side length, `2 * radius + 1`.
    pub fn size(&self) -> usize {
        2 * self.radius + 1
    }

    /// Half-width the kernel was built with.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Weight at offset `(dy, dx)` from the center.
    ///
    /// # Panics
    /// If either offset lies outside `[-radius, +radius]`. Indexing past
    /// the declared radius is a programming defect, not a runtime
    /// condition.
    pub fn get(&self, dy: isize, dx: isize) -> f32 {
        self.weights[self.index(dy, dx)]
    }

    /// Set the weight at offset `(dy, dx)` from the center.
    ///
    /// # Panics
    /// If either offset lies outside `[-radius, +radius]`.
    pub fn set(&mut self, dy: isize, dx: isize, value: f32) {
        let idx = self.index(dy, dx);
        self.weights[idx] = value;
    }

    /// Flat row-major view of the weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    fn index(&self, dy: isize, dx: isize) -> usize {
        let r = self.radius as isize;
        assert!(
            dy >= -r && dy <= r && dx >= -r && dx <= r,
            "kernel offset ({dy}, {dx}) outside radius {r}"
        );
        ((dy + r) * (2 * r + 1) + (dx + r)) as usize
    }

    fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        let mut kernel = Kernel::new(1);
        for (dy, row) in (-1..=1).zip(rows) {
            for (dx, w) in (-1..=1).zip(row) {
                kernel.set(dy, dx, w);
            }
        }
        kernel
    }

    // ========================================================================
    // Factories
    // ========================================================================

    /// Uniform averaging kernel: every weight is `1 / size²`.
    ///
    /// Radius 0 yields the single weight 1.0, the identity kernel.
    pub fn box_blur(radius: usize) -> Self {
        let mut kernel = Kernel::new(radius);
        let len = kernel.weights.len();
        kernel.weights.fill(1.0 / len as f32);
        kernel
    }

    /// Gaussian kernel: weight `exp(-(dx² + dy²) / sigma²)`, normalized
    /// so the weights sum to 1.
    ///
    /// Normalization runs as a second pass over the filled kernel,
    /// dividing by the accumulated sum.
    pub fn gaussian(radius: usize, sigma: f32) -> Result<Self, KernelError> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(KernelError::InvalidSigma(sigma));
        }

        let mut kernel = Kernel::new(radius);
        let r = radius as isize;
        let mut norm = 0.0f32;

        for dy in -r..=r {
            for dx in -r..=r {
                let w = (-((dx * dx + dy * dy) as f32) / (sigma * sigma)).exp();
                kernel.set(dy, dx, w);
                norm += w;
            }
        }
        for w in kernel.weights.iter_mut() {
            *w /= norm;
        }

        Ok(kernel)
    }

    /// Sobel horizontal-gradient kernel (3x3).
    pub fn sobel_x() -> Self {
        Kernel::from_rows([
            [-1.0, 0.0, 1.0],
            [-2.0, 0.0, 2.0],
            [-1.0, 0.0, 1.0],
        ])
    }

    /// Sobel vertical-gradient kernel (3x3).
    pub fn sobel_y() -> Self {
        Kernel::from_rows([
            [-1.0, -2.0, -1.0],
            [0.0, 0.0, 0.0],
            [1.0, 2.0, 1.0],
        ])
    }

    /// Sharpening kernel (3x3). Weights sum to 1, so flat regions pass
    /// through unchanged.
    pub fn sharpen() -> Self {
        Kernel::from_rows([
            [0.0, -1.0, 0.0],
            [-1.0, 5.0, -1.0],
            [0.0, -1.0, 0.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let kernel = Kernel::new(2);
        assert_eq!(kernel.size(), 5);
        assert_eq!(kernel.weights().len(), 25);
        assert!(kernel.weights().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_get_set_offsets() {
        let mut kernel = Kernel::new(1);
        kernel.set(-1, -1, 3.0);
        kernel.set(0, 0, 5.0);
        kernel.set(1, 1, 7.0);

        assert_eq!(kernel.get(-1, -1), 3.0);
        assert_eq!(kernel.get(0, 0), 5.0);
        assert_eq!(kernel.get(1, 1), 7.0);
        // Row-major flat layout: (dy + r) * size + (dx + r)
        assert_eq!(kernel.weights()[0], 3.0);
        assert_eq!(kernel.weights()[4], 5.0);
        assert_eq!(kernel.weights()[8], 7.0);
    }

    #[test]
    #[should_panic(expected = "outside radius")]
    fn test_get_out_of_range_panics() {
        Kernel::new(1).get(2, 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Kernel::new(1);
        a.set(0, 0, 1.0);
        let b = a.clone();
        a.set(0, 0, 9.0);

        assert_eq!(b.get(0, 0), 1.0);
    }

    #[test]
    fn test_box_blur_weights() {
        let kernel = Kernel::box_blur(1);
        assert!(kernel.weights().iter().all(|&w| (w - 1.0 / 9.0).abs() < 1e-6));
    }

    #[test]
    fn test_box_blur_radius_zero_is_identity() {
        let kernel = Kernel::box_blur(0);
        assert_eq!(kernel.weights(), &[1.0]);
    }

    #[test]
    fn test_gaussian_sums_to_one() {
        for (radius, sigma) in [(1, 3.0), (2, 3.0), (3, 1.5), (5, 0.8)] {
            let kernel = Kernel::gaussian(radius, sigma).unwrap();
            let sum: f32 = kernel.weights().iter().sum();
            assert!(
                (sum - 1.0).abs() < 1e-5,
                "radius {radius} sigma {sigma}: sum {sum}"
            );
        }
    }

    #[test]
    fn test_gaussian_center_is_largest() {
        let kernel = Kernel::gaussian(2, 1.0).unwrap();
        let center = kernel.get(0, 0);
        assert!(kernel.weights().iter().all(|&w| w <= center));
    }

    #[test]
    fn test_gaussian_rejects_bad_sigma() {
        assert_eq!(Kernel::gaussian(1, 0.0), Err(KernelError::InvalidSigma(0.0)));
        assert_eq!(Kernel::gaussian(1, -2.0), Err(KernelError::InvalidSigma(-2.0)));
        assert!(Kernel::gaussian(1, f32::NAN).is_err());
        assert!(Kernel::gaussian(1, f32::INFINITY).is_err());
    }

    #[test]
    fn test_sobel_kernels() {
        let x = Kernel::sobel_x();
        let y = Kernel::sobel_y();
        assert_eq!(
            x.weights(),
            &[-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0]
        );
        assert_eq!(
            y.weights(),
            &[-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0]
        );
    }

    #[test]
    fn test_sharpen_kernel_sums_to_one() {
        let kernel = Kernel::sharpen();
        assert_eq!(
            kernel.weights(),
            &[0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0]
        );
        let sum: f32 = kernel.weights().iter().sum();
        assert_eq!(sum, 1.0);
    }
}
