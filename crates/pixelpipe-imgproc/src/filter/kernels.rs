use pixelpipe_image::ImageError;

/// A square convolution kernel of side `2k + 1` with row-major weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from its side length and row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelSize`] if `size` is even or the number of
    /// weights is not `size * size`.
    pub fn new(size: usize, weights: Vec<f64>) -> Result<Self, ImageError> {
        if size % 2 == 0 || weights.len() != size * size {
            return Err(ImageError::InvalidKernelSize(weights.len(), size));
        }
        Ok(Self { size, weights })
    }

    /// Create a kernel from a fixed-size matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use pixelpipe_imgproc::filter::kernels::Kernel;
    ///
    /// let kernel = Kernel::from_rows([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]).unwrap();
    /// assert_eq!(kernel.radius(), 1);
    /// assert_eq!(kernel.get(1, 1), 1.0);
    /// ```
    pub fn from_rows<const N: usize>(rows: [[f64; N]; N]) -> Result<Self, ImageError> {
        Self::new(N, rows.iter().flatten().copied().collect())
    }

    /// Side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from the center cell to the kernel edge.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Weight at column `kx`, row `ky`.
    pub fn get(&self, kx: usize, ky: usize) -> f64 {
        self.weights[ky * self.size + kx]
    }

    /// The weights in row-major order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// The 3x3 sharpening kernel.
pub fn sharpen_kernel() -> Kernel {
    Kernel {
        size: 3,
        weights: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
    }
}

/// The 3x3 laplacian-style edge detection kernel.
pub fn edge_detection_kernel() -> Kernel {
    Kernel {
        size: 3,
        weights: vec![-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0],
    }
}

/// Create a normalized 2d gaussian kernel of side `2 * radius + 1`.
///
/// The weight at offset `(dx, dy)` from the center is
/// `exp(-(dx² + dy²) / (2σ²))` with `σ = radius / 2`, then every weight is divided
/// by the total so the kernel sums to one.
///
/// # Returns
///
/// `None` for a zero radius, or when the kernel side or cell count does not fit
/// in `usize`.
pub fn gaussian_kernel(radius: usize) -> Option<Kernel> {
    if radius == 0 {
        return None;
    }

    let size = radius.checked_mul(2)?.checked_add(1)?;
    let cells = size.checked_mul(size)?;
    let r = i64::try_from(radius).ok()?;
    let sigma = radius as f64 / 2.0;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut weights = Vec::with_capacity(cells);
    for dy in -r..=r {
        for dx in -r..=r {
            let d2 = (dx * dx + dy * dy) as f64;
            weights.push((-d2 / two_sigma_sq).exp());
        }
    }

    // normalize the kernel
    let norm = weights.iter().sum::<f64>();
    weights.iter_mut().for_each(|w| *w /= norm);

    Some(Kernel { size, weights })
}
