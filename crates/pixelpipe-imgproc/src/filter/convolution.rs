use pixelpipe_image::{ImageError, Pixel, PixelBuffer};

use super::kernels::Kernel;
use crate::core::saturate_u8;

/// Convolve `src` with a square kernel, writing the result into `dst`.
///
/// Every interior pixel is replaced by
/// `saturate(original * (1 - amount) + weighted_sum * amount)` computed per color
/// channel. Pixels closer than `kernel.radius()` to any edge are copied from `src`
/// unchanged, and alpha is always carried through from `src`.
///
/// # Arguments
///
/// * `src` - The source buffer.
/// * `dst` - The destination buffer, overwritten entirely.
/// * `kernel` - The convolution kernel.
/// * `amount` - Blend factor between the original (0.0) and the filtered (1.0) pixel.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn convolve(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    kernel: &Kernel,
    amount: f64,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    // seed with the source so the untouched border survives
    dst.as_slice_mut().copy_from_slice(src.as_slice());

    let (width, height) = (src.width(), src.height());
    let offset = kernel.radius();
    let ksize = kernel.size();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in offset..height.saturating_sub(offset) {
        for x in offset..width.saturating_sub(offset) {
            let mut sum = [0.0f64; 3];
            for (ky, weights) in kernel.weights().chunks_exact(ksize).enumerate() {
                let row = (y - offset + ky) * width;
                for (kx, &w) in weights.iter().enumerate() {
                    let p = src_data[row + x - offset + kx];
                    sum[0] += p.r as f64 * w;
                    sum[1] += p.g as f64 * w;
                    sum[2] += p.b as f64 * w;
                }
            }

            let original = src_data[y * width + x];
            let blend = |c: u8, s: f64| saturate_u8(c as f64 * (1.0 - amount) + s * amount);
            dst_data[y * width + x] = Pixel::new(
                blend(original.r, sum[0]),
                blend(original.g, sum[1]),
                blend(original.b, sum[2]),
                original.a,
            );
        }
    }

    Ok(())
}

/// Convolve a buffer in place.
///
/// The result is computed into a freshly allocated grid which then replaces the
/// buffer, so the filter never reads pixels it has already written.
pub fn apply_kernel(
    buffer: &mut PixelBuffer,
    kernel: &Kernel,
    amount: f64,
) -> Result<(), ImageError> {
    let mut result = PixelBuffer::from_size_val(buffer.size(), Pixel::default());
    convolve(buffer, &mut result, kernel, amount)?;
    *buffer = result;
    Ok(())
}
