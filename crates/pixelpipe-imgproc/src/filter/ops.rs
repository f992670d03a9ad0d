use pixelpipe_image::{ImageError, PixelBuffer};

use super::{apply_kernel, kernels};
use crate::color;

/// Sharpen a buffer with the 3x3 sharpening kernel.
///
/// # Arguments
///
/// * `buffer` - The buffer to filter in place.
/// * `amount` - Blend strength, documented range `[0.0, 1.0]`.
pub fn sharpen(buffer: &mut PixelBuffer, amount: f64) -> Result<(), ImageError> {
    apply_kernel(buffer, &kernels::sharpen_kernel(), amount)
}

/// Highlight edges: desaturate, then apply the 3x3 edge kernel at full strength.
pub fn detect_edges(buffer: &mut PixelBuffer) -> Result<(), ImageError> {
    color::grayscale(buffer);
    apply_kernel(buffer, &kernels::edge_detection_kernel(), 1.0)
}

/// Blur a buffer using a gaussian kernel of side `2 * radius + 1`.
///
/// A radius of zero or below leaves the buffer untouched, and so does a radius
/// with no interior pixel left, `2 * radius >= min(width, height)`. The kernel is
/// only built once it is known to fit.
pub fn gaussian_blur(buffer: &mut PixelBuffer, radius: i32) -> Result<(), ImageError> {
    let Ok(radius) = usize::try_from(radius) else {
        return Ok(());
    };
    let fits = radius
        .checked_mul(2)
        .is_some_and(|span| span < buffer.width().min(buffer.height()));
    if !fits {
        return Ok(());
    }
    let Some(kernel) = kernels::gaussian_kernel(radius) else {
        return Ok(());
    };
    apply_kernel(buffer, &kernel, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpipe_image::Pixel;

    fn checkerboard(width: usize, height: usize) -> PixelBuffer {
        let data = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                if (x + y) % 2 == 0 {
                    Pixel::from_rgb(240, 240, 240)
                } else {
                    Pixel::from_rgb(16, 16, 16)
                }
            })
            .collect();
        PixelBuffer::new([width, height].into(), data).unwrap()
    }

    #[test]
    fn blur_non_positive_radius_is_noop() -> Result<(), ImageError> {
        let src = checkerboard(6, 6);
        for radius in [0, -1, -10] {
            let mut dst = src.clone();
            gaussian_blur(&mut dst, radius)?;
            assert_eq!(dst, src);
        }
        Ok(())
    }

    #[test]
    fn blur_radius_larger_than_image_is_noop() -> Result<(), ImageError> {
        let src = checkerboard(4, 4);
        for radius in [2, 3, 100_000, i32::MAX] {
            let mut dst = src.clone();
            gaussian_blur(&mut dst, radius)?;
            assert_eq!(dst, src, "radius {radius}");
        }

        // one interior pixel is enough to run the kernel
        let src = checkerboard(5, 5);
        let mut dst = src.clone();
        gaussian_blur(&mut dst, 2)?;
        assert_ne!(dst.get(2, 2), src.get(2, 2));
        Ok(())
    }

    #[test]
    fn blur_flat_image_is_stable() -> Result<(), ImageError> {
        let src = PixelBuffer::from_size_val([8, 8].into(), Pixel::from_rgb(100, 100, 100));
        let mut dst = src.clone();
        gaussian_blur(&mut dst, 2)?;
        // weights sum to one, so a flat field only loses float dust
        for p in dst.as_slice() {
            for c in p.rgb() {
                assert!((99..=100).contains(&c));
            }
        }
        Ok(())
    }

    #[test]
    fn blur_smooths_checkerboard() -> Result<(), ImageError> {
        let src = checkerboard(7, 7);
        let mut dst = src.clone();
        gaussian_blur(&mut dst, 1)?;
        let center = dst.get(3, 3);
        assert!(center.r < 240 && center.r > 16);
        Ok(())
    }

    #[test]
    fn sharpen_zero_amount_is_noop() -> Result<(), ImageError> {
        let src = checkerboard(5, 5);
        let mut dst = src.clone();
        sharpen(&mut dst, 0.0)?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn edges_of_flat_image_are_black() -> Result<(), ImageError> {
        let src = PixelBuffer::from_size_val([5, 5].into(), Pixel::new(100, 150, 200, 128));
        let mut dst = src.clone();
        detect_edges(&mut dst)?;

        // interior responses cancel out
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(dst.get(x, y), Pixel::new(0, 0, 0, 128));
            }
        }
        // border is desaturated but not convolved
        assert_eq!(dst.get(0, 0), Pixel::new(140, 140, 140, 128));
        Ok(())
    }
}
