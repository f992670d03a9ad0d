use pixelpipe_image::{ImageError, ImageSize, Pixel, PixelBuffer};

/// Resize a buffer using nearest neighbor sampling.
///
/// The destination pixel `(x, y)` is an exact copy of the source pixel
/// `(floor(x * W_old / W_new), floor(y * H_old / H_new))`. A target with a zero
/// side leaves the buffer untouched.
///
/// # Arguments
///
/// * `buffer` - The buffer to resize in place.
/// * `new_size` - The target size.
///
/// # Errors
///
/// Returns [`ImageError::EmptyImage`] when asked to grow an empty buffer, since
/// there is no source pixel to sample.
///
/// # Example
///
/// ```
/// use pixelpipe_image::{Pixel, PixelBuffer};
/// use pixelpipe_imgproc::resize::resize_nearest;
///
/// let mut buffer = PixelBuffer::from_size_val([4, 5].into(), Pixel::from_rgb(1, 2, 3));
/// resize_nearest(&mut buffer, [2, 3].into()).unwrap();
///
/// assert_eq!(buffer.width(), 2);
/// assert_eq!(buffer.height(), 3);
/// ```
pub fn resize_nearest(buffer: &mut PixelBuffer, new_size: ImageSize) -> Result<(), ImageError> {
    if new_size.width == 0 || new_size.height == 0 {
        return Ok(());
    }
    if buffer.is_empty() {
        return Err(ImageError::EmptyImage);
    }

    let x_ratio = buffer.width() as f64 / new_size.width as f64;
    let y_ratio = buffer.height() as f64 / new_size.height as f64;

    // precompute the source column for every destination column
    let src_cols = (0..new_size.width)
        .map(|x| ((x as f64 * x_ratio) as usize).min(buffer.width() - 1))
        .collect::<Vec<_>>();

    let mut data = Vec::<Pixel>::with_capacity(new_size.area());
    for y in 0..new_size.height {
        let sy = ((y as f64 * y_ratio) as usize).min(buffer.height() - 1);
        data.extend(src_cols.iter().map(|&sx| buffer.get(sx, sy)));
    }

    *buffer = PixelBuffer::new(new_size, data)?;

    Ok(())
}

/// A resize target parsed from a `"<width>x<height>"` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeTarget {
    /// Target width in pixels.
    pub width: usize,
    /// Target height in pixels.
    pub height: usize,
}

impl ResizeTarget {
    /// Parse a `"<width>x<height>"` string such as `"800x600"`.
    ///
    /// Returns `None` unless the string splits on a lower-case `x` into exactly two
    /// integers (surrounding whitespace allowed) that are both positive.
    ///
    /// # Example
    ///
    /// ```
    /// use pixelpipe_imgproc::resize::ResizeTarget;
    ///
    /// assert_eq!(
    ///     ResizeTarget::parse("800x600"),
    ///     Some(ResizeTarget { width: 800, height: 600 })
    /// );
    /// assert_eq!(ResizeTarget::parse("800"), None);
    /// assert_eq!(ResizeTarget::parse("0x600"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split('x');
        let (w, h) = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let width = w.trim().parse::<i64>().ok()?;
        let height = h.trim().parse::<i64>().ok()?;
        if width <= 0 || height <= 0 {
            return None;
        }

        Some(Self {
            width: usize::try_from(width).ok()?,
            height: usize::try_from(height).ok()?,
        })
    }

    /// The target as an [`ImageSize`].
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(width: usize, height: usize) -> PixelBuffer {
        let data = (0..width * height)
            .map(|i| Pixel::new((i % width) as u8, (i / width) as u8, i as u8, 255))
            .collect();
        PixelBuffer::new([width, height].into(), data).unwrap()
    }

    #[test]
    fn resize_same_size_is_identity() -> Result<(), ImageError> {
        let src = indexed(7, 5);
        let mut dst = src.clone();
        resize_nearest(&mut dst, src.size())?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn resize_4x2_to_2x1() -> Result<(), ImageError> {
        let src = indexed(4, 2);
        let mut dst = src.clone();
        resize_nearest(&mut dst, [2, 1].into())?;

        // x ratio 2, y ratio 2: dst(0,0) <- src(0,0), dst(1,0) <- src(2,0)
        assert_eq!(dst.size(), [2, 1].into());
        assert_eq!(dst.get(0, 0), src.get(0, 0));
        assert_eq!(dst.get(1, 0), src.get(2, 0));
        Ok(())
    }

    #[test]
    fn resize_upscale_repeats_pixels() -> Result<(), ImageError> {
        let src = indexed(2, 2);
        let mut dst = src.clone();
        resize_nearest(&mut dst, [4, 3].into())?;

        // x ratio 0.5 maps 0,1,2,3 -> 0,0,1,1; y ratio 2/3 maps 0,1,2 -> 0,0,1
        let cols = [0, 0, 1, 1];
        let rows = [0, 0, 1];
        for (y, &sy) in rows.iter().enumerate() {
            for (x, &sx) in cols.iter().enumerate() {
                assert_eq!(dst.get(x, y), src.get(sx, sy));
            }
        }
        Ok(())
    }

    #[test]
    fn resize_zero_target_is_noop() -> Result<(), ImageError> {
        let src = indexed(3, 3);
        let mut dst = src.clone();
        resize_nearest(&mut dst, [0, 3].into())?;
        resize_nearest(&mut dst, [3, 0].into())?;
        assert_eq!(dst, src);
        Ok(())
    }

    #[test]
    fn resize_empty_source() {
        let mut empty = PixelBuffer::from_size_val([0, 0].into(), Pixel::default());
        assert_eq!(resize_nearest(&mut empty, [2, 2].into()), Err(ImageError::EmptyImage));
    }

    #[test]
    fn parse_targets() {
        assert_eq!(
            ResizeTarget::parse(" 64 x 32 "),
            Some(ResizeTarget { width: 64, height: 32 })
        );
        for bad in ["", "x", "64", "64x", "x32", "64x32x2", "64X32", "-1x10", "10x0", "axb"] {
            assert_eq!(ResizeTarget::parse(bad), None, "{bad:?}");
        }
    }
}
