use pixelpipe_image::PixelBuffer;

/// The RGB weights for the grayscale conversion.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// [`LUMA_WEIGHTS`] in thousandths, so the weighted sum is exact.
const LUMA_WEIGHTS_MILLI: [u32; 3] = [299, 587, 114];

/// Desaturate a buffer in place using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The luma is truncated to 8 bits and written to all three color channels;
/// alpha is unchanged. The sum is evaluated in integer thousandths, so a pixel
/// that is already gray maps to itself.
///
/// # Example
///
/// ```
/// use pixelpipe_image::{Pixel, PixelBuffer};
/// use pixelpipe_imgproc::color::grayscale;
///
/// let mut buffer = PixelBuffer::from_size_val([4, 4].into(), Pixel::new(100, 150, 200, 255));
/// grayscale(&mut buffer);
///
/// assert!(buffer.as_slice().iter().all(|p| *p == Pixel::new(140, 140, 140, 255)));
/// ```
pub fn grayscale(buffer: &mut PixelBuffer) {
    let [rw, gw, bw] = LUMA_WEIGHTS_MILLI;
    buffer.map_pixels(|p| {
        let gray = ((p.r as u32 * rw + p.g as u32 * gw + p.b as u32 * bw) / 1000) as u8;
        p.with_rgb(gray, gray, gray)
    });
}
