use pixelpipe_image::PixelBuffer;

use crate::core::saturate_u8;

/// Adjust the brightness of a buffer in place.
///
/// dst(x,y,c) = saturate(src(x,y,c) * factor)
///
/// Only the color channels are scaled; alpha is unchanged. A factor of exactly
/// `1.0` returns without touching the buffer.
///
/// # Arguments
///
/// * `buffer` - The buffer to adjust.
/// * `factor` - Multiplier for each color channel, documented range `[0.0, 2.0]`.
///   Values outside that range are accepted and simply saturate per pixel.
pub fn adjust_brightness(buffer: &mut PixelBuffer, factor: f64) {
    if factor == 1.0 {
        return;
    }
    let scale = |c: u8| saturate_u8(c as f64 * factor);
    buffer.map_pixels(|p| p.with_rgb(scale(p.r), scale(p.g), scale(p.b)));
}

/// Adjust the contrast of a buffer in place.
///
/// The delta is turned into a gain `((100 + delta) / 100)²` which stretches each
/// color channel around mid-gray:
///
/// dst(x,y,c) = saturate(((src(x,y,c) / 255 - 0.5) * gain + 0.5) * 255)
///
/// A delta of exactly `0.0` returns without touching the buffer.
///
/// # Arguments
///
/// * `buffer` - The buffer to adjust.
/// * `delta` - Contrast change, documented range `[-100, 100]`.
pub fn adjust_contrast(buffer: &mut PixelBuffer, delta: f64) {
    if delta == 0.0 {
        return;
    }
    let gain = (100.0 + delta) / 100.0;
    let gain = gain * gain;

    let stretch = |c: u8| {
        let centered = c as f64 / 255.0 - 0.5;
        saturate_u8((centered * gain + 0.5) * 255.0)
    };
    buffer.map_pixels(|p| p.with_rgb(stretch(p.r), stretch(p.g), stretch(p.b)));
}
