/// Saturate a channel value to `[0, 255]` and truncate it to `u8`.
///
/// NaN maps to `0`.
///
/// # Example
///
/// ```
/// use pixelpipe_imgproc::core::saturate_u8;
///
/// assert_eq!(saturate_u8(-3.0), 0);
/// assert_eq!(saturate_u8(140.75), 140);
/// assert_eq!(saturate_u8(300.0), 255);
/// ```
#[inline]
pub fn saturate_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}
