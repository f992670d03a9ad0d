use pixelpipe_image::PixelBuffer;

use crate::core::saturate_u8;

/// The sepia tone matrix, one row per output channel (R, G, B).
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply a sepia tone to a buffer in place; alpha is unchanged.
pub fn sepia(buffer: &mut PixelBuffer) {
    buffer.map_pixels(|p| {
        let (r, g, b) = (p.r as f64, p.g as f64, p.b as f64);
        let [nr, ng, nb] = SEPIA_MATRIX.map(|row| saturate_u8(row[0] * r + row[1] * g + row[2] * b));
        p.with_rgb(nr, ng, nb)
    });
}

#[cfg(test)]
mod tests {
    use super::sepia;
    use pixelpipe_image::{Pixel, PixelBuffer};

    #[test]
    fn sepia_values() {
        let data = vec![
            Pixel::new(100, 100, 100, 9),
            Pixel::new(255, 255, 255, 255),
            Pixel::new(0, 0, 0, 0),
        ];
        let mut buffer = PixelBuffer::new([3, 1].into(), data).unwrap();
        sepia(&mut buffer);

        // 135.1, 120.3, 93.7
        assert_eq!(buffer.get(0, 0), Pixel::new(135, 120, 93, 9));
        // red and green saturate, blue is 0.937 * 255 = 238.9
        assert_eq!(buffer.get(1, 0), Pixel::new(255, 255, 238, 255));
        assert_eq!(buffer.get(2, 0), Pixel::new(0, 0, 0, 0));
    }
}
