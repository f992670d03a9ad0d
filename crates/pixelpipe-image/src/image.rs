use crate::{error::ImageError, pixel::Pixel};

/// Image size in pixels
///
/// # Examples
///
/// ```
/// use pixelpipe_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.area(), 200);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by this size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A dense, row-major grid of RGBA pixels.
///
/// The pixel at `(x, y)` lives at index `y * width + x`. The grid is always fully
/// populated: `data.len() == width * height` holds for every constructed buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    size: ImageSize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a new buffer from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixels in row-major order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelpipe_image::{ImageSize, Pixel, PixelBuffer};
    ///
    /// let buffer = PixelBuffer::new(
    ///     ImageSize { width: 2, height: 3 },
    ///     vec![Pixel::default(); 6],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(buffer.width(), 2);
    /// assert_eq!(buffer.height(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if data.len() != size.area() {
            return Err(ImageError::InvalidDataLength(data.len(), size.area()));
        }
        Ok(Self { size, data })
    }

    /// Create a new buffer with every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: Pixel) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }

    /// Create a buffer from interleaved RGBA bytes, four per pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes.len() != width * height * 4`.
    pub fn from_raw_rgba(size: ImageSize, bytes: &[u8]) -> Result<Self, ImageError> {
        if bytes.len() != size.area() * 4 {
            return Err(ImageError::InvalidDataLength(bytes.len(), size.area() * 4));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self { size, data })
    }

    /// Interleaved RGBA bytes of the whole grid.
    pub fn to_raw_rgba(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|p| <[u8; 4]>::from(*p))
            .collect()
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Whether the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.data[self.index(x, y)]
    }

    /// Get the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get_checked(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width() && y < self.height() {
            Some(self.data[y * self.width() + x])
        } else {
            None
        }
    }

    /// Replace the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        let idx = self.index(x, y);
        self.data[idx] = pixel;
    }

    /// The pixels in row-major order.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }

    /// The pixels in row-major order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // an empty grid yields no rows; `max(1)` only avoids a zero chunk size
        self.data.chunks(self.width().max(1))
    }

    /// Replace every pixel with `f(pixel)`.
    pub fn map_pixels(&mut self, f: impl Fn(Pixel) -> Pixel) {
        self.data.iter_mut().for_each(|p| *p = f(*p));
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({x}, {y}) out of bounds for {} image",
            self.size
        );
        y * self.width() + x
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageSize, PixelBuffer};
    use crate::{error::ImageError, pixel::Pixel};

    #[test]
    fn image_size() {
        let size = ImageSize::from([10, 20]);
        assert_eq!(size.width, 10);
        assert_eq!(size.height, 20);
        assert_eq!(size.to_string(), "10x20");
    }

    #[test]
    fn buffer_smoke() -> Result<(), ImageError> {
        let buffer = PixelBuffer::new([3, 2].into(), vec![Pixel::default(); 6])?;
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.rows().count(), 2);
        assert!(buffer.rows().all(|row| row.len() == 3));
        Ok(())
    }

    #[test]
    fn buffer_rejects_bad_length() {
        let res = PixelBuffer::new([3, 2].into(), vec![Pixel::default(); 5]);
        assert_eq!(res, Err(ImageError::InvalidDataLength(5, 6)));
    }

    #[test]
    fn get_set_row_major() {
        let mut buffer = PixelBuffer::from_size_val([3, 2].into(), Pixel::default());
        let p = Pixel::new(1, 2, 3, 4);
        buffer.set(2, 1, p);
        assert_eq!(buffer.get(2, 1), p);
        assert_eq!(buffer.as_slice()[5], p);
        assert_eq!(buffer.get_checked(3, 0), None);
        assert_eq!(buffer.get_checked(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let buffer = PixelBuffer::from_size_val([2, 2].into(), Pixel::default());
        buffer.get(2, 0);
    }

    #[test]
    fn raw_rgba_roundtrip() -> Result<(), ImageError> {
        let bytes = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let buffer = PixelBuffer::from_raw_rgba([2, 1].into(), &bytes)?;
        assert_eq!(buffer.get(1, 0), Pixel::new(5, 6, 7, 8));
        assert_eq!(buffer.to_raw_rgba(), bytes);
        assert!(PixelBuffer::from_raw_rgba([2, 1].into(), &bytes[..7]).is_err());
        Ok(())
    }

    #[test]
    fn clone_is_deep() {
        let original = PixelBuffer::from_size_val([2, 2].into(), Pixel::from_rgb(9, 9, 9));
        let mut copy = original.clone();
        copy.set(0, 0, Pixel::TRANSPARENT);
        assert_eq!(original.get(0, 0), Pixel::from_rgb(9, 9, 9));
        assert_eq!(copy.size(), original.size());
    }

    #[test]
    fn empty_buffer() {
        let buffer = PixelBuffer::from_size_val([0, 0].into(), Pixel::default());
        assert!(buffer.is_empty());
        assert_eq!(buffer.rows().count(), 0);
    }
}
