/// A single RGBA pixel with 8 bits per channel.
///
/// Filters never mutate channels one at a time; they compute a whole new
/// [`Pixel`] and write it back.
///
/// # Examples
///
/// ```
/// use pixelpipe_image::Pixel;
///
/// let p = Pixel::from_rgb(10, 20, 30);
/// assert_eq!(p.a, 255);
/// assert_eq!(p.rgb(), [10, 20, 30]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    /// Create a pixel from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// The color channels without alpha.
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Replace the color channels, keeping alpha.
    pub const fn with_rgb(self, r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, self.a)
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(v: [u8; 4]) -> Self {
        Pixel::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b, p.a]
    }
}
