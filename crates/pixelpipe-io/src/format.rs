use std::path::Path;

/// The image formats the codec boundary reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Lossless PNG, keeps alpha.
    Png,
    /// Lossy JPEG, drops alpha.
    Jpeg,
}

impl ImageFormat {
    /// Resolve the format from a file extension, ignoring case.
    ///
    /// # Example
    ///
    /// ```
    /// use pixelpipe_io::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_path("photo.JPG"), Some(ImageFormat::Jpeg));
    /// assert_eq!(ImageFormat::from_path("scan.png"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_path("notes.txt"), None);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }
}

impl From<ImageFormat> for image::ImageFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// Whether the path has an extension the decoder accepts.
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    ImageFormat::from_path(path).is_some()
}
