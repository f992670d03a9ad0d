/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the pixel data does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two images are expected to share the same size.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the snapshot cannot be restored onto a resized buffer.
    #[error("Cannot reset a {0}x{1} buffer from a {2}x{3} snapshot")]
    SnapshotSizeMismatch(usize, usize, usize, usize),

    /// Error when a kernel is not a square matrix of odd side.
    #[error("Invalid kernel: {0} weights for side {1}")]
    InvalidKernelSize(usize, usize),

    /// Error when an operation needs at least one source pixel.
    #[error("Image is empty")]
    EmptyImage,
}
