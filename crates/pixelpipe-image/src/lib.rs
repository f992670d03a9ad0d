#![deny(missing_docs)]
//! Pixel buffer types for the pixelpipe filtering engine

/// Error types for the image module.
pub mod error;

/// dense pixel grid representation.
pub mod image;

/// RGBA pixel value type.
pub mod pixel;

/// live buffer paired with its originally decoded snapshot.
pub mod snapshot;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, PixelBuffer};
pub use crate::pixel::Pixel;
pub use crate::snapshot::WorkingImage;
