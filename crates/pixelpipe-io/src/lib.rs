#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// Supported on-disk image formats.
pub mod format;

/// High-level image reading and writing functions.
///
/// See [`functional::read_image`] and [`functional::write_image`].
pub mod functional;

pub use crate::error::IoError;
pub use crate::format::{is_supported_image, ImageFormat};
