#![deny(missing_docs)]
//! Raster image filtering engine and batch processing tool.

#[doc(inline)]
pub use pixelpipe_image as image;

#[doc(inline)]
pub use pixelpipe_imgproc as imgproc;

#[doc(inline)]
pub use pixelpipe_io as io;

/// single file and directory processing.
pub mod batch;
