#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// numeric helpers shared by the filters.
pub mod core;

/// image enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// ordered application of a processing configuration.
pub mod pipeline;

/// utility functions for resizing images.
pub mod resize;
