//! Filter operations
//!
//! Square-kernel convolution and the filters built on top of it.

/// Filter kernels
pub mod kernels;

/// Generic convolution engine
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
