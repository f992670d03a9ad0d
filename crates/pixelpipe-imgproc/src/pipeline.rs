//! Ordered application of a [`ProcessingConfig`] to a pixel buffer.
//!
//! The operations always run in the same order, each one skipped when its
//! parameter sits at the identity value:
//!
//! 1. brightness
//! 2. contrast
//! 3. grayscale
//! 4. sepia
//! 5. edge detection (desaturates again on its own)
//! 6. sharpen
//! 7. blur
//! 8. resize
//!
//! The filters do not commute, so this order is part of the output contract.

use pixelpipe_image::{ImageError, PixelBuffer};
use serde::{Deserialize, Serialize};

use crate::{color, enhance, filter, resize::ResizeTarget};

/// The requested operations and their parameters.
///
/// Missing fields take their identity value when deserialized, so an empty JSON
/// object is a valid configuration that leaves images unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Brightness factor, documented range `[0.0, 2.0]`.
    pub brightness: f64,
    /// Contrast delta, documented range `[-100, 100]`.
    pub contrast: f64,
    /// Gaussian blur radius, documented range `[0, 10]`.
    pub blur: i32,
    /// Sharpen amount, documented range `[0.0, 1.0]`.
    pub sharpen: f64,
    /// Desaturate the image.
    pub grayscale: bool,
    /// Apply a sepia tone.
    pub sepia: bool,
    /// Run edge detection.
    pub edge_detection: bool,
    /// Output quality for lossy encoders, `[0, 100]`.
    pub quality: u8,
    /// Resize target in the form `"<width>x<height>"`.
    pub resize: Option<String>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 0.0,
            blur: 0,
            sharpen: 0.0,
            grayscale: false,
            sepia: false,
            edge_detection: false,
            quality: 90,
            resize: None,
        }
    }
}

impl ProcessingConfig {
    /// Set the brightness factor.
    pub fn with_brightness(mut self, factor: f64) -> Self {
        self.brightness = factor;
        self
    }

    /// Set the contrast delta.
    pub fn with_contrast(mut self, delta: f64) -> Self {
        self.contrast = delta;
        self
    }

    /// Set the blur radius.
    pub fn with_blur(mut self, radius: i32) -> Self {
        self.blur = radius;
        self
    }

    /// Set the sharpen amount.
    pub fn with_sharpen(mut self, amount: f64) -> Self {
        self.sharpen = amount;
        self
    }

    /// Enable or disable grayscale.
    pub fn with_grayscale(mut self, enabled: bool) -> Self {
        self.grayscale = enabled;
        self
    }

    /// Enable or disable sepia.
    pub fn with_sepia(mut self, enabled: bool) -> Self {
        self.sepia = enabled;
        self
    }

    /// Enable or disable edge detection.
    pub fn with_edge_detection(mut self, enabled: bool) -> Self {
        self.edge_detection = enabled;
        self
    }

    /// Set the output quality.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Set the resize target string, e.g. `"800x600"`.
    pub fn with_resize(mut self, target: impl Into<String>) -> Self {
        self.resize = Some(target.into());
        self
    }

    /// The parsed resize target, if one was given and is well formed.
    pub fn resize_target(&self) -> Option<ResizeTarget> {
        self.resize.as_deref().and_then(ResizeTarget::parse)
    }

    /// The operations this configuration runs, in execution order.
    pub fn operations(&self) -> Vec<Operation> {
        let mut ops = Vec::new();
        if self.brightness != 1.0 {
            ops.push(Operation::Brightness(self.brightness));
        }
        if self.contrast != 0.0 {
            ops.push(Operation::Contrast(self.contrast));
        }
        if self.grayscale {
            ops.push(Operation::Grayscale);
        }
        if self.sepia {
            ops.push(Operation::Sepia);
        }
        if self.edge_detection {
            ops.push(Operation::EdgeDetection);
        }
        if self.sharpen != 0.0 {
            ops.push(Operation::Sharpen(self.sharpen));
        }
        if self.blur > 0 {
            ops.push(Operation::Blur(self.blur));
        }
        if let Some(target) = self.resize_target() {
            ops.push(Operation::Resize(target));
        }
        ops
    }

    /// Whether processing with this configuration leaves an image unchanged.
    pub fn is_identity(&self) -> bool {
        self.operations().is_empty()
    }
}

/// A single step of the processing chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    /// Scale the color channels.
    Brightness(f64),
    /// Stretch the color channels around mid-gray.
    Contrast(f64),
    /// Desaturate.
    Grayscale,
    /// Sepia tone.
    Sepia,
    /// Desaturate, then apply the edge kernel.
    EdgeDetection,
    /// Sharpen with the given blend amount.
    Sharpen(f64),
    /// Gaussian blur with the given radius.
    Blur(i32),
    /// Nearest neighbor resize.
    Resize(ResizeTarget),
}

impl Operation {
    /// Apply this operation to a buffer in place.
    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<(), ImageError> {
        match *self {
            Operation::Brightness(factor) => enhance::adjust_brightness(buffer, factor),
            Operation::Contrast(delta) => enhance::adjust_contrast(buffer, delta),
            Operation::Grayscale => color::grayscale(buffer),
            Operation::Sepia => color::sepia(buffer),
            Operation::EdgeDetection => filter::detect_edges(buffer)?,
            Operation::Sharpen(amount) => filter::sharpen(buffer, amount)?,
            Operation::Blur(radius) => filter::gaussian_blur(buffer, radius)?,
            Operation::Resize(target) => crate::resize::resize_nearest(buffer, target.size())?,
        }
        Ok(())
    }
}

/// Apply every operation of `config` to `buffer`, in the fixed pipeline order.
///
/// A resize string that does not parse is skipped with a warning rather than
/// treated as an error.
///
/// # Example
///
/// ```
/// use pixelpipe_image::{Pixel, PixelBuffer};
/// use pixelpipe_imgproc::pipeline::{process, ProcessingConfig};
///
/// let mut buffer = PixelBuffer::from_size_val([8, 4].into(), Pixel::from_rgb(200, 200, 200));
/// let config = ProcessingConfig::default()
///     .with_brightness(2.0)
///     .with_resize("4x2");
///
/// process(&mut buffer, &config).unwrap();
///
/// assert_eq!(buffer.size(), [4, 2].into());
/// assert_eq!(buffer.get(0, 0), Pixel::from_rgb(255, 255, 255));
/// ```
pub fn process(buffer: &mut PixelBuffer, config: &ProcessingConfig) -> Result<(), ImageError> {
    if let Some(raw) = config.resize.as_deref() {
        if config.resize_target().is_none() {
            log::warn!("ignoring malformed resize target {raw:?}");
        }
    }

    for op in config.operations() {
        log::debug!("applying {op:?} to {} buffer", buffer.size());
        op.apply(buffer)?;
    }

    Ok(())
}
