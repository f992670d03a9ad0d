use crate::{error::ImageError, image::PixelBuffer};

/// A live [`PixelBuffer`] together with the snapshot taken when it was decoded.
///
/// Filters only ever touch the live buffer. The snapshot is captured once in
/// [`WorkingImage::new`] and is what [`WorkingImage::reset`] restores from.
#[derive(Debug)]
pub struct WorkingImage {
    buffer: PixelBuffer,
    original: PixelBuffer,
}

impl WorkingImage {
    /// Wrap a freshly decoded buffer, capturing its snapshot.
    pub fn new(buffer: PixelBuffer) -> Self {
        let original = buffer.clone();
        Self { buffer, original }
    }

    /// The live buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The live buffer, for filters to work on.
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// The snapshot captured at construction.
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// Consume the image, keeping only the live buffer.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Restore the live buffer from the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SnapshotSizeMismatch`] if the live buffer was resized
    /// since the snapshot was taken. The live buffer is left untouched in that case.
    pub fn reset(&mut self) -> Result<(), ImageError> {
        if self.buffer.size() != self.original.size() {
            return Err(ImageError::SnapshotSizeMismatch(
                self.buffer.width(),
                self.buffer.height(),
                self.original.width(),
                self.original.height(),
            ));
        }

        for (dst_row, src_row) in self
            .buffer
            .as_slice_mut()
            .chunks_mut(self.original.width().max(1))
            .zip(self.original.rows())
        {
            dst_row.copy_from_slice(src_row);
        }

        Ok(())
    }
}
