use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use image::{
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
    DynamicImage, ExtendedColorType, ImageEncoder,
};
use pixelpipe_image::{ImageSize, PixelBuffer, WorkingImage};

use crate::{error::IoError, format::ImageFormat};

/// Reads a PNG or JPEG image from the given file path as RGBA8.
///
/// Sources without an alpha channel are decoded as fully opaque. 16-bit channels
/// keep their high byte (`v >> 8`).
///
/// # Arguments
///
/// * `file_path` - The path to a `.png`, `.jpg` or `.jpeg` file.
///
/// # Errors
///
/// Fails if the file is missing, has an unsupported extension or cannot be
/// decoded. A partially decoded buffer is never returned.
pub fn read_image(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists and has a known extension
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }
    let format = ImageFormat::from_path(file_path)
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    let reader = BufReader::new(File::open(file_path)?);
    let img = image::ImageReader::with_format(reader, format.into()).decode()?;

    let (width, height, raw) = match img {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => {
            let img = img.into_rgba16();
            let raw = img.as_raw().iter().map(|&v| (v >> 8) as u8).collect::<Vec<u8>>();
            (img.width(), img.height(), raw)
        }
        _ => {
            let img = img.into_rgba8();
            (img.width(), img.height(), img.into_raw())
        }
    };

    let size = ImageSize {
        width: width as usize,
        height: height as usize,
    };

    log::debug!("decoded {} as {format:?} ({size})", file_path.display());

    Ok(PixelBuffer::from_raw_rgba(size, &raw)?)
}

/// Reads an image and captures its snapshot for later reset.
pub fn read_working_image(file_path: impl AsRef<Path>) -> Result<WorkingImage, IoError> {
    Ok(WorkingImage::new(read_image(file_path)?))
}

/// Writes a buffer to the given file path.
///
/// The format follows the extension. PNG keeps the alpha channel, JPEG drops it
/// and is encoded with `quality` clamped to `[1, 100]`. A path with any other
/// extension is written as JPEG.
///
/// # Arguments
///
/// * `file_path` - The destination path. Its parent directory must exist.
/// * `buffer` - The pixels to encode.
/// * `quality` - The JPEG quality, ignored for PNG.
pub fn write_image(
    file_path: impl AsRef<Path>,
    buffer: &PixelBuffer,
    quality: u8,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path).unwrap_or(ImageFormat::Jpeg);

    let too_large = || IoError::DimensionsTooLarge(buffer.width(), buffer.height());
    let width = u32::try_from(buffer.width()).map_err(|_| too_large())?;
    let height = u32::try_from(buffer.height()).map_err(|_| too_large())?;

    let mut writer = BufWriter::new(File::create(file_path)?);

    match format {
        ImageFormat::Png => PngEncoder::new(&mut writer).write_image(
            &buffer.to_raw_rgba(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        ImageFormat::Jpeg => {
            let rgb = buffer
                .as_slice()
                .iter()
                .flat_map(|p| p.rgb())
                .collect::<Vec<u8>>();
            JpegEncoder::new_with_quality(&mut writer, quality.clamp(1, 100)).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
    }
    .map_err(IoError::ImageEncodeError)?;

    writer.flush()?;

    log::debug!("encoded {} as {format:?}", file_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelpipe_image::Pixel;

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        let data = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                Pixel::new((x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8, 200)
            })
            .collect();
        PixelBuffer::new([width, height].into(), data).unwrap()
    }

    #[test]
    fn read_write_png_rgba() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = gradient(32, 20);
        write_image(&file_path, &image, 90)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image(&file_path)?;
        assert_eq!(image_back, image);
        Ok(())
    }

    #[test]
    fn read_png_rgba16_keeps_high_byte() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("deep.png");

        let deep = image::ImageBuffer::<image::Rgba<u16>, Vec<u16>>::from_raw(
            2,
            1,
            vec![0x12FF, 0x00FF, 0xFFFF, 0xFFFF, 0x8000, 0x7FFF, 0x0000, 0x01FF],
        )
        .unwrap();
        deep.save(&file_path)?;

        let image = read_image(&file_path)?;
        assert_eq!(image.get(0, 0), Pixel::new(0x12, 0x00, 0xFF, 0xFF));
        assert_eq!(image.get(1, 0), Pixel::new(0x80, 0x7F, 0x00, 0x01));
        Ok(())
    }

    #[test]
    fn read_write_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.JPG");

        write_image(&file_path, &gradient(40, 30), 75)?;
        let image_back = read_image(&file_path)?;

        assert_eq!(image_back.size(), [40, 30].into());
        // jpeg carries no alpha, so it decodes opaque
        assert!(image_back.as_slice().iter().all(|p| p.a == 255));
        Ok(())
    }

    #[test]
    fn jpeg_quality_changes_size() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let low = tmp_dir.path().join("low.jpg");
        let high = tmp_dir.path().join("high.jpg");

        let image = gradient(64, 64);
        write_image(&low, &image, 5)?;
        write_image(&high, &image, 100)?;

        assert!(std::fs::metadata(&low)?.len() < std::fs::metadata(&high)?.len());
        Ok(())
    }

    #[test]
    fn unknown_extension_is_written_as_jpeg() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("output.bin");

        write_image(&file_path, &gradient(8, 8), 90)?;

        let bytes = std::fs::read(&file_path)?;
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_unsupported_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("image.gif");
        std::fs::write(&file_path, b"GIF89a")?;

        let res = read_image(&file_path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }

    #[test]
    fn read_corrupt_file() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("broken.png");
        std::fs::write(&file_path, b"definitely not a png")?;

        let res = read_image(&file_path);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
        Ok(())
    }

    #[test]
    fn read_working_image_snapshot() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("snap.png");
        write_image(&file_path, &gradient(5, 4), 90)?;

        let image = read_working_image(&file_path)?;
        assert_eq!(image.buffer(), image.original());
        Ok(())
    }
}
