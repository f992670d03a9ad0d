//! Decode, process and encode images, one at a time or a directory at once.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use pixelpipe_image::ImageError;
use pixelpipe_imgproc::pipeline::{self, ProcessingConfig};
use pixelpipe_io::{functional as F, is_supported_image, IoError};

/// An error type for the batch module.
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    /// The input path does not exist.
    #[error("Input does not exist: {0}")]
    InputNotFound(PathBuf),

    /// The output directory cannot be created.
    #[error("Failed to create output directory {0}. {1}")]
    OutputDirectory(PathBuf, #[source] std::io::Error),

    /// The input directory cannot be listed.
    #[error("Failed to read input directory {0}. {1}")]
    InputDirectory(PathBuf, #[source] std::io::Error),

    /// Decoding or encoding failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// A filter failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Outcome of processing a directory.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Inputs written successfully.
    pub processed: Vec<PathBuf>,
    /// Entries left alone: subdirectories and unsupported extensions.
    pub skipped: Vec<PathBuf>,
    /// Inputs that failed, with the reason.
    pub failed: Vec<(PathBuf, BatchError)>,
}

impl BatchReport {
    /// Whether every candidate image was processed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Decode `input`, run the pipeline and encode the result to `output`.
///
/// The output format follows the extension of `output`; `config.quality` applies
/// to JPEG output only.
pub fn process_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ProcessingConfig,
) -> Result<(), BatchError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let mut image = F::read_working_image(input)?;
    pipeline::process(image.buffer_mut(), config)?;
    F::write_image(output, &image.into_buffer(), config.quality)?;

    log::debug!("processed {} -> {}", input.display(), output.display());

    Ok(())
}

/// Process every supported image directly inside `input_dir` into `output_dir`.
///
/// The output directory is created if needed; failing to create it, or to list
/// the input directory, aborts the run. A file that fails to decode, process or
/// encode is logged and recorded in the report without stopping its siblings.
/// Files are processed in parallel, each with its own buffers.
pub fn process_batch(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ProcessingConfig,
) -> Result<BatchReport, BatchError> {
    let (input_dir, output_dir) = (input_dir.as_ref(), output_dir.as_ref());

    std::fs::create_dir_all(output_dir)
        .map_err(|e| BatchError::OutputDirectory(output_dir.to_path_buf(), e))?;

    let read_err = |e| BatchError::InputDirectory(input_dir.to_path_buf(), e);
    let mut entries = std::fs::read_dir(input_dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;
    entries.sort();

    let mut report = BatchReport::default();
    let (candidates, skipped): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|path| path.is_file() && is_supported_image(path));
    report.skipped = skipped;

    let results = candidates
        .into_par_iter()
        .map(|input| {
            let res = match input.file_name() {
                Some(name) => process_file(&input, output_dir.join(name), config),
                None => Err(BatchError::InputNotFound(input.clone())),
            };
            (input, res)
        })
        .collect::<Vec<_>>();

    for (input, res) in results {
        match res {
            Ok(()) => {
                log::info!("processed {}", input.display());
                report.processed.push(input);
            }
            Err(err) => {
                log::warn!("error processing {}: {err}", input.display());
                report.failed.push((input, err));
            }
        }
    }

    Ok(report)
}

/// Process `input` into `output`, dispatching on whether `input` is a directory.
///
/// For a single file any failure is returned as an error.
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ProcessingConfig,
) -> Result<BatchReport, BatchError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    if !input.exists() {
        return Err(BatchError::InputNotFound(input.to_path_buf()));
    }

    if input.is_dir() {
        log::info!("starting batch processing of {}", input.display());
        return process_batch(input, output, config);
    }

    log::info!("processing single file {}", input.display());
    process_file(input, output, config)?;

    Ok(BatchReport {
        processed: vec![input.to_path_buf()],
        ..Default::default()
    })
}
