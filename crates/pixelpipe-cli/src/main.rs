use argh::FromArgs;
use std::path::PathBuf;

use pixelpipe::{batch, imgproc::pipeline::ProcessingConfig};

#[derive(FromArgs)]
/// Apply a chain of filters to an image or to every image in a directory.
#[argh(example = "{command_name} -i input.jpg -o output.jpg --brightness 1.2 --contrast 10")]
#[argh(example = "{command_name} -i ./input_dir -o ./output_dir --grayscale --blur 2")]
struct Args {
    /// input file or directory
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// output file or directory
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// json file with a processing configuration; flags below override it
    #[argh(option)]
    config: Option<PathBuf>,

    /// brightness factor (0.0-2.0, default 1.0)
    #[argh(option)]
    brightness: Option<f64>,

    /// contrast adjustment (-100 to 100, default 0)
    #[argh(option)]
    contrast: Option<f64>,

    /// blur radius (0-10, default 0)
    #[argh(option)]
    blur: Option<i32>,

    /// sharpen amount (0.0-1.0, default 0)
    #[argh(option)]
    sharpen: Option<f64>,

    /// convert to grayscale
    #[argh(switch)]
    grayscale: bool,

    /// apply sepia effect
    #[argh(switch)]
    sepia: bool,

    /// apply edge detection
    #[argh(switch)]
    edge: bool,

    /// jpeg output quality (0-100, default 90)
    #[argh(option)]
    quality: Option<u8>,

    /// resize image, e.g. 800x600
    #[argh(option)]
    resize: Option<String>,
}

impl Args {
    fn processing_config(&self) -> Result<ProcessingConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => ProcessingConfig::default(),
        };

        if let Some(brightness) = self.brightness {
            config.brightness = brightness;
        }
        if let Some(contrast) = self.contrast {
            config.contrast = contrast;
        }
        if let Some(blur) = self.blur {
            config.blur = blur;
        }
        if let Some(sharpen) = self.sharpen {
            config.sharpen = sharpen;
        }
        config.grayscale |= self.grayscale;
        config.sepia |= self.sepia;
        config.edge_detection |= self.edge;
        if let Some(quality) = self.quality {
            config.quality = quality;
        }
        if let Some(resize) = &self.resize {
            config.resize = Some(resize.clone());
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let config = args.processing_config()?;
    log::debug!("configuration: {config:?}");

    let report = batch::run(&args.input, &args.output, &config)?;

    if report.is_success() {
        log::info!("processed {} image(s)", report.processed.len());
    } else {
        log::warn!(
            "processed {} image(s), {} failed",
            report.processed.len(),
            report.failed.len()
        );
    }

    Ok(())
}
