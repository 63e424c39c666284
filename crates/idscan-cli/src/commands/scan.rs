//! Scan command - extract details from a front and back image pair.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use clap::Args;
use image::DynamicImage;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use idscan_core::models::config::IdScanConfig;
use idscan_core::{
    create_engine_from_dir, recognize_pair, OcrEngine, PureOcrEngine, RawText, Side,
};

use super::config::load_config;
use super::{emit, parse_card, OutputArgs};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Image of the front side (name, date of birth, ID number)
    #[arg(required = true)]
    front: PathBuf,

    /// Image of the back side (address)
    #[arg(required = true)]
    back: PathBuf,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    ensure_image(&args.front, Side::Front)?;
    ensure_image(&args.back, Side::Back)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb.set_message("Loading OCR models...");
    let engine = load_engine(args.model_dir.as_deref(), &config)?;

    pb.set_message("Recognizing text...");
    let raw = recognize_files(&engine, &args.front, &args.back, &config)?;

    pb.set_message("Extracting details...");
    let result = parse_card(&raw, &config, args.output.allow_empty);
    pb.finish_and_clear();

    emit(&result?, &args.output)?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn ensure_image(path: &Path, side: Side) -> anyhow::Result<()> {
    if !path.exists() {
        anyhow::bail!("{} image not found: {}", side, path.display());
    }
    Ok(())
}

/// Load the OCR engine from the given or configured model directory.
pub fn load_engine(model_dir: Option<&Path>, config: &IdScanConfig) -> anyhow::Result<PureOcrEngine> {
    let model_dir = model_dir.unwrap_or(&config.models.model_dir);
    debug!("Using models from {}", model_dir.display());

    create_engine_from_dir(model_dir, config).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load OCR models from {}: {}\n\n\
             Pass --model-dir or set models.model_dir with 'idscan config set'.",
            model_dir.display(),
            e
        )
    })
}

/// Decode both images and recognize them.
pub fn recognize_files<E: OcrEngine + ?Sized>(
    engine: &E,
    front: &Path,
    back: &Path,
    config: &IdScanConfig,
) -> anyhow::Result<RawText> {
    let front_image = open_image(front, Side::Front)?;
    let back_image = open_image(back, Side::Back)?;

    let raw = recognize_pair(engine, &front_image, &back_image, config.ocr.parallel_sides)?;

    info!(
        "Recognized {} front / {} back characters",
        raw.front.len(),
        raw.back.len()
    );

    Ok(raw)
}

fn open_image(path: &Path, side: Side) -> anyhow::Result<DynamicImage> {
    image::open(path)
        .map_err(|e| anyhow::anyhow!("Unreadable {} image {}: {}", side, path.display(), e))
}
