//! Batch processing command for many card image pairs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use idscan_core::models::config::IdScanConfig;
use idscan_core::{FieldRecord, OcrEngine};

use super::config::load_config;
use super::scan::{load_engine, recognize_files};
use super::{format_record, parse_card, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob matching front images; each pairs with the file named with "back" for "front"
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each front image)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each card
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Accept records where no field could be read
    #[arg(long)]
    allow_empty: bool,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

/// A front image and its matching back image.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CardPair {
    front: PathBuf,
    back: PathBuf,
}

/// Result of processing a single pair.
struct PairResult {
    pair: CardPair,
    record: Option<FieldRecord>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let fronts: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_image(p))
        .collect();

    let pairs: Vec<CardPair> = fronts.iter().filter_map(|p| pair_for(p)).collect();

    if pairs.is_empty() {
        anyhow::bail!("No front/back image pairs found for pattern: {}", args.input);
    }

    println!("{} Found {} cards to process", style("ℹ").blue(), pairs.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let engine = load_engine(args.model_dir.as_deref(), &config)?;

    let pb = ProgressBar::new(pairs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} cards")?
            .progress_chars("=>-"),
    );

    let results = process_pairs(pairs, &engine, &args, &config, &pb)?;
    pb.finish_and_clear();

    let summary = BatchSummary::from_results(&results);

    for result in results.iter().filter(|r| r.error.is_some()) {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            result.pair.front.display(),
            result.error.as_deref().unwrap_or_default()
        );
    }

    println!(
        "{} Processed {} cards ({} ok, {} failed) in {:.1}s",
        style("✓").green(),
        summary.total,
        summary.succeeded,
        summary.failed,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BatchSummary {
    total: usize,
    succeeded: usize,
    failed: usize,
}

impl BatchSummary {
    fn from_results(results: &[PairResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.record.is_some()).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }
}

/// Scan every pair in order. Stops at the first failure unless
/// `--continue-on-error` is set.
fn process_pairs<E: OcrEngine + ?Sized>(
    pairs: Vec<CardPair>,
    engine: &E,
    args: &BatchArgs,
    config: &IdScanConfig,
    pb: &ProgressBar,
) -> anyhow::Result<Vec<PairResult>> {
    let mut results = Vec::with_capacity(pairs.len());

    for pair in pairs {
        match process_pair(&pair, engine, args, config) {
            Ok(record) => {
                debug!("Processed {}", pair.front.display());
                results.push(PairResult {
                    pair,
                    record: Some(record),
                    error: None,
                });
            }
            Err(e) => {
                error!("Failed to process {}: {}", pair.front.display(), e);
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e);
                }
                results.push(PairResult {
                    pair,
                    record: None,
                    error: Some(e.to_string()),
                });
            }
        }
        pb.inc(1);
    }

    Ok(results)
}

fn process_pair<E: OcrEngine + ?Sized>(
    pair: &CardPair,
    engine: &E,
    args: &BatchArgs,
    config: &IdScanConfig,
) -> anyhow::Result<FieldRecord> {
    let raw = recognize_files(engine, &pair.front, &pair.back, config)?;
    let result = parse_card(&raw, config, args.allow_empty)?;

    if !result.warnings.is_empty() {
        warn!("{}: {}", pair.front.display(), result.warnings.join("; "));
    }

    let output = format_record(&result.record, args.format)?;
    let output_path = output_path(&pair.front, args.output_dir.as_deref(), args.format);
    fs::write(&output_path, output)?;

    Ok(result.record)
}

fn is_image(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(
        ext.to_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "tiff" | "bmp" | "webp"
    )
}

/// Pair a front image with its back image, if both exist.
fn pair_for(front: &Path) -> Option<CardPair> {
    let name = front.file_name()?.to_str()?;
    if !name.contains("front") {
        return None;
    }
    let back = front.with_file_name(name.replacen("front", "back", 1));
    if !back.exists() {
        warn!("No back image for {} (expected {})", front.display(), back.display());
        return None;
    }
    Some(CardPair {
        front: front.to_path_buf(),
        back,
    })
}

/// Output file for a card: the front file name with "front" dropped.
fn output_path(front: &Path, output_dir: Option<&Path>, format: OutputFormat) -> PathBuf {
    let stem = front
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("card")
        .replacen("front", "card", 1);
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| front.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{}.{}", stem, format.extension()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use idscan_core::OcrError;
    use image::{DynamicImage, RgbImage};

    const FRONT: &str = "John Smith DOB:10/10/1990 Male Government of India 1234 5678 9012";
    const BACK: &str = "Address: 123 Main Street Kochi\nPincode 682001 Kerala India";

    /// Reads the card text off the image width.
    struct WidthEngine;

    impl OcrEngine for WidthEngine {
        fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
            Ok(match image.width() {
                1 => FRONT.to_string(),
                2 => BACK.to_string(),
                _ => String::new(),
            })
        }
    }

    fn write_card(dir: &Path, name: &str, front_width: u32, back_width: u32) -> CardPair {
        let front = dir.join(format!("{}_front.png", name));
        let back = dir.join(format!("{}_back.png", name));
        RgbImage::new(front_width, 1).save(&front).unwrap();
        RgbImage::new(back_width, 1).save(&back).unwrap();
        CardPair { front, back }
    }

    fn batch_args(continue_on_error: bool) -> BatchArgs {
        BatchArgs {
            input: String::new(),
            output_dir: None,
            format: OutputFormat::Json,
            continue_on_error,
            allow_empty: false,
            model_dir: None,
        }
    }

    fn cards(dir: &Path) -> Vec<CardPair> {
        vec![
            write_card(dir, "alice", 1, 2),
            write_card(dir, "bob", 3, 3),
            write_card(dir, "carol", 1, 2),
        ]
    }

    #[test]
    fn test_continue_on_error_collects_failures() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = cards(dir.path());

        let results = process_pairs(
            pairs,
            &WidthEngine,
            &batch_args(true),
            &IdScanConfig::default(),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(
            BatchSummary::from_results(&results),
            BatchSummary {
                total: 3,
                succeeded: 2,
                failed: 1,
            }
        );
        assert_eq!(results[0].record.as_ref().unwrap().name, "John Smith");
        assert!(results[1]
            .error
            .as_deref()
            .unwrap()
            .contains("do not appear to contain Aadhaar content"));

        assert!(dir.path().join("alice_card.json").exists());
        assert!(!dir.path().join("bob_card.json").exists());
        assert!(dir.path().join("carol_card.json").exists());
    }

    #[test]
    fn test_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pairs = cards(dir.path());

        let err = process_pairs(
            pairs,
            &WidthEngine,
            &batch_args(false),
            &IdScanConfig::default(),
            &ProgressBar::hidden(),
        )
        .err()
        .unwrap();

        assert!(err.to_string().contains("do not appear to contain Aadhaar content"));
        assert!(dir.path().join("alice_card.json").exists());
        assert!(!dir.path().join("carol_card.json").exists());
    }

    #[test]
    fn test_pair_for() {
        let dir = tempfile::tempdir().unwrap();
        let front = dir.path().join("alice_front.png");
        let back = dir.path().join("alice_back.png");
        fs::write(&front, b"").unwrap();
        fs::write(&back, b"").unwrap();

        assert_eq!(
            pair_for(&front),
            Some(CardPair {
                front: front.clone(),
                back,
            })
        );
        assert_eq!(pair_for(&dir.path().join("alice_back.png")), None);
        assert_eq!(pair_for(&dir.path().join("bob_front.png")), None);
    }

    #[test]
    fn test_output_path() {
        let front = Path::new("/scans/alice_front.jpg");
        assert_eq!(
            output_path(front, None, OutputFormat::Json),
            PathBuf::from("/scans/alice_card.json")
        );
        assert_eq!(
            output_path(front, Some(Path::new("/out")), OutputFormat::Csv),
            PathBuf::from("/out/alice_card.csv")
        );
    }

    #[test]
    fn test_is_image() {
        assert!(is_image(Path::new("a_front.JPG")));
        assert!(!is_image(Path::new("a_front.txt")));
    }
}
