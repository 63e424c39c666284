//! Parse command - extract fields from pre-recognized text.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use idscan_core::RawText;

use super::config::load_config;
use super::{emit, parse_card, OutputArgs};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text recognized on the front side
    #[arg(required = true)]
    front: PathBuf,

    /// Text recognized on the back side
    #[arg(required = true)]
    back: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let front = fs::read_to_string(&args.front)
        .with_context(|| format!("Failed to read front text {}", args.front.display()))?;
    let back = fs::read_to_string(&args.back)
        .with_context(|| format!("Failed to read back text {}", args.back.display()))?;

    info!(
        "Parsing {} and {}",
        args.front.display(),
        args.back.display()
    );

    let result = parse_card(&RawText::new(front, back), &config, args.output.allow_empty)?;
    emit(&result, &args.output)
}
