//! Subcommands and the output handling they share.

pub mod batch;
pub mod config;
pub mod parse;
pub mod scan;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::warn;

use idscan_core::models::config::IdScanConfig;
use idscan_core::{CardParser, ExtractionResult, Field, FieldRecord, IdCardParser, RawText};

/// Output options shared by the scan and parse commands.
#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Print extraction warnings to stderr
    #[arg(long)]
    pub show_warnings: bool,

    /// Accept a record where no field could be read
    #[arg(long)]
    pub allow_empty: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Classify and extract, applying the empty-record policy.
pub fn parse_card(
    raw: &RawText,
    config: &IdScanConfig,
    allow_empty: bool,
) -> anyhow::Result<ExtractionResult> {
    let parser = IdCardParser::from_config(&config.extraction);
    let mut result = parser.parse(raw)?;

    if config.extraction.reject_empty && !allow_empty {
        result.record = result.record.require_any()?;
    }

    Ok(result)
}

/// Write a result to the requested destination.
pub fn emit(result: &ExtractionResult, args: &OutputArgs) -> anyhow::Result<()> {
    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("!").yellow(), warning);
        }
    }

    let output = format_record(&result.record, args.format)?;
    write_output(&output, args.output.as_deref())
}

pub fn write_output(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            eprintln!("{} Output written to {}", style("✓").green(), path.display());
        }
        None => println!("{}", output),
    }
    Ok(())
}

pub fn format_record(record: &FieldRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &FieldRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(Field::ALL.iter().map(|f| f.key()))?;
    wtr.write_record(Field::ALL.iter().map(|f| record.get(*f)))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &FieldRecord) -> String {
    let label = |field: Field| match field {
        Field::Name => "Name",
        Field::DateOfBirth => "Date of birth",
        Field::Gender => "Gender",
        Field::IdNumber => "ID number",
        Field::Address => "Address",
        Field::PostalCode => "Postal code",
    };

    let mut output = String::new();
    for field in Field::ALL {
        let value = record.get(field);
        let value = if value.is_empty() { "-" } else { value };
        output.push_str(&format!("{:<14} {}\n", format!("{}:", label(field)), value));
    }

    if let Some(date) = record.parsed_date_of_birth() {
        output.push_str(&format!("\nBorn {}\n", date.format("%-d %B %Y")));
    } else if !record.date_of_birth.is_empty() {
        warn!("Date of birth {:?} is not a calendar date", record.date_of_birth);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> FieldRecord {
        FieldRecord {
            name: "John Smith".to_string(),
            date_of_birth: "10/10/1990".to_string(),
            gender: "Male".to_string(),
            id_number: "1234 5678 9012".to_string(),
            address: "123 Main Street, Kochi".to_string(),
            postal_code: "682001".to_string(),
        }
    }

    #[test]
    fn test_format_csv() {
        let csv = format_record(&record(), OutputFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("name,dateOfBirth,gender,idNumber,address,postalCode")
        );
        assert_eq!(
            lines.next(),
            Some("John Smith,10/10/1990,Male,1234 5678 9012,\"123 Main Street, Kochi\",682001")
        );
    }

    #[test]
    fn test_format_text_marks_missing() {
        let mut record = record();
        record.gender.clear();
        let text = format_record(&record, OutputFormat::Text).unwrap();
        assert!(text.contains("Gender:        -"));
        assert!(text.contains("Born 10 October 1990"));
    }

    #[test]
    fn test_parse_card_empty_policy() {
        let raw = RawText::new("Government", "India");
        let config = IdScanConfig::default();

        assert!(parse_card(&raw, &config, false).is_err());
        assert!(parse_card(&raw, &config, true).unwrap().record.is_empty());
    }
}
