//! Flavor Prep - Corpus export
//!
//! Writes labeled cards as JSON Lines or CSV with the columns
//! `name,colors,flavor_text`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::monocolor::MonocolorCard;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON Lines format (one JSON object per line)
    Jsonl,
    /// Comma-separated values with header row
    Csv,
}

impl OutputFormat {
    /// Detect format from file extension
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("csv") => OutputFormat::Csv,
            _ => OutputFormat::Jsonl,
        }
    }

    /// Parse format from string (for CLI)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "jsonl" | "json" | "ndjson" => Some(OutputFormat::Jsonl),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}

/// Write `cards` to any writer in the given format.
pub fn write_cards<W: Write>(writer: W, cards: &[MonocolorCard], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jsonl => {
            let mut writer = BufWriter::new(writer);
            for card in cards {
                serde_json::to_writer(&mut writer, card)
                    .with_context(|| format!("Failed to serialize {:?}", card.name))?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for card in cards {
                writer
                    .serialize(card)
                    .with_context(|| format!("Failed to write CSV row for {:?}", card.name))?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write `cards` to `path`, or to stdout when `path` is `-`.
pub fn export_cards(path: &str, cards: &[MonocolorCard], format: OutputFormat) -> Result<()> {
    if path == "-" {
        return write_cards(io::stdout().lock(), cards, format);
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path))?;
    write_cards(file, cards, format)
}
