//! Output reporters for scored messages
//!
//! Supports two output formats:
//! - `text` - the colored `[score][char codes]...` console lines
//! - `json` - JSON lines, one `{text, score}` object per message
//!
//! [`BatchWriter`] persists each micro-batch to its own timestamped file.

mod json;
pub mod text;

use crate::config::OutputConfig;
use crate::models::ScoredMessage;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render a batch in the given format
pub fn report(messages: &[ScoredMessage], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(messages)),
        OutputFormat::Json => json::render(messages),
    }
}

/// Writes each non-empty batch to `<dir>/<prefix>-<millis>.<suffix>`
#[derive(Debug, Clone)]
pub struct BatchWriter {
    dir: PathBuf,
    prefix: String,
    suffix: String,
}

impl BatchWriter {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
        }
    }

    /// File name for a batch closed at `batch_time`
    pub fn path_for(&self, batch_time: DateTime<Utc>) -> PathBuf {
        self.dir.join(format!(
            "{}-{}.{}",
            self.prefix,
            batch_time.timestamp_millis(),
            self.suffix
        ))
    }

    /// Persist a batch. Empty batches write nothing and return `None`.
    pub fn write(
        &self,
        messages: &[ScoredMessage],
        batch_time: DateTime<Utc>,
    ) -> Result<Option<PathBuf>> {
        if messages.is_empty() {
            return Ok(None);
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.path_for(batch_time);
        std::fs::write(&path, json::render(messages)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Saved {} messages to {}", messages.len(), path.display());
        Ok(Some(path))
    }
}
