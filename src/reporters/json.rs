//! JSON reporter
//!
//! One compact `{"text": ..., "score": ...}` object per line. This is both
//! the `--format json` console output and the format of saved batch files.

use crate::models::ScoredMessage;
use anyhow::Result;

/// Render messages as JSON lines
pub fn render(messages: &[ScoredMessage]) -> Result<String> {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&serde_json::to_string(msg)?);
        out.push('\n');
    }
    Ok(out)
}
