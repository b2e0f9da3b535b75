//! Core data models for Tweetmood
//!
//! These models flow between the ingestion source, the scoring pipeline
//! and the reporters.

use serde::{Deserialize, Serialize};

/// Polarity of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

impl Polarity {
    pub fn of(score: i32) -> Self {
        match score {
            s if s > 0 => Polarity::Positive,
            s if s < 0 => Polarity::Negative,
            _ => Polarity::Neutral,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
            Polarity::Positive => write!(f, "positive"),
        }
    }
}

/// A raw input message and its language tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// Language tag as reported by the source ("en", "fr", ...)
    #[serde(default)]
    pub lang: Option<String>,
}

impl Message {
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: Some(lang.into()),
        }
    }

    /// Whether this message is tagged with the given language
    pub fn is_lang(&self, target: &str) -> bool {
        self.lang
            .as_deref()
            .is_some_and(|l| l.eq_ignore_ascii_case(target))
    }
}

/// A message that survived filtering, with its non-zero score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMessage {
    pub text: String,
    pub score: i32,
    /// Rendered console line; not persisted
    #[serde(skip)]
    pub display: String,
}

impl ScoredMessage {
    pub fn polarity(&self) -> Polarity {
        Polarity::of(self.score)
    }
}

/// Per-batch counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Messages pulled from the source
    pub received: usize,
    /// Messages rejected by the language gate
    pub off_language: usize,
    /// Messages with no meaningful words left
    pub empty: usize,
    /// Messages whose score summed to zero
    pub neutral: usize,
    /// Messages emitted
    pub retained: usize,
}

impl BatchStats {
    /// Fold another batch's counters into this one
    pub fn absorb(&mut self, other: &BatchStats) {
        self.received += other.received;
        self.off_language += other.off_language;
        self.empty += other.empty;
        self.neutral += other.neutral;
        self.retained += other.retained;
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} received, {} retained ({} off-language, {} empty, {} neutral)",
            self.received, self.retained, self.off_language, self.empty, self.neutral
        )
    }
}
