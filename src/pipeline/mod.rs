//! Message scoring pipeline
//!
//! Runs each message through:
//! 1. Tokenize (split on spaces, lowercase, keep alphabetic words)
//! 2. Drop stop words, discarding the message if nothing is left
//! 3. Score against the positive/negative lexicons, discarding neutral
//!    messages
//! 4. Render the display line
//!
//! Every stage is a pure function over immutable input, so a batch can be
//! scored on any number of threads sharing one `Arc<Lexicons>`.

pub mod filter;
pub mod scorer;
pub mod tokenizer;

pub use filter::{filter_meaningful, keep_meaningful_words};
pub use scorer::{non_neutral_score, score, word_score};
pub use tokenizer::tokenize;

use crate::lexicon::Lexicons;
use crate::models::{BatchStats, Message, ScoredMessage};
use crate::reporters::text;
use rayon::prelude::*;
use std::sync::Arc;

/// Why a message did not make it through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropped {
    OffLanguage,
    Empty,
    Neutral,
}

/// Every intermediate value for one message, for inspection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub tokens: Vec<String>,
    pub meaningful: Vec<String>,
    pub score: i32,
    /// `None` when the message would be dropped
    pub display: Option<String>,
}

/// Scoring pipeline over a shared lexicon bundle.
#[derive(Debug, Clone)]
pub struct Pipeline {
    lexicons: Arc<Lexicons>,
    /// Style score tags with ANSI colors
    color: bool,
}

impl Pipeline {
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self {
            lexicons,
            color: true,
        }
    }

    /// Render display lines without ANSI colors.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Meaningful words of `text`, or `None` when none are left
    pub fn meaningful_words(&self, text: &str) -> Option<Vec<String>> {
        filter_meaningful(tokenize(text), &self.lexicons.stop)
    }

    /// Non-zero score of `text`, or `None` when it is dropped
    pub fn score_text(&self, text: &str) -> Option<i32> {
        let words = self.meaningful_words(text)?;
        non_neutral_score(&words, &self.lexicons.positive, &self.lexicons.negative)
    }

    /// Score one message's text, reporting why it was dropped.
    pub fn evaluate(&self, text: &str) -> Result<ScoredMessage, Dropped> {
        let words = self.meaningful_words(text).ok_or(Dropped::Empty)?;
        let score = non_neutral_score(&words, &self.lexicons.positive, &self.lexicons.negative)
            .ok_or(Dropped::Neutral)?;
        Ok(ScoredMessage {
            text: text.to_string(),
            score,
            display: text::render_line(text, score, self.color),
        })
    }

    /// Score one message's text. The message must already be in the
    /// target language.
    pub fn process(&self, text: &str) -> Option<ScoredMessage> {
        self.evaluate(text).ok()
    }

    /// Every stage's output for `text`, including dropped messages
    pub fn trace(&self, text: &str) -> Trace {
        let tokens = tokenize(text);
        let meaningful = keep_meaningful_words(tokens.clone(), &self.lexicons.stop);
        let score = score(&meaningful, &self.lexicons.positive, &self.lexicons.negative);
        let display = (!meaningful.is_empty() && score != 0)
            .then(|| text::render_line(text, score, self.color));
        Trace {
            tokens,
            meaningful,
            score,
            display,
        }
    }

    /// Score a batch in parallel on the current rayon pool.
    ///
    /// Messages not tagged with `language` are dropped first. The retained
    /// messages keep their input order.
    pub fn process_batch(
        &self,
        messages: &[Message],
        language: &str,
    ) -> (Vec<ScoredMessage>, BatchStats) {
        let outcomes: Vec<Result<ScoredMessage, Dropped>> = messages
            .par_iter()
            .map(|msg| {
                if !msg.is_lang(language) {
                    return Err(Dropped::OffLanguage);
                }
                self.evaluate(&msg.text)
            })
            .collect();

        let mut stats = BatchStats {
            received: messages.len(),
            ..Default::default()
        };
        let mut retained = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            match outcome {
                Ok(scored) => retained.push(scored),
                Err(Dropped::OffLanguage) => stats.off_language += 1,
                Err(Dropped::Empty) => stats.empty += 1,
                Err(Dropped::Neutral) => stats.neutral += 1,
            }
        }
        stats.retained = retained.len();
        (retained, stats)
    }
}
