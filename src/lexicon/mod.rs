//! Word lexicons used for filtering and scoring
//!
//! A lexicon file is plain UTF-8 text with one word per line, no header.
//! Entries are lowercased on load because every lookup is made with an
//! already-lowercased token. Blank lines are skipped.
//!
//! The three lexicons are loaded once at startup, wrapped in an `Arc`
//! and shared read-only by every worker.

use crate::config::LexiconConfig;
use crate::error::{TweetmoodError, TweetmoodResult};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Starter lexicons shipped with the crate, written out by `tweetmood init`
pub const BUILTIN_STOP_WORDS: &str = include_str!("../../resources/stop-words.dat");
pub const BUILTIN_POSITIVE_WORDS: &str = include_str!("../../resources/pos-words.dat");
pub const BUILTIN_NEGATIVE_WORDS: &str = include_str!("../../resources/neg-words.dat");

/// An immutable set of lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: FxHashSet<String>,
}

impl Lexicon {
    /// Load a lexicon from a newline-delimited file
    pub fn load(path: &Path) -> TweetmoodResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| TweetmoodError::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            })?;
        let lexicon = Self::parse(&content);
        debug!("Loaded {} words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Build a lexicon from file content. A leading UTF-8 BOM is ignored.
    pub fn parse(content: &str) -> Self {
        content
            .strip_prefix('\u{feff}')
            .unwrap_or(content)
            .lines()
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// The stop, positive and negative lexicons
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub stop: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    pub fn new(stop: Lexicon, positive: Lexicon, negative: Lexicon) -> Self {
        Self {
            stop,
            positive,
            negative,
        }
    }

    /// The starter lexicons compiled into the binary
    pub fn builtin() -> Self {
        Self {
            stop: Lexicon::parse(BUILTIN_STOP_WORDS),
            positive: Lexicon::parse(BUILTIN_POSITIVE_WORDS),
            negative: Lexicon::parse(BUILTIN_NEGATIVE_WORDS),
        }
    }

    /// Load all three lexicons from the configured resource root.
    ///
    /// Any missing file aborts the load: scoring without a lexicon
    /// would silently produce wrong results.
    pub fn load(config: &LexiconConfig) -> TweetmoodResult<Arc<Self>> {
        let root = Path::new(&config.root);
        let lexicons = Self {
            stop: Lexicon::load(&root.join(&config.stop))?,
            positive: Lexicon::load(&root.join(&config.positive))?,
            negative: Lexicon::load(&root.join(&config.negative))?,
        };
        info!(
            "Lexicons loaded from {}: {} stop, {} positive, {} negative",
            root.display(),
            lexicons.stop.len(),
            lexicons.positive.len(),
            lexicons.negative.len()
        );
        Ok(Arc::new(lexicons))
    }
}
