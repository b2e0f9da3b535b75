//! Error types for the tweetmood library

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading resources or configuration.
///
/// The per-message pipeline itself never fails: empty and neutral
/// messages are dropped, not reported.
#[derive(Error, Debug)]
pub enum TweetmoodError {
    #[error("Lexicon resource not found or unreadable: {path}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid execution mode '{0}'. Expected local-all-cores, local, local[*] or local[N]")]
    InvalidExecutionMode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type TweetmoodResult<T> = Result<T, TweetmoodError>;
