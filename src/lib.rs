//! Tweetmood - lexicon-based sentiment scoring for message streams
//!
//! Splits each message into words, drops stop words, scores the rest
//! against positive/negative word lists and keeps only non-neutral
//! messages. The [`stream`] module wraps that core in a small local
//! micro-batching harness used by the `tweetmood` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod stream;

pub use error::{TweetmoodError, TweetmoodResult};
pub use lexicon::{Lexicon, Lexicons};
pub use models::{BatchStats, Message, ScoredMessage};
pub use pipeline::Pipeline;
