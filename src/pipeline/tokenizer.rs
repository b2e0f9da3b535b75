//! Word extraction and normalization
//!
//! Splitting is on the single ASCII space only. Runs of spaces produce
//! empty tokens, which the alphabetic filter then drops together with
//! anything carrying digits, punctuation, hashtags, mentions or URLs.

use regex::Regex;
use std::sync::OnceLock;

fn actual_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]+$").expect("valid regex"))
}

/// Split text into raw words on ' '
pub fn words_of(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Lowercase every word
pub fn to_lower_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| w.as_ref().to_lowercase()).collect()
}

/// Keep only words made entirely of lowercase ASCII letters
pub fn keep_actual_words(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .filter(|w| is_actual_word(w))
        .collect()
}

pub fn is_actual_word(word: &str) -> bool {
    actual_word_pattern().is_match(word)
}

/// Split, lowercase and keep alphabetic tokens, in source order.
pub fn tokenize(text: &str) -> Vec<String> {
    keep_actual_words(to_lower_case(&words_of(text)))
}
