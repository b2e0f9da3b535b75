//! Stop-word removal

use crate::lexicon::Lexicon;

/// Remove stop words, keeping the order of the rest.
pub fn keep_meaningful_words(tokens: Vec<String>, stop_words: &Lexicon) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|w| !stop_words.contains(w))
        .collect()
}

/// Like [`keep_meaningful_words`], but `None` when nothing is left.
pub fn filter_meaningful(tokens: Vec<String>, stop_words: &Lexicon) -> Option<Vec<String>> {
    let meaningful = keep_meaningful_words(tokens, stop_words);
    (!meaningful.is_empty()).then_some(meaningful)
}
