//! Lexicon scoring
//!
//! Each word contributes +1 when positive, otherwise -1 when negative,
//! otherwise 0. A word listed in both lexicons counts as positive.

use crate::lexicon::Lexicon;

/// Score of a single word
pub fn word_score(word: &str, positive: &Lexicon, negative: &Lexicon) -> i32 {
    if positive.contains(word) {
        1
    } else if negative.contains(word) {
        -1
    } else {
        0
    }
}

/// Sum of word scores. Order-independent.
pub fn score<S: AsRef<str>>(words: &[S], positive: &Lexicon, negative: &Lexicon) -> i32 {
    words
        .iter()
        .map(|w| word_score(w.as_ref(), positive, negative))
        .sum()
}

/// Score, or `None` for a neutral (zero) total.
pub fn non_neutral_score<S: AsRef<str>>(
    words: &[S],
    positive: &Lexicon,
    negative: &Lexicon,
) -> Option<i32> {
    let total = score(words, positive, negative);
    (total != 0).then_some(total)
}
