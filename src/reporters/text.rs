//! Text (terminal) reporter
//!
//! Each retained message becomes one line: the score as `[%2d]`, colored
//! by polarity, followed directly by the message rendered as a list of
//! character codes and a trailing `...`.

use crate::models::{Polarity, ScoredMessage};
use console::Style;

/// UTF-16 code units of the message shown before truncation
pub const MAX_TEXT_CHARS: usize = 80;

fn polarity_style(polarity: Polarity) -> Option<Style> {
    match polarity {
        Polarity::Positive => Some(Style::new().green()),
        Polarity::Negative => Some(Style::new().red()),
        Polarity::Neutral => None,
    }
}

/// `[ 3]`, with the number styled when `color` is set
pub fn render_score(score: i32, color: bool) -> String {
    let number = format!("{:2}", score);
    let number = match polarity_style(Polarity::of(score)) {
        Some(style) if color => style.force_styling(true).apply_to(number).to_string(),
        _ => number,
    };
    format!("[{}]", number)
}

/// UTF-16 code units of the first line of `text`, at most 80 of them,
/// followed by `...`. Characters outside the BMP show as surrogate pairs.
pub fn render_text(text: &str) -> String {
    let codes: Vec<String> = text
        .encode_utf16()
        .take_while(|&u| u != u16::from(b'\n'))
        .take(MAX_TEXT_CHARS)
        .map(|u| u.to_string())
        .collect();
    format!("[{}]...", codes.join(", "))
}

/// Full display line for a (text, score) pair
pub fn render_line(text: &str, score: i32, color: bool) -> String {
    format!("{}{}", render_score(score, color), render_text(text))
}

/// Render a batch, one message per line
pub fn render(messages: &[ScoredMessage]) -> String {
    let mut out = String::new();
    for msg in messages {
        out.push_str(&msg.display);
        out.push('\n');
    }
    out
}
