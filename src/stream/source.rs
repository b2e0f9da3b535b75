//! Line-oriented message source
//!
//! Each input line is one message: either a JSON object
//! `{"text": "...", "lang": "en"}` or, in plain mode, the raw text itself
//! tagged with the target language.

use crate::models::Message;
use std::io::BufRead;
use tracing::warn;

/// How input lines are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    #[default]
    JsonLines,
    Plain,
}

/// Counters kept by the reader thread
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    pub lines: usize,
    pub blank: usize,
    pub malformed: usize,
}

/// Decode one input line. Blank and malformed lines yield `None`.
pub fn parse_line(line: &str, format: InputFormat, default_lang: &str) -> Option<Message> {
    if line.trim().is_empty() {
        return None;
    }
    match format {
        InputFormat::Plain => Some(Message::new(line, default_lang)),
        InputFormat::JsonLines => serde_json::from_str(line).ok(),
    }
}

/// Read every line of `input`, handing decoded messages to `emit`.
///
/// Lines that are not valid UTF-8 count as malformed and are skipped.
/// Stops early when `emit` returns `false` (the consumer went away) or the
/// input fails to read.
pub fn read_messages<R, F>(
    mut input: R,
    format: InputFormat,
    default_lang: &str,
    mut emit: F,
) -> SourceStats
where
    R: BufRead,
    F: FnMut(Message) -> bool,
{
    let mut stats = SourceStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("Stopped reading input at line {}: {}", stats.lines + 1, e);
                break;
            }
        }
        stats.lines += 1;
        let line_no = stats.lines;

        let Ok(line) = std::str::from_utf8(strip_line_ending(&buf)) else {
            stats.malformed += 1;
            warn!("Skipping input line {}: not valid UTF-8", line_no);
            continue;
        };
        if line.trim().is_empty() {
            stats.blank += 1;
            continue;
        }
        let Some(message) = parse_line(line, format, default_lang) else {
            stats.malformed += 1;
            warn!("Skipping malformed input line {}", line_no);
            continue;
        };
        if !emit(message) {
            break;
        }
    }
    stats
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_json_line() {
        let msg = parse_line(r#"{"text": "good day", "lang": "en"}"#, InputFormat::JsonLines, "en")
            .unwrap();
        assert_eq!(msg, Message::new("good day", "en"));
    }

    #[test]
    fn test_json_line_extra_fields_ignored() {
        let msg = parse_line(
            r#"{"id": 7, "text": "bonjour", "lang": "fr", "user": "x"}"#,
            InputFormat::JsonLines,
            "en",
        )
        .unwrap();
        assert!(!msg.is_lang("en"));
    }

    #[test]
    fn test_plain_line_tagged_with_default_lang() {
        let msg = parse_line("Great game!", InputFormat::Plain, "en").unwrap();
        assert_eq!(msg, Message::new("Great game!", "en"));
    }

    #[test]
    fn test_blank_and_malformed() {
        assert!(parse_line("   ", InputFormat::Plain, "en").is_none());
        assert!(parse_line("not json", InputFormat::JsonLines, "en").is_none());
        assert!(parse_line(r#"{"lang": "en"}"#, InputFormat::JsonLines, "en").is_none());
    }

    #[test]
    fn test_read_messages_counts() {
        let input = Cursor::new(
            "{\"text\": \"a\", \"lang\": \"en\"}\n\nbroken\n{\"text\": \"b\", \"lang\": \"en\"}\n",
        );
        let mut seen = Vec::new();
        let stats = read_messages(input, InputFormat::JsonLines, "en", |m| {
            seen.push(m.text);
            true
        });
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(
            stats,
            SourceStats {
                lines: 4,
                blank: 1,
                malformed: 1,
            }
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut input = b"good one\n".to_vec();
        input.extend_from_slice(b"bad \xff byte\n");
        input.extend_from_slice(b"second\r\nthird");

        let mut seen = Vec::new();
        let stats = read_messages(Cursor::new(input), InputFormat::Plain, "en", |m| {
            seen.push(m.text);
            true
        });
        assert_eq!(seen, vec!["good one", "second", "third"]);
        assert_eq!(
            stats,
            SourceStats {
                lines: 4,
                blank: 0,
                malformed: 1,
            }
        );
    }

    #[test]
    fn test_read_messages_stops_when_consumer_gone() {
        let input = Cursor::new("one\ntwo\nthree\n");
        let mut seen = 0;
        read_messages(input, InputFormat::Plain, "en", |_| {
            seen += 1;
            false
        });
        assert_eq!(seen, 1);
    }
}
