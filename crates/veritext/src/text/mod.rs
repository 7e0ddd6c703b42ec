//! Text normalization and the pre-scoring quality gate.
//!
//! Every extraction strategy's output passes through [`clean`] before it is
//! returned to callers, and [`is_sufficient`] decides whether the normalized
//! text carries enough signal to be worth scoring at all.

use crate::{Result, VeritextError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum word count for analyzable text.
const MIN_WORDS: usize = 10;
/// Minimum trimmed character count for analyzable text.
const MIN_CHARS: usize = 50;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace run pattern is valid"));
static PUNCT_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([,.!?;:])\s*").expect("punctuation spacing pattern is valid"));

/// Normalize raw extracted text into a single-spaced, printable form.
///
/// Pure and infallible; the worst case is an empty string. Steps, in order:
/// collapse whitespace runs, strip characters outside printable ASCII and the
/// Latin-1 supplement (0x20-0x7E, 0xA0-0xFF), normalize spacing around
/// sentence punctuation to `"<punct> "`, collapse again, trim.
///
/// The function is idempotent: `clean(clean(x)) == clean(x)`.
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let collapsed = WHITESPACE_RUN.replace_all(text, " ");

    let printable: String = collapsed
        .chars()
        .filter(|&c| {
            let code = c as u32;
            (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code)
        })
        .collect();

    let spaced = PUNCT_SPACING.replace_all(&printable, "$1 ");

    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}

/// Whether text passes the minimum word/character bar for scoring.
///
/// Rule: word count >= 10 AND trimmed character count >= 50. Applied before
/// any scoring; insufficient text short-circuits to a "cannot analyze"
/// result with no score.
pub fn is_sufficient(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() >= MIN_CHARS && trimmed.split_whitespace().count() >= MIN_WORDS
}

/// The quality gate as a fallible check, for callers that report or
/// propagate the rejection.
pub fn ensure_sufficient(text: &str) -> Result<()> {
    if is_sufficient(text) {
        Ok(())
    } else {
        Err(VeritextError::InsufficientText(
            "text too short to analyze".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "");
        assert_eq!(clean("\n\t\r"), "");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        assert_eq!(clean("hello   world\n\nagain"), "hello world again");
    }

    #[test]
    fn test_clean_strips_non_printable() {
        let text = "con\u{0}trol\u{7f} chars \u{2603} here";
        let cleaned = clean(text);
        assert!(!cleaned.contains('\u{0}'));
        assert!(!cleaned.contains('\u{2603}'));
        assert!(cleaned.contains("trol"));
    }

    #[test]
    fn test_clean_keeps_latin1_supplement() {
        let cleaned = clean("café naïve");
        assert_eq!(cleaned, "café naïve");
    }

    #[test]
    fn test_clean_normalizes_punctuation_spacing() {
        assert_eq!(clean("Hello , world .How are you ?Fine"), "Hello, world. How are you? Fine");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let samples = [
            "Hello ,world!   How  are\tyou?",
            "plain text",
            "a  b  c . d",
            "trailing punctuation .",
        ];
        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "clean not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_is_sufficient_accepts_normal_text() {
        let text = "These are ten meaningful words stretched over fifty characters total.";
        assert!(is_sufficient(text));
    }

    #[test]
    fn test_is_sufficient_rejects_49_chars() {
        // 49 characters, plenty of words
        let text = "one two three four five six seven eight nine tenn";
        assert_eq!(text.len(), 49);
        assert!(!is_sufficient(text));
    }

    #[test]
    fn test_is_sufficient_boundary_50_chars_10_words() {
        // exactly 50 characters and exactly 10 words
        let text = "one two three four five six seven eight nine tennn";
        assert_eq!(text.len(), 50);
        assert_eq!(text.split_whitespace().count(), 10);
        assert!(is_sufficient(text));
    }

    #[test]
    fn test_is_sufficient_rejects_few_words() {
        // >= 50 chars but only 2 words
        let text = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa bbbbbbbbbbbbbbbbbbbbbbbbbbb";
        assert!(!is_sufficient(text));
    }

    #[test]
    fn test_ensure_sufficient_error_variant() {
        let err = ensure_sufficient("tiny").unwrap_err();
        assert!(matches!(err, VeritextError::InsufficientText(_)));
        assert!(err.to_string().contains("too short"));

        assert!(ensure_sufficient(
            "These are ten meaningful words stretched over fifty characters total."
        )
        .is_ok());
    }

    #[test]
    fn test_is_sufficient_trims_first() {
        let text = format!("   {}   ", "word ".repeat(9).trim());
        assert!(!is_sufficient(&text));
    }
}
