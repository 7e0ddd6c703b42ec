//! Last-resort raw byte scan.
//!
//! When neither the command-line tool nor the container parsers produce
//! anything, walk the file line by line and keep the fragments that look like
//! prose. Caps on input size, line count, line length and total output keep
//! the scan bounded on arbitrary binary input.

use crate::Result;
use crate::extraction::ExtractionStrategy;
use crate::extraction::container::has_letter_run;
use crate::types::StrategyKind;
use async_trait::async_trait;
use std::path::Path;

const MAX_SCAN_BYTES: usize = 20 * 1024 * 1024;
const MAX_SCAN_LINES: usize = 10_000;
const MAX_LINE_BYTES: usize = 1_000;
const MAX_OUTPUT_CHARS: usize = 5_000;

/// Minimum fraction of printable bytes for a line to be considered at all.
const PRINTABLE_RATIO: f64 = 0.8;

/// Terminal strategy in the chain. Never touches the filesystem itself.
pub struct FallbackScan;

#[async_trait]
impl ExtractionStrategy for FallbackScan {
    fn name(&self) -> &'static str {
        "fallback-scan"
    }

    fn min_length(&self) -> usize {
        10
    }

    async fn try_extract(&self, _path: &Path, bytes: &[u8]) -> Result<Option<(String, StrategyKind)>> {
        let text = scan_bytes(bytes);
        if text.trim().is_empty() {
            Ok(None)
        } else {
            Ok(Some((text, StrategyKind::FallbackScan)))
        }
    }
}

fn scan_bytes(bytes: &[u8]) -> String {
    let window = &bytes[..bytes.len().min(MAX_SCAN_BYTES)];

    let mut fragments: Vec<String> = Vec::new();
    let mut total_chars = 0usize;

    for line in window.split(|&b| b == b'\n').take(MAX_SCAN_LINES) {
        if line.is_empty() || line.len() > MAX_LINE_BYTES {
            continue;
        }

        let printable = line.iter().filter(|&&b| (0x20..=0x7E).contains(&b) || b == b'\t').count();
        if (printable as f64) / (line.len() as f64) <= PRINTABLE_RATIO {
            continue;
        }

        let cleaned = clean_line(line);
        if cleaned.len() <= 10 || cleaned.len() >= 500 {
            continue;
        }
        if !has_letter_run(&cleaned, 3) {
            continue;
        }

        total_chars += cleaned.len();
        fragments.push(cleaned);
        if total_chars > MAX_OUTPUT_CHARS {
            break;
        }
    }

    fragments.join(" ")
}

/// Strip everything outside printable ASCII and collapse whitespace runs.
fn clean_line(line: &[u8]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last_space = true;
    for &b in line {
        let c = match b {
            0x21..=0x7E => b as char,
            b' ' | b'\t' | b'\r' => ' ',
            _ => ' ',
        };
        if c == ' ' {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_collapses_and_strips() {
        assert_eq!(clean_line(b"  hello \x00\x01  world  "), "hello world");
    }

    #[test]
    fn test_scan_keeps_prose_fragments() {
        let bytes = b"\x00\x01\x02\nThis line looks like real prose.\n\xFF\xFE\xFD\xFC\xFB\xFA\xF9\xF8\xF7\xF6\xF5\xF4\n";
        let text = scan_bytes(bytes);
        assert_eq!(text, "This line looks like real prose.");
    }

    #[test]
    fn test_scan_skips_short_and_long_fragments() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"abc\n");
        bytes.extend_from_slice("word ".repeat(200).as_bytes());
        bytes.push(b'\n');
        assert_eq!(scan_bytes(&bytes), "");
    }

    #[test]
    fn test_scan_requires_letter_run() {
        assert_eq!(scan_bytes(b"1 2 3 4 5 6 7 8 9 0 1 2\n"), "");
    }

    #[test]
    fn test_scan_output_is_capped() {
        let mut bytes = Vec::new();
        for i in 0..2_000 {
            bytes.extend_from_slice(format!("line number {i} with ordinary words\n").as_bytes());
        }
        let text = scan_bytes(&bytes);
        assert!(text.len() <= MAX_OUTPUT_CHARS + 500);
    }

    #[tokio::test]
    async fn test_strategy_returns_none_for_binary_noise() {
        let noise: Vec<u8> = (0u32..4_096).map(|i| (i.wrapping_mul(2_654_435_761) >> 13) as u8).collect();
        let strategy = FallbackScan;
        assert!(strategy.try_extract(Path::new("unused.pdf"), &noise).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_strategy_extracts_plain_text() {
        let strategy = FallbackScan;
        let (text, kind) = strategy
            .try_extract(Path::new("unused.pdf"), b"Plain text saved with a pdf extension.\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kind, StrategyKind::FallbackScan);
        assert!(text.contains("Plain text"));
    }
}
