//! In-process PDF container parsing.
//!
//! Three sub-parsers over the raw PDF bytes, whose outputs concatenate into a
//! single acceptance pool:
//!
//! - uncompressed `stream…endstream` ranges, character-filtered and
//!   line-filtered
//! - literal string operands of the `Tj`/`TJ` text-show operators inside
//!   `BT…ET` blocks
//! - `/FlateDecode` streams, decompressed through the raw-deflate and
//!   zlib-wrapped codec entry points and then character-filtered
//!
//! Each sub-parser failing individually (bad escape, corrupt deflate data) is
//! normal for hostile input; errors stay inside the sub-parser and only cost
//! its contribution.

use crate::Result;
use crate::extraction::ExtractionStrategy;
use crate::types::StrategyKind;
use async_trait::async_trait;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use memchr::memmem;
use once_cell::sync::Lazy;
use std::io::Read;
use std::path::Path;

/// Candidate compressed streams above this size are skipped.
const MAX_COMPRESSED_LEN: usize = 5 * 1024 * 1024;
/// Decompression output cap per stream.
const MAX_DECOMPRESSED_LEN: u64 = 10 * 1024 * 1024;

static TJ_SINGLE: Lazy<regex::bytes::Regex> = Lazy::new(|| {
    regex::bytes::Regex::new(r"(?s-u)\(((?:[^()\\]|\\.)*)\)\s*Tj").expect("Tj operand pattern is valid")
});
static TJ_ARRAY: Lazy<regex::bytes::Regex> = Lazy::new(|| {
    regex::bytes::Regex::new(r"(?s-u)\[((?:[^\[\]\\]|\\.)*)\]\s*TJ").expect("TJ operand pattern is valid")
});
static LITERAL_STRING: Lazy<regex::bytes::Regex> = Lazy::new(|| {
    regex::bytes::Regex::new(r"(?s-u)\(((?:[^()\\]|\\.)*)\)").expect("literal string pattern is valid")
});

/// Second-priority strategy: all in-process container parsing as one pool.
pub struct ContainerParse;

#[async_trait]
impl ExtractionStrategy for ContainerParse {
    fn name(&self) -> &'static str {
        "container-parse"
    }

    fn min_length(&self) -> usize {
        20
    }

    async fn try_extract(&self, _path: &Path, bytes: &[u8]) -> Result<Option<(String, StrategyKind)>> {
        let stream_text = parse_streams(bytes);
        let object_text = parse_text_objects(bytes);
        let deflate_text = parse_flate_streams(bytes);

        // The pool is tagged by its first contributor.
        let kind = if !stream_text.trim().is_empty() {
            StrategyKind::StreamParse
        } else if !object_text.trim().is_empty() {
            StrategyKind::TextObjectParse
        } else if !deflate_text.trim().is_empty() {
            StrategyKind::CompressedStreamParse
        } else {
            return Ok(None);
        };

        let combined = [stream_text, object_text, deflate_text]
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Some((combined, kind)))
    }
}

/// Map raw bytes to a printable string: ASCII 32-126 kept, LF preserved for
/// line splitting, tab/CR and everything else become spaces.
pub(crate) fn filter_printable(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x20..=0x7E => b as char,
            b'\n' => '\n',
            _ => ' ',
        })
        .collect()
}

/// A line is meaningful when it is longer than 3 chars and contains at least
/// `run` consecutive ASCII letters.
pub(crate) fn has_letter_run(line: &str, run: usize) -> bool {
    let mut current = 0usize;
    for c in line.chars() {
        if c.is_ascii_alphabetic() {
            current += 1;
            if current >= run {
                return true;
            }
        } else {
            current = 0;
        }
    }
    false
}

fn meaningful_lines(filtered: &str) -> String {
    filtered
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 3 && has_letter_run(line, 2))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Iterate `stream…endstream` payload ranges. Occurrences of "stream" that
/// are actually the tail of "endstream" are skipped, as are streams whose
/// dictionary declares `/FlateDecode` (those belong to the flate sub-parser,
/// and scanning their compressed bytes only produces noise).
fn stream_ranges(bytes: &[u8]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    for start in memmem::find_iter(bytes, b"stream") {
        if start >= 3 && &bytes[start - 3..start] == b"end" {
            continue;
        }
        let dict_start = start.saturating_sub(256);
        if memmem::find(&bytes[dict_start..start], b"/FlateDecode").is_some() {
            continue;
        }
        let mut payload = start + b"stream".len();
        // The stream keyword is followed by CRLF or LF before the payload.
        if bytes.get(payload) == Some(&b'\r') {
            payload += 1;
        }
        if bytes.get(payload) == Some(&b'\n') {
            payload += 1;
        }
        if let Some(rel_end) = memmem::find(&bytes[payload..], b"endstream") {
            ranges.push((payload, payload + rel_end));
        }
    }
    ranges
}

/// Sub-parser 1: character-filter every uncompressed stream payload.
fn parse_streams(bytes: &[u8]) -> String {
    let mut parts = Vec::new();
    for (start, end) in stream_ranges(bytes) {
        let filtered = filter_printable(&bytes[start..end]);
        let meaningful = meaningful_lines(&filtered);
        if !meaningful.is_empty() {
            parts.push(meaningful);
        }
    }
    parts.join(" ")
}

/// Sub-parser 2: literal string operands of text-show operators inside
/// `BT…ET` blocks, unescaped and joined with spaces.
fn parse_text_objects(bytes: &[u8]) -> String {
    let mut parts = Vec::new();

    let mut cursor = 0usize;
    while let Some(rel_bt) = memmem::find(&bytes[cursor..], b"BT") {
        let bt = cursor + rel_bt + 2;
        let Some(rel_et) = memmem::find(&bytes[bt..], b"ET") else {
            break;
        };
        let block = &bytes[bt..bt + rel_et];

        for caps in TJ_SINGLE.captures_iter(block) {
            if let Some(operand) = caps.get(1) {
                push_unescaped(&mut parts, operand.as_bytes());
            }
        }
        for caps in TJ_ARRAY.captures_iter(block) {
            if let Some(array) = caps.get(1) {
                for inner in LITERAL_STRING.captures_iter(array.as_bytes()) {
                    if let Some(operand) = inner.get(1) {
                        push_unescaped(&mut parts, operand.as_bytes());
                    }
                }
            }
        }

        cursor = bt + rel_et + 2;
    }

    parts.join(" ")
}

fn push_unescaped(parts: &mut Vec<String>, operand: &[u8]) {
    let text = unescape_pdf_string(operand);
    if !text.trim().is_empty() {
        parts.push(text);
    }
}

/// Resolve the PDF literal-string escapes `\n \r \t \( \) \\`. Unknown
/// escapes keep the escaped character; non-ASCII bytes become spaces.
fn unescape_pdf_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\\' {
            match iter.next() {
                Some(b'n') => out.push('\n'),
                Some(b'r') => out.push('\r'),
                Some(b't') => out.push('\t'),
                Some(b'(') => out.push('('),
                Some(b')') => out.push(')'),
                Some(b'\\') => out.push('\\'),
                Some(other) if other.is_ascii_graphic() || other == b' ' => out.push(other as char),
                Some(_) => out.push(' '),
                None => {}
            }
        } else if (0x20..=0x7E).contains(&b) {
            out.push(b as char);
        } else {
            out.push(' ');
        }
    }
    out
}

/// Sub-parser 3: decompress `/FlateDecode` streams and character-filter the
/// result. Candidates are size-guarded in both directions.
fn parse_flate_streams(bytes: &[u8]) -> String {
    let mut parts = Vec::new();

    for marker in memmem::find_iter(bytes, b"/FlateDecode") {
        let Some(rel_stream) = memmem::find(&bytes[marker..], b"stream") else {
            continue;
        };
        let mut payload = marker + rel_stream + b"stream".len();
        if bytes.get(payload) == Some(&b'\r') {
            payload += 1;
        }
        if bytes.get(payload) == Some(&b'\n') {
            payload += 1;
        }
        let Some(rel_end) = memmem::find(&bytes[payload..], b"endstream") else {
            continue;
        };
        let compressed = &bytes[payload..payload + rel_end];
        if compressed.is_empty() || compressed.len() > MAX_COMPRESSED_LEN {
            continue;
        }

        if let Some(decompressed) = inflate_guarded(compressed) {
            let filtered = filter_printable(&decompressed);
            let meaningful = meaningful_lines(&filtered);
            if !meaningful.is_empty() {
                parts.push(meaningful);
            }
        }
    }

    parts.join(" ")
}

/// Try the zlib-wrapped entry point first (PDF FlateDecode data normally
/// carries the zlib header), then raw deflate. Output capped per stream.
fn inflate_guarded(compressed: &[u8]) -> Option<Vec<u8>> {
    let mut out = Vec::new();
    let mut zlib = ZlibDecoder::new(compressed).take(MAX_DECOMPRESSED_LEN);
    if zlib.read_to_end(&mut out).is_ok() && !out.is_empty() {
        return Some(out);
    }

    out.clear();
    let mut raw = DeflateDecoder::new(compressed).take(MAX_DECOMPRESSED_LEN);
    match raw.read_to_end(&mut out) {
        Ok(_) if !out.is_empty() => Some(out),
        _ => {
            tracing::debug!(len = compressed.len(), "flate candidate failed both codec entry points");
            None
        }
    }
}
