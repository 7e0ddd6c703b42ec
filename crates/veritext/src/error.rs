//! Error types for veritext.
//!
//! All fallible operations return [`Result`], which wraps [`VeritextError`].
//! The taxonomy mirrors the per-document outcomes the detection pipeline can
//! produce:
//!
//! - `Io` - file system errors; these always bubble up unchanged
//! - `FileNotFound` / `TooLarge` - extraction preconditions
//! - `ExtractionFailed` - every extraction strategy was exhausted
//! - `InsufficientText` - the quality gate rejected the text
//! - `Classifier` - external classifier call failed (recovered internally via
//!   the heuristic fallback; callers only see this if they call the client
//!   directly)
//! - `Scoring` - unexpected failure inside the heuristic scorer
//!
//! Extraction and gating failures are terminal per-document outcomes surfaced
//! as structured errors. Nothing in this crate is fatal to a batch: one
//! document's error never aborts the others.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `VeritextError`.
pub type Result<T> = std::result::Result<T, VeritextError>;

/// Main error type for all veritext operations.
#[derive(Debug, Error)]
pub enum VeritextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("file too large: {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("extraction failed: no strategy produced usable text")]
    ExtractionFailed,

    #[error("insufficient text: {0}")]
    InsufficientText(String),

    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("scoring error: {0}")]
    Scoring(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl VeritextError {
    /// Create a Classifier error.
    pub fn classifier<S: Into<String>>(message: S) -> Self {
        Self::Classifier {
            message: message.into(),
            source: None,
        }
    }

    /// Create a Classifier error with source.
    pub fn classifier_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Classifier {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The human-readable string attached to per-document reports. Never
    /// includes backtraces or internal diagnostics.
    pub fn report_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for VeritextError {
    fn from(err: reqwest::Error) -> Self {
        VeritextError::Classifier {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VeritextError = io_err.into();
        assert!(matches!(err, VeritextError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = VeritextError::FileNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.pdf");
    }

    #[test]
    fn test_too_large_display() {
        let err = VeritextError::TooLarge {
            size: 60_000_000,
            limit: 52_428_800,
        };
        assert!(err.to_string().contains("60000000"));
        assert!(err.to_string().contains("52428800"));
    }

    #[test]
    fn test_classifier_error_with_source() {
        let source = std::io::Error::other("connection refused");
        let err = VeritextError::classifier_with_source("endpoint unreachable", source);
        assert_eq!(err.to_string(), "classifier error: endpoint unreachable");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_insufficient_text_display() {
        let err = VeritextError::InsufficientText("text too short to analyze".to_string());
        assert_eq!(err.to_string(), "insufficient text: text too short to analyze");
    }

    #[test]
    fn test_report_message_is_plain() {
        let err = VeritextError::ExtractionFailed;
        assert_eq!(err.report_message(), "extraction failed: no strategy produced usable text");
    }

    #[test]
    fn test_io_error_bubbles_unchanged() {
        fn read_file() -> Result<String> {
            let content = std::fs::read_to_string("/nonexistent/file.txt")?;
            Ok(content)
        }

        let result = read_file();
        assert!(matches!(result.unwrap_err(), VeritextError::Io(_)));
    }
}
