//! Core data types shared across the detection pipeline.

use serde::{Deserialize, Serialize};

/// Which extraction strategy produced a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    CommandLineTool,
    StreamParse,
    TextObjectParse,
    CompressedStreamParse,
    FallbackScan,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::CommandLineTool => "command-line-tool",
            StrategyKind::StreamParse => "stream-parse",
            StrategyKind::TextObjectParse => "text-object-parse",
            StrategyKind::CompressedStreamParse => "compressed-stream-parse",
            StrategyKind::FallbackScan => "fallback-scan",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sanitized text produced by one extraction strategy, tagged with the
/// strategy that produced it. Always non-empty at the point of acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub strategy: StrategyKind,
}

/// Which path produced a detection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    /// The external classifier endpoint answered.
    External,
    /// The in-process heuristic scorer was used.
    Heuristic,
}

/// Outcome of analyzing one document's text.
///
/// The only artifact this core hands to external collaborators; downstream
/// persistence attaches `percentage` to a submission record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// AI-likelihood in [0, 1].
    pub score: f64,
    /// `score` as a percentage rounded to one decimal place.
    pub percentage: f64,
    /// Human-readable error, set only when no score could be produced.
    pub error: Option<String>,
    pub method: DetectionMethod,
}

impl DetectionResult {
    /// Successful result from a raw probability.
    pub fn scored(score: f64, method: DetectionMethod) -> Self {
        Self {
            score,
            percentage: round_percentage(score * 100.0),
            error: None,
            method,
        }
    }

    /// Terminal "cannot analyze" result carrying no score.
    pub fn unscorable<S: Into<String>>(reason: S) -> Self {
        Self {
            score: 0.0,
            percentage: 0.0,
            error: Some(reason.into()),
            method: DetectionMethod::Heuristic,
        }
    }
}

/// Round to one decimal place, the precision stored on submission records.
pub(crate) fn round_percentage(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
