//! # Veritext
//!
//! AI-generated-text detection for student document submissions.
//!
//! Veritext extracts text from uploaded PDF documents through a layered
//! strategy chain, sanitizes it, and scores it for the likelihood that it
//! was produced by an AI assistant. An external classifier service is used
//! when configured; a multi-signal heuristic scorer is always available as
//! the fallback so detection keeps working offline.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use veritext::{DetectionConfig, DetectionOrchestrator, PdfTextExtractor};
//!
//! #[tokio::main]
//! async fn main() -> veritext::Result<()> {
//!     let config = DetectionConfig::default();
//!     let extractor = PdfTextExtractor::new(&config.extraction);
//!     let orchestrator = DetectionOrchestrator::new(&config)?;
//!
//!     let extracted = extractor.extract("essay.pdf".as_ref()).await?;
//!     let result = orchestrator.detect(&extracted.text).await;
//!     println!("{:.1}% likely AI-generated", result.percentage);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`extraction`]: ordered strategy chain (external `pdftotext` binary,
//!   in-process container parsing, raw byte scan), each gated by a minimum
//!   output length
//! - [`text`]: sanitization and the quality gate every accepted text passes
//! - [`scoring`]: the ten-signal heuristic scorer and its phrase tables
//! - [`detection`]: orchestration between the external classifier and the
//!   heuristic fallback
//! - [`batch`]: bounded-concurrency processing of many documents

#![deny(unsafe_code)]

pub mod batch;
pub mod config;
pub mod detection;
pub mod error;
pub mod extraction;
pub mod scoring;
pub mod text;
pub mod types;

pub use batch::{batch_detect_files, BatchSummary, DocumentReport};
pub use config::{ClassifierConfig, DetectionConfig, ExtractionOptions};
pub use detection::{ClassifierClient, DetectionOrchestrator};
pub use error::{Result, VeritextError};
pub use extraction::PdfTextExtractor;
pub use scoring::{HeuristicScorer, ScoreBreakdown};
pub use text::{clean, ensure_sufficient, is_sufficient};
pub use types::{DetectionMethod, DetectionResult, ExtractedText, StrategyKind};
