//! Multi-strategy PDF text extraction.
//!
//! [`PdfTextExtractor`] runs an ordered chain of strategies against a PDF
//! file and returns the first output that passes its strategy's minimum
//! length gate, sanitized. No signal from later strategies is consulted once
//! an earlier one succeeds.
//!
//! Chain order:
//! 1. the external `pdftotext` binary (gate: > 50 trimmed chars)
//! 2. in-process container parsing: uncompressed streams, `BT…ET` text
//!    objects, and FlateDecode streams as one combined pool (gate: > 20)
//! 3. a last-resort printable byte scan (gate: > 10)
//!
//! Every strategy's internal errors are caught at the chain level and
//! converted into "try the next strategy"; only total exhaustion surfaces,
//! as [`VeritextError::ExtractionFailed`].

pub mod container;
pub mod pdftotext;
pub mod scan;

use crate::config::ExtractionOptions;
use crate::text;
use crate::types::{ExtractedText, StrategyKind};
use crate::{Result, VeritextError};
use async_trait::async_trait;
use std::path::Path;

pub use container::ContainerParse;
pub use pdftotext::CommandLineTool;
pub use scan::FallbackScan;

/// One self-contained method of pulling text out of a PDF, tried in a fixed
/// priority order.
#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Minimum trimmed character count the raw output must exceed.
    fn min_length(&self) -> usize;

    /// Attempt extraction. `Ok(None)` means "nothing usable, not an error";
    /// `Err` is an internal failure the chain downgrades to a soft miss.
    async fn try_extract(&self, path: &Path, bytes: &[u8]) -> Result<Option<(String, StrategyKind)>>;
}

/// Ordered strategy chain over a single PDF file.
pub struct PdfTextExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    max_file_size: u64,
}

impl PdfTextExtractor {
    /// Build the default chain from extraction options.
    pub fn new(options: &ExtractionOptions) -> Self {
        let mut strategies: Vec<Box<dyn ExtractionStrategy>> = Vec::with_capacity(3);
        if options.use_external_tool {
            strategies.push(Box::new(CommandLineTool::new(options.tool_timeout_secs)));
        }
        strategies.push(Box::new(ContainerParse));
        strategies.push(Box::new(FallbackScan));

        Self {
            strategies,
            max_file_size: options.max_file_size,
        }
    }

    /// Chain with only the in-process strategies, regardless of options.
    /// Used where subprocess invocation is undesirable (tests, sandboxes).
    pub fn in_process_only(options: &ExtractionOptions) -> Self {
        Self {
            strategies: vec![Box::new(ContainerParse), Box::new(FallbackScan)],
            max_file_size: options.max_file_size,
        }
    }

    /// Extract text from the PDF at `path`.
    ///
    /// Validates preconditions (file exists, non-empty, within the size
    /// limit), then walks the strategy chain. The accepted output is passed
    /// through the sanitizer before being returned.
    pub async fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VeritextError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if metadata.len() == 0 {
            return Err(VeritextError::Validation(format!(
                "file is empty: {}",
                path.display()
            )));
        }
        if metadata.len() > self.max_file_size {
            return Err(VeritextError::TooLarge {
                size: metadata.len(),
                limit: self.max_file_size,
            });
        }

        let bytes = tokio::fs::read(path).await?;

        for strategy in &self.strategies {
            match strategy.try_extract(path, &bytes).await {
                Ok(Some((raw, kind))) => {
                    if raw.trim().chars().count() > strategy.min_length() {
                        let cleaned = text::clean(&raw);
                        if !cleaned.is_empty() {
                            tracing::debug!(
                                strategy = strategy.name(),
                                chars = cleaned.len(),
                                "extraction strategy accepted"
                            );
                            return Ok(ExtractedText {
                                text: cleaned,
                                strategy: kind,
                            });
                        }
                    }
                    tracing::debug!(strategy = strategy.name(), "output below length gate");
                }
                Ok(None) => {
                    tracing::debug!(strategy = strategy.name(), "no usable output");
                }
                Err(e) => {
                    // Internal strategy errors never abort the chain.
                    tracing::warn!(strategy = strategy.name(), error = %e, "strategy failed, trying next");
                }
            }
        }

        Err(VeritextError::ExtractionFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionOptions;
    use std::io::Write;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_missing_file_is_file_not_found() {
        let extractor = PdfTextExtractor::in_process_only(&ExtractionOptions::default());
        let err = extractor
            .extract(Path::new("/nonexistent/veritext-test.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, VeritextError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_empty_file_rejected() {
        let file = write_temp(b"");
        let extractor = PdfTextExtractor::in_process_only(&ExtractionOptions::default());
        let err = extractor.extract(file.path()).await.unwrap_err();
        assert!(matches!(err, VeritextError::Validation(_)));
    }

    #[tokio::test]
    async fn test_oversized_file_fails_fast() {
        let file = write_temp(&vec![b'x'; 128]);
        let options = ExtractionOptions {
            max_file_size: 64,
            ..Default::default()
        };
        let extractor = PdfTextExtractor::in_process_only(&options);
        let err = extractor.extract(file.path()).await.unwrap_err();
        assert!(matches!(err, VeritextError::TooLarge { size: 128, limit: 64 }));
    }

    #[tokio::test]
    async fn test_stream_content_extracted_in_process() {
        let mut pdf = Vec::new();
        pdf.extend_from_slice(b"%PDF-1.4\n");
        pdf.extend_from_slice(b"1 0 obj\n<< /Length 99 >>\nstream\n");
        pdf.extend_from_slice(
            b"This sentence lives inside an uncompressed content stream of the document body.\n",
        );
        pdf.extend_from_slice(b"endstream\nendobj\n%%EOF\n");

        let file = write_temp(&pdf);
        let extractor = PdfTextExtractor::in_process_only(&ExtractionOptions::default());
        let extracted = extractor.extract(file.path()).await.unwrap();
        assert_eq!(extracted.strategy, StrategyKind::StreamParse);
        assert!(extracted.text.contains("uncompressed content stream"));
    }

    #[tokio::test]
    async fn test_plain_text_file_falls_back_to_scan() {
        // No PDF structure at all: container strategies miss, scan accepts.
        let body = "Readable line of plain text that the byte scanner should keep here.\n".repeat(3);
        let file = write_temp(body.as_bytes());
        let extractor = PdfTextExtractor::in_process_only(&ExtractionOptions::default());
        let extracted = extractor.extract(file.path()).await.unwrap();
        assert_eq!(extracted.strategy, StrategyKind::FallbackScan);
    }

    #[tokio::test]
    async fn test_binary_noise_exhausts_chain() {
        // High-entropy bytes with no printable structure anywhere.
        let noise: Vec<u8> = (0..4096u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect();
        let file = write_temp(&noise);
        let extractor = PdfTextExtractor::in_process_only(&ExtractionOptions::default());
        let err = extractor.extract(file.path()).await.unwrap_err();
        assert!(matches!(err, VeritextError::ExtractionFailed));
    }
}
