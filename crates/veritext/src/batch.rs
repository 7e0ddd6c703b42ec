//! Concurrent batch detection over document files.
//!
//! One extraction-plus-detection task per file, bounded by a semaphore.
//! A failing document never aborts the batch: its report carries the error
//! and the remaining documents keep processing. Reports come back in input
//! order.

use crate::config::DetectionConfig;
use crate::detection::DetectionOrchestrator;
use crate::extraction::PdfTextExtractor;
use crate::types::DetectionResult;
use crate::Result;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Outcome for one document in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Input path as given.
    pub path: PathBuf,
    /// Detection result, present when extraction succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DetectionResult>,
    /// Extraction or processing error, present when no result exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock time spent on this document.
    pub elapsed_ms: u64,
}

/// Aggregate counts over a finished batch.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BatchSummary {
    /// Documents that produced a detection result.
    pub analyzed: usize,
    /// Documents that failed before detection.
    pub failed: usize,
}

impl BatchSummary {
    fn from_reports(reports: &[DocumentReport]) -> Self {
        let analyzed = reports.iter().filter(|r| r.result.is_some()).count();
        Self {
            analyzed,
            failed: reports.len() - analyzed,
        }
    }
}

/// Extract and score every file, at most `max_concurrent` (default
/// `num_cpus * 2`) documents in flight at once.
pub async fn batch_detect_files(
    paths: Vec<PathBuf>,
    config: &DetectionConfig,
) -> Result<(Vec<DocumentReport>, BatchSummary)> {
    let permits = config.max_concurrent.unwrap_or_else(|| num_cpus::get() * 2).max(1);
    let semaphore = Arc::new(Semaphore::new(permits));
    let extractor = Arc::new(PdfTextExtractor::new(&config.extraction));
    let orchestrator = Arc::new(DetectionOrchestrator::new(config)?);

    let mut set = JoinSet::new();
    let total = paths.len();

    for (index, path) in paths.into_iter().enumerate() {
        let semaphore = Arc::clone(&semaphore);
        let extractor = Arc::clone(&extractor);
        let orchestrator = Arc::clone(&orchestrator);

        set.spawn(async move {
            // Holding the permit for the whole document bounds extraction
            // subprocesses as well as scoring. The semaphore is never closed.
            let _permit = semaphore.acquire_owned().await.expect("semaphore closed");
            let report = process_document(&extractor, &orchestrator, path).await;
            (index, report)
        });
    }

    let mut slots: Vec<Option<DocumentReport>> = (0..total).map(|_| None).collect();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, report)) => slots[index] = Some(report),
            Err(e) => tracing::error!(error = %e, "batch worker panicked"),
        }
    }

    let reports: Vec<DocumentReport> = slots.into_iter().flatten().collect();
    let summary = BatchSummary::from_reports(&reports);
    tracing::info!(analyzed = summary.analyzed, failed = summary.failed, "batch finished");
    Ok((reports, summary))
}

async fn process_document(
    extractor: &PdfTextExtractor,
    orchestrator: &DetectionOrchestrator,
    path: PathBuf,
) -> DocumentReport {
    let start = Instant::now();

    let (result, error) = match extractor.extract(&path).await {
        Ok(extracted) => {
            let result = orchestrator.detect(&extracted.text).await;
            (Some(result), None)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "document failed");
            (None, Some(e.report_message()))
        }
    };

    DocumentReport {
        path,
        result,
        error,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}
