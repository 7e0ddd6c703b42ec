//! External command-line extraction via the `pdftotext` binary.
//!
//! The binary is probed at a set of known installation locations across
//! operating systems; the resolved path is cached process-wide. A missing
//! binary is a soft failure (the chain moves on), never a hard error.

use crate::Result;
use crate::extraction::ExtractionStrategy;
use crate::types::StrategyKind;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::path::Path;
use tokio::process::Command;
use tokio::time::{Duration, timeout};

/// Resolved binary path, or None when no candidate responds. Probed once.
static RESOLVED_BINARY: OnceCell<Option<String>> = OnceCell::new();

/// Known installation locations, tried in order. The bare name first so a
/// PATH-installed binary always wins.
const BINARY_CANDIDATES: &[&str] = &[
    "pdftotext",
    "/usr/bin/pdftotext",
    "/usr/local/bin/pdftotext",
    "/opt/homebrew/bin/pdftotext",
    "/opt/local/bin/pdftotext",
    "/snap/bin/pdftotext",
    r"C:\Program Files\poppler\bin\pdftotext.exe",
    r"C:\Program Files\xpdf-tools\bin64\pdftotext.exe",
    r"C:\Program Files (x86)\xpdf-tools\bin32\pdftotext.exe",
];

/// First-priority strategy: shell out to `pdftotext <file> -`.
pub struct CommandLineTool {
    timeout_secs: u64,
}

impl CommandLineTool {
    pub fn new(timeout_secs: u64) -> Self {
        Self { timeout_secs }
    }

    /// Find a responding `pdftotext` binary, caching the outcome.
    async fn resolve_binary(&self) -> Option<String> {
        if let Some(cached) = RESOLVED_BINARY.get() {
            return cached.clone();
        }

        let mut found = None;
        for candidate in BINARY_CANDIDATES {
            let probe = Command::new(candidate).arg("-v").output().await;
            if probe.is_ok() {
                tracing::debug!(binary = candidate, "pdftotext binary found");
                found = Some((*candidate).to_string());
                break;
            }
        }

        if found.is_none() {
            tracing::debug!("pdftotext binary not found at any known location");
        }

        // A concurrent probe may already have set the cell; keep its answer.
        let _ = RESOLVED_BINARY.set(found);
        RESOLVED_BINARY.get().cloned().flatten()
    }
}

#[async_trait]
impl ExtractionStrategy for CommandLineTool {
    fn name(&self) -> &'static str {
        "command-line-tool"
    }

    fn min_length(&self) -> usize {
        50
    }

    async fn try_extract(&self, path: &Path, _bytes: &[u8]) -> Result<Option<(String, StrategyKind)>> {
        let Some(binary) = self.resolve_binary().await else {
            return Ok(None);
        };

        let child = match Command::new(&binary)
            .arg(path)
            .arg("-") // write to stdout
            .arg("-q")
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                // Spawn failure (binary removed since the probe, permissions)
                // is a soft failure.
                tracing::debug!(binary = %binary, error = %e, "failed to spawn pdftotext");
                return Ok(None);
            }
        };

        let output = match timeout(Duration::from_secs(self.timeout_secs), child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "failed waiting for pdftotext");
                return Ok(None);
            }
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout_secs, "pdftotext timed out");
                return Ok(None);
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(status = ?output.status.code(), stderr = %stderr, "pdftotext reported failure");
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some((text, StrategyKind::CommandLineTool)))
    }
}
