//! Detection orchestration.
//!
//! [`DetectionOrchestrator`] owns the decision of how a text gets scored:
//! the quality gate runs first and short-circuits without any network
//! traffic, the external classifier is preferred when configured, and any
//! classifier failure falls back to the built-in heuristic scorer. The
//! result always carries which method produced the score.

pub mod classifier;

pub use classifier::ClassifierClient;

use crate::config::DetectionConfig;
use crate::scoring::HeuristicScorer;
use crate::text;
use crate::types::{DetectionMethod, DetectionResult};
use crate::{Result, VeritextError};
use std::panic::AssertUnwindSafe;

/// Coordinates quality gating, the external classifier, and the heuristic
/// fallback.
pub struct DetectionOrchestrator {
    client: Option<ClassifierClient>,
    scorer: HeuristicScorer,
}

impl DetectionOrchestrator {
    /// Build an orchestrator from configuration. Heuristic-only when no
    /// classifier endpoint is configured.
    pub fn new(config: &DetectionConfig) -> Result<Self> {
        let client = match &config.classifier {
            Some(cfg) => Some(ClassifierClient::new(cfg)?),
            None => None,
        };
        Ok(Self {
            client,
            scorer: HeuristicScorer::new(),
        })
    }

    /// Replace the heuristic scorer, e.g. with a seeded or jitter-free one.
    pub fn with_scorer(mut self, scorer: HeuristicScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Score a cleaned text. Never returns an error: failures are reported
    /// inside the [`DetectionResult`] so batch callers need no special
    /// handling.
    pub async fn detect(&self, text: &str) -> DetectionResult {
        if let Err(e) = text::ensure_sufficient(text) {
            tracing::debug!(chars = text.trim().chars().count(), "text below quality gate");
            return DetectionResult::unscorable(e.report_message());
        }

        if let Some(client) = &self.client {
            match client.classify(text).await {
                Ok(probability) => {
                    return DetectionResult::scored(probability, DetectionMethod::External);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "classifier unavailable, falling back to heuristic");
                }
            }
        }

        match self.heuristic_score(text) {
            Ok(score) => DetectionResult::scored(score, DetectionMethod::Heuristic),
            Err(e) => DetectionResult::unscorable(e.to_string()),
        }
    }

    /// Run the heuristic scorer with a panic guard so that a scoring defect
    /// surfaces as a reported error instead of unwinding through callers.
    fn heuristic_score(&self, text: &str) -> Result<f64> {
        std::panic::catch_unwind(AssertUnwindSafe(|| self.scorer.score(text)))
            .map_err(|_| VeritextError::Scoring("heuristic scorer panicked".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;

    fn heuristic_only() -> DetectionOrchestrator {
        DetectionOrchestrator::new(&DetectionConfig::default())
            .unwrap()
            .with_scorer(HeuristicScorer::without_jitter())
    }

    #[tokio::test]
    async fn test_short_text_is_unscorable() {
        let orchestrator = heuristic_only();
        let result = orchestrator.detect("too short").await;
        assert_eq!(result.score, 0.0);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(
            result.error.as_deref(),
            Some("insufficient text: text too short to analyze")
        );
    }

    #[tokio::test]
    async fn test_heuristic_path_scores() {
        let orchestrator = heuristic_only();
        let text = "This report summarizes the project status for the third quarter \
                    and lists the remaining work items for the engineering team.";
        let result = orchestrator.detect(text).await;
        assert!(result.error.is_none());
        assert_eq!(result.method, DetectionMethod::Heuristic);
        assert!(result.score >= 0.01 && result.score <= 0.99);
        assert_eq!(result.percentage, (result.score * 1000.0).round() / 10.0);
    }

    #[tokio::test]
    async fn test_unreachable_classifier_falls_back() {
        let config = DetectionConfig {
            classifier: Some(ClassifierConfig {
                endpoint: "http://127.0.0.1:1/classify".to_string(),
                api_key: None,
                timeout_secs: 1,
            }),
            ..Default::default()
        };
        let orchestrator = DetectionOrchestrator::new(&config)
            .unwrap()
            .with_scorer(HeuristicScorer::without_jitter());

        let text = "The committee reviewed the proposal at length and decided to \
                    postpone the final vote until the next scheduled session.";
        let result = orchestrator.detect(text).await;
        assert_eq!(result.method, DetectionMethod::Heuristic);
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_gate_failure_skips_classifier() {
        // Endpoint that would hang if contacted; the gate must short-circuit
        // before any request is attempted.
        let config = DetectionConfig {
            classifier: Some(ClassifierConfig {
                endpoint: "http://203.0.113.1:9/never".to_string(),
                api_key: None,
                timeout_secs: 30,
            }),
            ..Default::default()
        };
        let orchestrator = DetectionOrchestrator::new(&config).unwrap();

        let start = std::time::Instant::now();
        let result = orchestrator.detect("tiny").await;
        assert!(result.error.is_some());
        assert!(start.elapsed().as_secs() < 5);
    }
}
