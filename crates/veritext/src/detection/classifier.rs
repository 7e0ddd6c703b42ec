//! HTTP client for the external classifier service.

use crate::config::ClassifierConfig;
use crate::{Result, VeritextError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body sent to the classifier endpoint.
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

/// Structured response shape. Services answer either with a bare JSON number
/// or an object carrying `probability` (some deployments call it `score`).
#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    #[serde(default)]
    probability: Option<f64>,
    #[serde(default)]
    score: Option<f64>,
}

/// Thin reqwest wrapper around the classifier endpoint.
///
/// Every failure mode reduces to [`VeritextError::Classifier`]; callers treat
/// any error as "service unavailable" and fall back to the heuristic scorer.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ClassifierClient {
    /// Build a client from configuration. The request timeout is baked into
    /// the underlying HTTP client.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| VeritextError::classifier_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    /// POST the text and return the service's probability in `[0.0, 1.0]`.
    pub async fn classify(&self, text: &str) -> Result<f64> {
        let mut request = self.client.post(&self.endpoint).json(&ClassifyRequest { text });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| VeritextError::classifier_with_source("classifier request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VeritextError::classifier(format!(
                "classifier returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| VeritextError::classifier_with_source("failed to read classifier response", e))?;

        let probability = parse_probability(&body)?;
        if !(0.0..=1.0).contains(&probability) || !probability.is_finite() {
            return Err(VeritextError::classifier(format!(
                "classifier probability out of range: {probability}"
            )));
        }

        tracing::debug!(probability, "classifier responded");
        Ok(probability)
    }
}

fn parse_probability(body: &str) -> Result<f64> {
    // Bare number first, object shape second.
    if let Ok(value) = serde_json::from_str::<f64>(body) {
        return Ok(value);
    }

    let parsed: ClassifyResponse = serde_json::from_str(body)
        .map_err(|e| VeritextError::classifier_with_source("malformed classifier response", e))?;

    parsed
        .probability
        .or(parsed.score)
        .ok_or_else(|| VeritextError::classifier("classifier response carries no probability"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(parse_probability("0.73").unwrap(), 0.73);
    }

    #[test]
    fn test_parse_probability_field() {
        assert_eq!(parse_probability(r#"{"probability": 0.4}"#).unwrap(), 0.4);
    }

    #[test]
    fn test_parse_score_field() {
        assert_eq!(parse_probability(r#"{"score": 0.9}"#).unwrap(), 0.9);
    }

    #[test]
    fn test_probability_wins_over_score() {
        let p = parse_probability(r#"{"probability": 0.2, "score": 0.8}"#).unwrap();
        assert_eq!(p, 0.2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_probability("not json").is_err());
        assert!(parse_probability(r#"{"label": "ai"}"#).is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&ClassifyRequest { text: "sample" }).unwrap();
        assert_eq!(body, r#"{"text":"sample"}"#);
    }
}
