//! Model-backed remote analyzer
//!
//! Sends a per-standard prompt plus the sanitized document to a
//! generate-content endpoint and parses the first candidate's text as the
//! analysis JSON. Every transport, status, or parse failure maps to an
//! [`AnalysisError`]; the scan engine converts those into the keyword
//! fallback, so this analyzer can fail without failing the scan.

use crate::analysis::remote::prompts;
use crate::analysis::scoring::deduction_score;
use crate::analysis::{Analyzer, StandardAnalysis};
use crate::config::{RemoteAnalyzerConfig, SecretString};
use crate::domain::{AegisError, AnalysisError, Finding, Severity, Standard, DEFAULT_CONFIDENCE};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Generation parameters sent with every request
///
/// Low temperature keeps compliance analyses consistent across runs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationParams,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Analysis payload the model is instructed to return
#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    score: Option<f64>,
    #[serde(default)]
    issues: Vec<WireIssue>,
    #[serde(default)]
    recommendations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireIssue {
    #[serde(rename = "type")]
    severity: Severity,
    title: String,
    description: String,
    suggestion: String,
    #[serde(default = "default_confidence")]
    confidence: f64,
}

fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}

/// Remote model-backed analyzer
pub struct RemoteAnalyzer {
    http: reqwest::Client,
    endpoint: Url,
    api_key: SecretString,
    generation: GenerationParams,
}

impl RemoteAnalyzer {
    /// Create a remote analyzer from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint is not a valid URL or
    /// the HTTP client cannot be built.
    pub fn new(config: &RemoteAnalyzerConfig) -> Result<Self, AegisError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            AegisError::Configuration(format!("Invalid analyzer endpoint '{}': {e}", config.endpoint))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AegisError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            generation: GenerationParams {
                temperature: config.temperature,
                top_p: config.top_p,
                top_k: config.top_k,
                max_output_tokens: config.max_output_tokens,
            },
        })
    }

    /// Parse the candidate text into a [`StandardAnalysis`]
    ///
    /// A payload without a usable score falls back to the deduction
    /// formula over its own issues.
    fn parse_analysis(text: &str) -> Result<StandardAnalysis, AnalysisError> {
        let payload: AnalysisPayload = serde_json::from_str(text)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let findings: Vec<Finding> = payload
            .issues
            .into_iter()
            .map(|issue| {
                Finding::new(issue.severity, issue.title, issue.description, issue.suggestion)
                    .with_confidence(issue.confidence)
            })
            .collect();

        let score = match payload.score {
            Some(s) => s.round().clamp(0.0, 100.0) as u8,
            None => deduction_score(&findings),
        };

        Ok(StandardAnalysis {
            score,
            findings,
            recommendations: payload.recommendations,
        })
    }
}

#[async_trait]
impl Analyzer for RemoteAnalyzer {
    async fn analyze(
        &self,
        sanitized_text: &str,
        standard: &Standard,
    ) -> Result<StandardAnalysis, AnalysisError> {
        let instruction = prompts::prompt_for(standard)
            .ok_or_else(|| AnalysisError::UnsupportedStandard(standard.to_string()))?;

        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompts::build_prompt(instruction, sanitized_text),
                }],
            }],
            generation_config: &self.generation,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .header("x-api-key", self.api_key.expose_secret().as_ref())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AnalysisError::Timeout(e.to_string())
                } else {
                    AnalysisError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AnalysisError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| {
                AnalysisError::MalformedResponse("response carried no candidates".to_string())
            })?;

        Self::parse_analysis(text)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
