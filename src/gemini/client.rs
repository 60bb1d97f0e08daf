//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::prompt::{build_prompt, TEMPERATURE, TOP_P};
use super::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::config::Config;
use crate::error::{Result, SolverError};
use crate::solver::Solver;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("question-solver/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SolverError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.api_base.trim_end_matches('/'),
                config.model
            ),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one question and return the generated answer text.
    ///
    /// Every failure is logged and returned as [`SolverError::Api`], except an
    /// empty question which is rejected before any request is made.
    pub async fn solve_question(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(SolverError::EmptyPrompt);
        }

        match self.generate(question).await {
            Ok(answer) => Ok(answer),
            Err(message) => {
                tracing::error!("Error calling Gemini API: {}", message);
                Err(SolverError::Api(message))
            }
        }
    }

    async fn generate(&self, question: &str) -> std::result::Result<String, String> {
        let request = GenerateContentRequest::user_text(
            build_prompt(question),
            GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
            },
        );

        tracing::info!(model = %self.model, chars = question.chars().count(), "Sending question");

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        if !status.is_success() {
            return Err(describe_error_body(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| format!("Failed to parse response: {e}"))?;

        if let Some(text) = parsed.text() {
            tracing::info!(
                chars = text.chars().count(),
                finish_reason = parsed
                    .candidates
                    .first()
                    .and_then(|c| c.finish_reason.as_deref())
                    .unwrap_or("unknown"),
                "Received answer"
            );
            return Ok(text);
        }

        match parsed.block_reason() {
            Some(reason) => Err(format!("The question was blocked ({reason})")),
            None => Err("The response contained no text".to_string()),
        }
    }
}

/// Extract a readable message from a non-success response body
fn describe_error_body(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) => {
            tracing::debug!(
                code = ?envelope.error.code,
                status = ?envelope.error.status,
                "API returned an error envelope"
            );
            envelope.error.message
        }
        Err(_) => {
            let body = body.trim();
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {body}")
            }
        }
    }
}

#[async_trait]
impl Solver for GeminiClient {
    async fn solve(&self, question: &str) -> Result<String> {
        self.solve_question(question).await
    }
}
