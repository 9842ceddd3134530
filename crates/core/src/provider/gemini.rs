use super::gemini_types::{
    Content, ErrorResponse, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};
use crate::completion::{CompletionMetrics, CompletionModel, CompletionResponse};
use crate::config::ProfileConfig;
use crate::model::{ModelConfig, ModelInitError};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Instant;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("[{status}] {message}")]
    Api { status: StatusCode, message: String },
    #[error("Response was blocked due to {0}")]
    Blocked(String),
    #[error("Response contained no text")]
    Empty,
}

/// Google Gemini `generateContent` client.
pub struct GeminiModel {
    config: ModelConfig,
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiModel {
    pub fn new(model_config: ModelConfig) -> Result<Self> {
        // Without an explicit setting the key comes from GEMINI_API_KEY
        let api_key = match model_config.get_secret("api_key")? {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty())
                .ok_or_else(|| ModelInitError::MissingCredential(API_KEY_ENV.to_string()))?,
        };
        let base_url = model_config
            .get_setting::<String>("base_url")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            config: model_config,
            client: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.config.name)
    }

    fn generation_config(profile: &ProfileConfig) -> Option<GenerationConfig> {
        if profile.is_empty() {
            return None;
        }
        Some(GenerationConfig {
            temperature: profile.temperature,
            top_p: profile.top_p,
            top_k: profile.top_k,
            max_output_tokens: profile.max_output_tokens,
        })
    }

    fn into_completion(
        body: GenerateContentResponse,
        latency_ms: f32,
    ) -> Result<CompletionResponse, GenerationError> {
        let metrics = body
            .usage_metadata
            .map(|usage| CompletionMetrics {
                prompt_tokens: usage.prompt_token_count,
                completion_tokens: usage.candidates_token_count,
                latency_ms,
            })
            .unwrap_or(CompletionMetrics {
                latency_ms,
                ..Default::default()
            });

        let Some(candidate) = body.candidates.into_iter().next() else {
            return Err(match body.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => GenerationError::Blocked(reason),
                None => GenerationError::Empty,
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(match candidate.finish_reason {
                Some(reason) if reason != "STOP" => GenerationError::Blocked(reason),
                _ => GenerationError::Empty,
            });
        }

        Ok(CompletionResponse {
            text,
            finish_reason: candidate.finish_reason,
            metrics,
        })
    }
}

#[async_trait]
impl CompletionModel for GeminiModel {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn complete(&self, prompt: &str, profile: &ProfileConfig) -> Result<CompletionResponse> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Self::generation_config(profile),
        };

        let start_time = Instant::now();
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api { status, message }.into());
        }

        let body: GenerateContentResponse =
            response.json().await.map_err(GenerationError::Http)?;
        let latency_ms = start_time.elapsed().as_millis() as f32;
        let completion = Self::into_completion(body, latency_ms)?;

        debug!(
            model = %self.config.name,
            prompt_tokens = completion.metrics.prompt_tokens,
            completion_tokens = completion.metrics.completion_tokens,
            latency_ms,
            finish_reason = ?completion.finish_reason,
            "Gemini response received"
        );
        Ok(completion)
    }
}
