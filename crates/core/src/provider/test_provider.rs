//! A mock LLM provider for testing purposes.
use crate::completion::{CompletionMetrics, CompletionModel, CompletionResponse};
use crate::config::ProfileConfig;
use crate::model::ModelConfig;
use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// A mock `CompletionModel` for use in tests.
///
/// The `response_mode` setting controls what kind of response it generates:
/// - `""` (default): a fixed markdown answer.
/// - `"echo"`: the prompt itself.
/// - `"error"`: an error carrying the `error_message` setting.
#[derive(Debug)]
pub struct TestProviderModel {
    config: ModelConfig,
}

impl TestProviderModel {
    pub fn new(config: ModelConfig) -> Result<Self> {
        Ok(Self { config })
    }
}

#[async_trait]
impl CompletionModel for TestProviderModel {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn complete(&self, prompt: &str, _profile: &ProfileConfig) -> Result<CompletionResponse> {
        let response_mode: String = self.config.get_setting("response_mode").unwrap_or_default();

        let text = match response_mode.as_str() {
            "error" => {
                let message: String = self
                    .config
                    .get_setting("error_message")
                    .unwrap_or_else(|| "TestProviderModel error".to_string());
                return Err(anyhow!(message));
            }
            "echo" => prompt.to_string(),
            _ => "**Thapar** was established in *1956*.\n".to_string(),
        };

        Ok(CompletionResponse {
            text,
            finish_reason: Some("STOP".to_string()),
            metrics: CompletionMetrics::default(),
        })
    }
}
