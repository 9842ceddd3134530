use crate::config::ProfileConfig;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionMetrics {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub latency_ms: f32,
}

/// A single, complete model response.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    pub text: String,
    pub finish_reason: Option<String>,
    pub metrics: CompletionMetrics,
}

/// Text generation backend. One prompt in, one response out.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    fn name(&self) -> &str;
    async fn complete(&self, prompt: &str, profile: &ProfileConfig) -> Result<CompletionResponse>;
}
