use crate::completion::CompletionModel;
use crate::config::ProfileConfig;
use crate::format::format_response;
use crate::prompt::build_prompt;
use std::time::Duration;
use tracing::{debug, warn};

const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Answers questions about Thapar University using a completion model.
///
/// Holds no conversation state: every question is answered from the fixed
/// knowledge base alone.
pub struct Assistant {
    model: Box<dyn CompletionModel>,
    profile: ProfileConfig,
    retries: u32,
}

impl Assistant {
    pub fn new(model: Box<dyn CompletionModel>, profile: ProfileConfig) -> Self {
        Self {
            model,
            profile,
            retries: 0,
        }
    }

    /// Allows `retries` extra attempts when the model call fails.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn profile(&self) -> &ProfileConfig {
        &self.profile
    }

    /// Returns the formatted answer, or `Error getting information: <reason>`
    /// if the model call failed.
    pub async fn answer(&self, question: &str) -> String {
        let prompt = build_prompt(question);
        debug!(
            model = self.model.name(),
            prompt_len = prompt.len(),
            "Generating answer"
        );

        let mut attempt = 0;
        loop {
            match self.model.complete(&prompt, &self.profile).await {
                Ok(response) => return format_response(&response.text),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warn!(attempt, error = %e, "Generation failed, retrying");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(e) => {
                    warn!(error = %e, "Generation failed");
                    return format!("Error getting information: {e}");
                }
            }
        }
    }
}
