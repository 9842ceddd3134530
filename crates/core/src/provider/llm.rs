use crate::completion::CompletionModel;
use crate::model::{ModelConfig, ModelProvider};
use crate::provider::{gemini, test_provider};
use anyhow::Result;
use tracing::instrument;

#[instrument(skip(model_config), fields(model = %model_config.name))]
pub fn get_completion_llm(model_config: ModelConfig) -> Result<Box<dyn CompletionModel>> {
    match model_config.provider {
        ModelProvider::Gemini => {
            let model = gemini::GeminiModel::new(model_config)?;
            Ok(Box::new(model))
        }
        ModelProvider::Test => {
            let model = test_provider::TestProviderModel::new(model_config)?;
            Ok(Box::new(model))
        }
    }
}
