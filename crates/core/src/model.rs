use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Model configuration for the chatbot.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ModelConfig {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "type")]
    pub provider: ModelProvider,
    #[serde(default, flatten)]
    pub settings: HashMap<String, serde_yaml::Value>,
}

impl ModelConfig {
    /// Reads a string setting, resolving `env:NAME` indirection.
    ///
    /// Returns `Ok(None)` if the setting is absent and
    /// `ModelInitError::MissingCredential` if it points to an unset variable.
    pub fn get_secret(&self, key: &str) -> Result<Option<String>, ModelInitError> {
        let Some(value) = self.get_setting::<String>(key) else {
            return Ok(None);
        };
        match value.strip_prefix("env:") {
            Some(var) => {
                let var = var.trim();
                match std::env::var(var) {
                    Ok(v) if !v.is_empty() => Ok(Some(v)),
                    _ => Err(ModelInitError::MissingCredential(var.to_string())),
                }
            }
            None => Ok(Some(value)),
        }
    }

    pub fn get_setting<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.settings
            .get(key)
            .and_then(|v| serde_yaml::from_value(v.clone()).ok())
    }
}

/// Supported model provider integrations (serialized as lowercase strings).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ModelProvider {
    Gemini,
    Test,
}

#[derive(thiserror::Error, Debug)]
pub enum ModelInitError {
    #[error("{0} is required in .env file")]
    MissingCredential(String),
}
