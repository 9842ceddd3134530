use std::{collections::HashMap, fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{model::ModelConfig, paths::config_dir};

const CONFIG_FILE: &str = "thapar.yml";
const DEFAULT_CONFIG: &str = include_str!("../data/config.yml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File system error: {0}")]
    IO(#[from] std::io::Error),
    #[error("YAML parsing error: {0}")]
    YAMLError(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Generation parameters sent with each request. Unset fields are omitted so
/// the service defaults apply.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl ProfileConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatConfig {
    pub model: ModelConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Extra attempts after a failed generation call. Zero keeps one attempt
    /// per question.
    #[serde(default)]
    pub retries: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub models: HashMap<String, ModelConfig>,
    pub profiles: HashMap<String, ProfileConfig>,
    pub chat: ChatConfig,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum StringOrObject<T> {
    String(String),
    Object(T),
}

#[derive(Deserialize, Debug)]
struct RawConfig {
    #[serde(default)]
    models: HashMap<String, ModelConfig>,
    #[serde(default)]
    profiles: HashMap<String, ProfileConfig>,
    chat: RawChatConfig,
}

#[derive(Deserialize, Debug)]
struct RawChatConfig {
    model: StringOrObject<ModelConfig>,
    #[serde(default)]
    profile: Option<StringOrObject<ProfileConfig>>,
    #[serde(default)]
    retries: u32,
}

impl RawConfig {
    #[instrument(skip(self))]
    fn to_config(&self) -> Result<Config, ConfigError> {
        let mut models_with_names = HashMap::new();
        for (k, v) in &self.models {
            // Model name defaults to its key
            let model_name = if v.name.is_empty() {
                k.clone()
            } else {
                v.name.clone()
            };
            let model = ModelConfig {
                name: model_name,
                ..v.clone()
            };
            models_with_names.insert(k.clone(), model);
        }

        let model = match &self.chat.model {
            StringOrObject::String(s) => models_with_names
                .get(s)
                .cloned()
                .ok_or_else(|| ConfigError::Config(format!("Model '{s}' not found")))?,
            StringOrObject::Object(m) => m.clone(),
        };

        let profile = match &self.chat.profile {
            Some(StringOrObject::String(s)) => self
                .profiles
                .get(s)
                .cloned()
                .ok_or_else(|| ConfigError::Config(format!("Profile '{s}' not found")))?,
            Some(StringOrObject::Object(p)) => p.clone(),
            None => ProfileConfig::default(),
        };

        Ok(Config {
            models: models_with_names,
            profiles: self.profiles.clone(),
            chat: ChatConfig {
                model,
                profile,
                retries: self.chat.retries,
            },
        })
    }
}

impl Config {
    /// Returns the chat model, or the named model from `models` if given.
    pub fn chat_model(&self, name: Option<&str>) -> Result<ModelConfig, ConfigError> {
        match name {
            Some(name) => self
                .models
                .get(name)
                .cloned()
                .ok_or_else(|| ConfigError::Config(format!("Model '{name}' not found"))),
            None => Ok(self.chat.model.clone()),
        }
    }

    /// Returns the chat profile, or the named profile from `profiles` if given.
    pub fn chat_profile(&self, name: Option<&str>) -> Result<ProfileConfig, ConfigError> {
        match name {
            Some(name) => self
                .profiles
                .get(name)
                .cloned()
                .ok_or_else(|| ConfigError::Config(format!("Profile '{name}' not found"))),
            None => Ok(self.chat.profile.clone()),
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let raw: RawConfig = serde_yaml::from_str(content)?;
    raw.to_config()
}

/// Loads the configuration.
///
/// An explicit `config_path` must exist. Otherwise `thapar.yml` in the config
/// directory is used when present, falling back to the bundled defaults.
#[instrument(skip(config_path))]
pub fn get_config(config_path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let config_file = config_path.or_else(|| {
        config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .filter(|path| path.exists())
    });

    match config_file {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            let content = fs::read_to_string(&path)?;
            parse_config(&content)
        }
        None => {
            debug!("Using bundled default config");
            parse_config(DEFAULT_CONFIG)
        }
    }
}
