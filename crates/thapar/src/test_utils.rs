//! Test utilities for thapar crate

use std::fs;
use std::path::PathBuf;
use tempfile::Builder;
use thapar_core::assistant::Assistant;
use thapar_core::config::ProfileConfig;
use thapar_core::get_completion_llm;
use thapar_core::model::{ModelConfig, ModelProvider};

/// Writes `content` to a `thapar.yml` in a fresh temporary directory.
///
/// # Panics
/// Panics if temp directory creation or file writing fails.
pub fn create_temp_config_file(content: &str) -> PathBuf {
    let temp_dir = Builder::new()
        .prefix("thapar-test")
        .rand_bytes(8)
        .tempdir()
        .unwrap();
    let config_path = temp_dir.path().join("thapar.yml");
    fs::write(&config_path, content).unwrap();

    // Keep the temp directory alive by leaking it (this is just for tests)
    let _ = Box::leak(Box::new(temp_dir));
    config_path
}

/// An assistant backed by the test provider with the given settings.
pub fn test_assistant(settings: &[(&str, &str)]) -> Assistant {
    let config = ModelConfig {
        name: "test-model".to_string(),
        provider: ModelProvider::Test,
        settings: settings
            .iter()
            .map(|(k, v)| (k.to_string(), (*v).into()))
            .collect(),
    };
    Assistant::new(get_completion_llm(config).unwrap(), ProfileConfig::default())
}
