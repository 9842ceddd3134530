pub mod assistant;
pub mod completion;
pub mod config;
pub mod format;
pub mod knowledge;
pub mod model;
pub mod paths;
pub mod prompt;
pub mod provider;

#[cfg(test)]
mod test_utils;

pub use crate::provider::llm::get_completion_llm;
