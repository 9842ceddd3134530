pub mod gemini;
mod gemini_types;
pub mod llm;
pub mod test_provider;
