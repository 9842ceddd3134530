//! Reference text about Thapar University embedded in every prompt.

/// The knowledge base, loaded at compile time and never modified.
pub const KNOWLEDGE_BLOCK: &str = include_str!("../data/knowledge.txt");
