use crate::knowledge::KNOWLEDGE_BLOCK;

/// Exact phrase the model must use when the answer is not in the knowledge base.
pub const FALLBACK_PHRASE: &str = "I don't have that specific information about Thapar University";

const PERSONA: &str = "You are a chatbot providing information about Thapar University (TIET).";

const INSTRUCTIONS: &str = r#"INSTRUCTIONS:
- Answer only about Thapar University using the provided information
- Be clear and informative
- If information is not in the knowledge base, say "I don't have that specific information about Thapar University"
- Keep responses concise but helpful
- Use bullet points for lists

Provide a helpful answer:"#;

/// Builds the full prompt for one question. The question is inserted verbatim.
pub fn build_prompt(question: &str) -> String {
    format!(
        "{PERSONA}\n\nKNOWLEDGE BASE:\n{KNOWLEDGE_BLOCK}\n\nUSER QUESTION: {question}\n\n{INSTRUCTIONS}"
    )
}
