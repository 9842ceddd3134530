use once_cell::sync::Lazy;
use regex::Regex;

// Spans stop at any line terminator, including `\r` and U+2028/U+2029
static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^\r\n\x{2028}\x{2029}]*?)\*").unwrap());

/// Strips markdown emphasis from a model response.
///
/// Bold spans lose their markers, italic spans become `- ` bullet prefixes, and
/// the result is trimmed. Matches never cross line breaks.
pub fn format_response(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "- $1");
    text.trim().to_string()
}
