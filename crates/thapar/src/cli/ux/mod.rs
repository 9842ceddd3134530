use console::{StyledObject, style};

fn error_label() -> StyledObject<&'static str> {
    style("ERROR:").red().bold()
}

/// Prints a formatted error message to stderr.
pub fn present_error(error: anyhow::Error) {
    eprintln!("\n{} {error:#}", error_label());
}
