//! Terminal output helpers
//!
//! Diagnostic lines go to stdout, warnings to stderr. Offending specs and
//! paths are rendered bold so they stand out of the surrounding message.

use std::fmt::Display;

use console::Style;

/// Render a spec or path bold for diagnostics.
pub fn bold(text: &str) -> String {
    Style::new().bold().apply_to(text).to_string()
}

/// Informational diagnostic line.
pub fn info(message: impl Display) {
    println!("{}", message);
}

/// Warning line.
pub fn warning(message: impl Display) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_keeps_text() {
        // Styling may be stripped on non-terminal output; the text survives.
        assert!(bold("vim").contains("vim"));
    }
}
