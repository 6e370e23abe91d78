//! Plain-text rendering of text received from the recipe service.
//!
//! Summaries and instructions arrive as HTML written by third parties, and
//! every other field is just as untrusted. Nothing reaches the terminal
//! without passing through this module: markup is rendered to text with
//! `html2text` and control characters (escape sequences, bells) are dropped.

use html2text::render::text_renderer::TrivialDecorator;

const WRAP_WIDTH: usize = 100;

/// Converts an HTML fragment to plain lines of text.
pub fn to_plain_text(html: &str) -> String {
    let text =
        html2text::from_read_with_decorator(html.as_bytes(), WRAP_WIDTH, TrivialDecorator::new());

    // Clean up excessive whitespace
    strip_controls(&text)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-line field (title, ingredient line, tag) safe for the terminal.
pub fn plain_field(text: &str) -> String {
    strip_controls(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_controls(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}
