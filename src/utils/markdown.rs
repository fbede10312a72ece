//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::Options;

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Heading anchors (`id` derived from the heading text)
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
/// Anchor ids survive so the contents sidebar can scroll to a section.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.header_ids = Some(String::new());

    let html_output = comrak::markdown_to_html(markdown, &options);

    ammonia::Builder::default()
        .add_tag_attributes("a", &["id"])
        .clean(&html_output)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        let html = markdown_to_html("**Atomic Habits** explains ~~nothing~~ much.");
        assert!(html.contains("<strong>Atomic Habits</strong>"));
        assert!(html.contains("<del>nothing</del>"));
    }

    #[test]
    fn test_heading_anchor_kept() {
        let html = markdown_to_html("### The 1st Law: Make It Obvious");
        assert!(html.contains("id=\"the-1st-law-make-it-obvious\""));
        assert!(html.contains("The 1st Law: Make It Obvious"));
    }

    #[test]
    fn test_script_removed() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }
}
