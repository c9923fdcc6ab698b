//! Markdown rendering.
//!
//! Thin wrapper over the renderer so the rest of the pipeline treats
//! markdown-to-HTML as a black box with a single entry point.

use pulldown_cmark::{Parser, html as md_html};

/// Render CommonMark text to an HTML string.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new(text);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    body_html
}
