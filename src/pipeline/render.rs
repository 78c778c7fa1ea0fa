//! Markdown renderer: document text → HTML fragment.
//!
//! A pure function over pulldown-cmark with exactly two extensions' worth of
//! behaviour: GFM tables (`ENABLE_TABLES`) and fenced code blocks, which are
//! core CommonMark and need no flag. Footnotes, task lists, strikethrough and
//! the rest stay off — syntax outside the enabled set renders however
//! pulldown-cmark's defaults dictate, and that is accepted as-is.
//!
//! The embedder runs before this stage, so raw `<img>`/`<p>` substitutions
//! arrive here as inline HTML and pass through verbatim.

use pulldown_cmark::{html, Options, Parser};

/// Convert (image-substituted) Markdown to an HTML fragment.
pub fn render_fragment(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
