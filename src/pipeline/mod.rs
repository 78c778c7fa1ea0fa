//! Pipeline stages for report generation.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap the terminal
//! stage (PDF vs. HTML) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ embed ──▶ render ──▶ assemble ──▶ sink
//! (file)   (base64)  (cmark)    (template)   (wkhtmltopdf | write+open)
//! ```
//!
//! 1. [`input`]    — read the source Markdown as UTF-8 text
//! 2. [`embed`]    — replace `![label](path)` references with inline base64
//!    `<img>` elements, or visible placeholders when a file is missing
//! 3. [`render`]   — Markdown → HTML fragment via pulldown-cmark
//! 4. [`assemble`] — wrap the fragment in the fixed style template
//! 5. [`sink`]     — hand the document to wkhtmltopdf, or write it to disk
//!    and open the default viewer
//!
//! Data flows strictly left to right; no stage reads back from a later one.

pub mod assemble;
pub mod embed;
pub mod input;
pub mod render;
pub mod sink;
