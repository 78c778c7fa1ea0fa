//! # md2report
//!
//! Convert a single Markdown report into a styled PDF or HTML document,
//! inlining referenced screenshot images as base64 data URIs.
//!
//! ## Why this crate?
//!
//! Report Markdown that references screenshots is awkward to hand around:
//! the images live in a sibling directory deposited by the screenshot tool
//! and break the moment the file moves. This crate embeds every screenshot
//! directly into the document, wraps the result in a print-ready style
//! template, and either renders it to PDF via wkhtmltopdf or writes HTML
//! and opens the browser for manual print-to-PDF.
//!
//! ## Pipeline Overview
//!
//! ```text
//! report.md
//!  │
//!  ├─ 1. Input     read the source Markdown as UTF-8
//!  ├─ 2. Embed     ![label](path) → <img src="data:image/png;base64,…">
//!  ├─ 3. Render    Markdown → HTML fragment (tables + fenced code)
//!  ├─ 4. Assemble  wrap in the fixed Japanese-first style template
//!  └─ 5. Sink      wkhtmltopdf → PDF   |   write HTML + open viewer
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2report::{generate, OutputFormat, ReportConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ReportConfig::builder()
//!         .input("report.md")
//!         .format(OutputFormat::Pdf)
//!         .output("report.pdf")
//!         .build()?;
//!     let output = generate(&config)?;
//!     eprintln!(
//!         "{} images embedded, {} missing",
//!         output.stats.embedded_images, output.stats.missing_images
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Failure policy
//!
//! A missing screenshot is non-fatal: the reference degrades to a visible
//! inline placeholder and the run continues. A missing *source document* or
//! a failing PDF backend is fatal and returns an error — the CLI maps both
//! to a non-zero exit status.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2report` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{OutputFormat, PdfOptions, ReportConfig, ReportConfigBuilder};
pub use convert::{generate, render_document};
pub use error::ReportError;
pub use output::{RenderStats, RenderedDocument, ReportOutput};
