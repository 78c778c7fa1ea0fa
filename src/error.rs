//! Error types for the md2report library.
//!
//! Two failure classes exist, and only one of them lives here:
//!
//! * **Fatal** — the run cannot produce an artifact at all (source document
//!   missing, PDF backend unavailable, output path unwritable). These are
//!   [`ReportError`] variants returned from the top-level entry points.
//!
//! * **Non-fatal** — a referenced screenshot could not be read. By design the
//!   report is still generated: the reference degrades to a visible inline
//!   placeholder and the path is collected in
//!   [`crate::output::RenderStats::missing_images`]. One missing screenshot
//!   must not block the rest of the report, so there is no error variant for
//!   it.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the md2report library.
///
/// Missing screenshots are not represented here; see the module docs.
#[derive(Debug, Error)]
pub enum ReportError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source Markdown file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nNothing was generated; check the path and retry.")]
    SourceNotFound { path: PathBuf },

    /// Source file exists but could not be read (permissions, invalid UTF-8).
    #[error("Failed to read Markdown file '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Backend errors ────────────────────────────────────────────────────
    /// The external PDF renderer could not be spawned or exited non-zero.
    #[error(
        "PDF generation failed: {detail}\n\
         Check that wkhtmltopdf is installed and on PATH (https://wkhtmltopdf.org),\n\
         or generate HTML instead with --format html and print to PDF from the browser."
    )]
    PdfBackendFailed { detail: String },

    /// Could not launch the default viewer on the HTML artifact.
    #[error("Failed to open '{path}' in the default viewer: {detail}")]
    ViewerLaunchFailed { path: PathBuf, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write the output artifact.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
