//! Result types returned by the report pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The assembled document before it reaches an output sink.
///
/// Returned by [`crate::render_document`]; tests compare the HTML directly
/// without touching the file system.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Complete HTML document: style shell + rendered fragment.
    pub html: String,
    /// Number of image references successfully embedded as base64.
    pub embedded_images: usize,
    /// Resolved paths of image references that could not be read.
    /// Each corresponds to an inline placeholder in `html`.
    pub missing_images: Vec<String>,
}

/// Result of a full [`crate::generate`] run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Path of the artifact written to disk.
    pub artifact: PathBuf,
    /// Run statistics.
    pub stats: RenderStats,
    /// Resolved paths of screenshots that degraded to placeholders.
    pub missing_images: Vec<String>,
}

/// Statistics for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderStats {
    /// Image references embedded as base64 payloads.
    pub embedded_images: usize,
    /// Image references that degraded to placeholders.
    pub missing_images: usize,
    /// Size of the assembled HTML document in bytes.
    pub html_bytes: usize,
    /// Wall-clock duration of the whole run.
    pub total_duration_ms: u64,
}
