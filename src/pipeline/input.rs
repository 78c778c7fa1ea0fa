//! Loader: read the source Markdown document.
//!
//! The report is a single small text file, so it is read whole into memory —
//! no streaming, no partial reads. A missing source is the one fatal error
//! the pipeline reports before doing any work at all.

use crate::error::ReportError;
use std::path::Path;
use tracing::debug;

/// Read the source document as UTF-8 text.
///
/// # Errors
/// * [`ReportError::SourceNotFound`] when the path does not exist.
/// * [`ReportError::SourceRead`] when the file exists but cannot be read
///   (permissions, invalid UTF-8).
pub fn load_source(path: &Path) -> Result<String, ReportError> {
    if !path.exists() {
        return Err(ReportError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ReportError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => ReportError::SourceRead {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}
