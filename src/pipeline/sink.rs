//! Output sinks: the two interchangeable terminal stages.
//!
//! * [`write_pdf`] pipes the assembled document into the external
//!   `wkhtmltopdf` binary. The backend is consumed as a black box: HTML on
//!   stdin plus a fixed option set, PDF file out. A missing binary or a
//!   non-zero exit surfaces as [`ReportError::PdfBackendFailed`] — the
//!   original script logged and exited 0 here; this implementation makes the
//!   failure explicit so the process can exit non-zero.
//!
//! * [`write_html`] persists the document to disk (atomic: temp file +
//!   rename) and launches the host's default viewer, from which the user
//!   prints to PDF manually.
//!
//! Both sinks are stateless single-shot transformations. There is no retry,
//! no timeout: if the backend hangs, the process hangs with it.

use crate::config::PdfOptions;
use crate::error::ReportError;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Render the assembled document to `output` via wkhtmltopdf.
///
/// `-` as the input argument makes wkhtmltopdf read the HTML from stdin, so
/// no intermediate file is written.
pub fn write_pdf(
    html: &str,
    output: &Path,
    binary: &Path,
    options: &PdfOptions,
) -> Result<(), ReportError> {
    debug!(
        "Spawning {} with {} option args",
        binary.display(),
        options.to_args().len()
    );

    let mut child = Command::new(binary)
        .args(options.to_args())
        .arg("-")
        .arg(output)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            let detail = if e.kind() == std::io::ErrorKind::NotFound {
                format!("'{}' was not found", binary.display())
            } else {
                format!("could not spawn '{}': {}", binary.display(), e)
            };
            ReportError::PdfBackendFailed { detail }
        })?;

    // stdin was requested piped above, so take() cannot return None.
    let mut stdin = child.stdin.take().ok_or_else(|| ReportError::PdfBackendFailed {
        detail: "backend stdin unavailable".into(),
    })?;
    stdin
        .write_all(html.as_bytes())
        .map_err(|e| ReportError::PdfBackendFailed {
            detail: format!("failed to send HTML to backend: {e}"),
        })?;
    drop(stdin); // close stdin so the backend starts rendering

    let result = child
        .wait_with_output()
        .map_err(|e| ReportError::PdfBackendFailed {
            detail: format!("backend did not complete: {e}"),
        })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        let tail: String = stderr
            .lines()
            .rev()
            .take(3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect::<Vec<_>>()
            .join("\n");
        return Err(ReportError::PdfBackendFailed {
            detail: format!("{} exited with {}: {}", binary.display(), result.status, tail),
        });
    }

    info!("PDF written to {}", output.display());
    Ok(())
}

/// Write the assembled document to `output` and optionally open the viewer.
///
/// The write is atomic (temp file + rename) so a crash mid-write never
/// leaves a truncated artifact behind.
pub fn write_html(html: &str, output: &Path, open_viewer: bool) -> Result<(), ReportError> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ReportError::OutputWriteFailed {
                path: output.to_path_buf(),
                source: e,
            })?;
        }
    }

    let tmp_path = output.with_extension("html.tmp");
    std::fs::write(&tmp_path, html).map_err(|e| ReportError::OutputWriteFailed {
        path: output.to_path_buf(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, output).map_err(|e| ReportError::OutputWriteFailed {
        path: output.to_path_buf(),
        source: e,
    })?;

    info!("HTML written to {}", output.display());

    if open_viewer {
        open::that(output).map_err(|e| ReportError::ViewerLaunchFailed {
            path: output.to_path_buf(),
            detail: e.to_string(),
        })?;
        info!("Opened {} in the default viewer", output.display());
    }

    Ok(())
}
