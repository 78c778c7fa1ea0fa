//! Top-level pipeline orchestration.
//!
//! Two entry points:
//!
//! * [`render_document`] runs load → embed → render → assemble and returns
//!   the assembled HTML without touching the file system beyond reads. Tests
//!   and callers that want the document string use this.
//! * [`generate`] runs the full pipeline including the output sink and
//!   returns run statistics.
//!
//! The pipeline is single-threaded and fully synchronous: every stage is a
//! plain function call, data flows strictly left to right, and one run has
//! exactly one terminal state — an artifact on disk, or a fatal error.

use crate::config::{OutputFormat, ReportConfig};
use crate::error::ReportError;
use crate::output::{RenderStats, RenderedDocument, ReportOutput};
use crate::pipeline::{assemble, embed, input, render, sink};
use std::time::Instant;
use tracing::{info, warn};

/// Run stages 1–4: load the source, embed screenshots, render Markdown,
/// assemble the styled document.
///
/// # Errors
/// Only the Loader can fail here; missing screenshots degrade to inline
/// placeholders and are reported in [`RenderedDocument::missing_images`].
pub fn render_document(config: &ReportConfig) -> Result<RenderedDocument, ReportError> {
    let source = input::load_source(&config.input)?;

    let embedded = embed::embed_images(&source, &config.screenshot_prefix, &config.base_dir);
    if !embedded.missing.is_empty() {
        warn!(
            "{} screenshot(s) missing; placeholders emitted",
            embedded.missing.len()
        );
    }

    let fragment = render::render_fragment(&embedded.markdown);
    let html = assemble::assemble(&fragment, &config.title, config.format);

    Ok(RenderedDocument {
        html,
        embedded_images: embedded.embedded,
        missing_images: embedded.missing,
    })
}

/// Run the whole pipeline and write the artifact.
///
/// # Errors
/// * [`ReportError::SourceNotFound`] / [`ReportError::SourceRead`] — fatal,
///   nothing is written.
/// * [`ReportError::PdfBackendFailed`] — the external renderer is missing or
///   exited non-zero.
/// * [`ReportError::OutputWriteFailed`] / [`ReportError::ViewerLaunchFailed`]
///   — HTML sink failures.
pub fn generate(config: &ReportConfig) -> Result<ReportOutput, ReportError> {
    let start = Instant::now();
    info!(
        "Generating {:?} report from {}",
        config.format,
        config.input.display()
    );

    let doc = render_document(config)?;

    match config.format {
        OutputFormat::Pdf => sink::write_pdf(
            &doc.html,
            &config.output,
            &config.wkhtmltopdf,
            &config.pdf_options,
        )?,
        OutputFormat::Html => sink::write_html(&doc.html, &config.output, config.open_viewer)?,
    }

    let stats = RenderStats {
        embedded_images: doc.embedded_images,
        missing_images: doc.missing_images.len(),
        html_bytes: doc.html.len(),
        total_duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Done: {} ({} images embedded, {} missing, {}ms)",
        config.output.display(),
        stats.embedded_images,
        stats.missing_images,
        stats.total_duration_ms
    );

    Ok(ReportOutput {
        artifact: config.output.clone(),
        stats,
        missing_images: doc.missing_images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &std::path::Path, input: &str) -> ReportConfig {
        ReportConfig::builder()
            .input(dir.join(input))
            .output(dir.join("out.html"))
            .format(OutputFormat::Html)
            .base_dir(dir)
            .open_viewer(false)
            .build()
            .unwrap()
    }

    #[test]
    fn missing_source_aborts_before_any_work() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path(), "absent.md");

        let err = generate(&config).unwrap_err();
        assert!(matches!(err, ReportError::SourceNotFound { .. }));
        assert!(!config.output.exists(), "no artifact may be created");
    }

    #[test]
    fn body_without_images_equals_renderer_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("plain.md"), "# 見出し\n\n本文です。\n").unwrap();
        let config = config_for(dir.path(), "plain.md");

        let doc = render_document(&config).unwrap();
        let fragment = crate::pipeline::render::render_fragment("# 見出し\n\n本文です。\n");

        assert_eq!(doc.embedded_images, 0);
        assert!(doc.missing_images.is_empty());
        assert!(doc.html.contains(&format!("<body>\n{fragment}\n</body>")));
    }

    #[test]
    fn render_document_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("r.md"),
            "# T\n\n![gone](missing.png)\n\n| a |\n|---|\n| 1 |\n",
        )
        .unwrap();
        let config = config_for(dir.path(), "r.md");

        let first = render_document(&config).unwrap();
        let second = render_document(&config).unwrap();
        assert_eq!(first.html, second.html);
    }

    #[test]
    fn generate_reports_stats() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("s.md"), "# T\n\n![gone](missing.png)\n").unwrap();
        let config = config_for(dir.path(), "s.md");

        let output = generate(&config).unwrap();
        assert_eq!(output.artifact, config.output);
        assert_eq!(output.stats.embedded_images, 0);
        assert_eq!(output.stats.missing_images, 1);
        assert_eq!(output.missing_images, vec!["missing.png".to_string()]);
        assert!(output.stats.html_bytes > 0);
        assert!(config.output.exists());
    }
}
