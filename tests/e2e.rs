//! End-to-end integration tests for md2report.
//!
//! Everything except the wkhtmltopdf test runs hermetically in a temp
//! directory. The PDF test needs the external wkhtmltopdf binary and is
//! gated behind the `WKHTMLTOPDF_E2E` environment variable so it does not
//! run in CI unless explicitly requested:
//!
//!   WKHTMLTOPDF_E2E=1 cargo test --test e2e -- --nocapture

use base64::{engine::general_purpose::STANDARD, Engine as _};
use md2report::{generate, render_document, OutputFormat, ReportConfig, ReportError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

/// A workspace laid out the way the screenshot tool leaves it:
///
/// ```text
/// <root>/
///   .playwright-mcp/x.png     (screenshot deposited by the tool)
///   report/report.md          (the report, referencing .playwright-mcp/x.png)
/// ```
struct Workspace {
    _root: TempDir,
    report_dir: PathBuf,
    screenshot_dir: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let report_dir = root.path().join("report");
        let screenshot_dir = root.path().join(".playwright-mcp");
        std::fs::create_dir_all(&report_dir).unwrap();
        std::fs::create_dir_all(&screenshot_dir).unwrap();
        Self {
            _root: root,
            report_dir,
            screenshot_dir,
        }
    }

    fn write_report(&self, markdown: &str) -> PathBuf {
        let path = self.report_dir.join("report.md");
        std::fs::write(&path, markdown).unwrap();
        path
    }

    fn config(&self, format: OutputFormat) -> ReportConfig {
        ReportConfig::builder()
            .input(self.report_dir.join("report.md"))
            .output(self.report_dir.join(match format {
                OutputFormat::Pdf => "report.pdf",
                OutputFormat::Html => "report.html",
            }))
            .format(format)
            .base_dir(&self.report_dir)
            .open_viewer(false)
            .build()
            .unwrap()
    }
}

/// Write a real 1×1 PNG and return its bytes.
fn write_one_pixel_png(path: &Path) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([255, 0, 0, 255]));
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
    std::fs::read(path).unwrap()
}

/// Extract the first base64 img payload from an HTML document.
fn first_base64_payload(html: &str) -> Option<&str> {
    html.split("data:image/png;base64,")
        .nth(1)
        .and_then(|s| s.split('"').next())
}

// ── Scenario: screenshot present ─────────────────────────────────────────────

#[test]
fn heading_and_embedded_screenshot() {
    let ws = Workspace::new();
    let png_bytes = write_one_pixel_png(&ws.screenshot_dir.join("x.png"));
    ws.write_report("# Title\n![shot](.playwright-mcp/x.png)\n");

    let doc = render_document(&ws.config(OutputFormat::Html)).unwrap();

    assert!(doc.html.contains("<h1>Title</h1>"));
    assert_eq!(doc.embedded_images, 1);
    assert!(doc.missing_images.is_empty());

    let payload = first_base64_payload(&doc.html).expect("img with data URI");
    assert_eq!(
        STANDARD.decode(payload).unwrap(),
        png_bytes,
        "decoded payload must equal the screenshot bytes exactly"
    );
}

// ── Scenario: screenshot absent ──────────────────────────────────────────────

#[test]
fn missing_screenshot_yields_placeholder_not_img() {
    let ws = Workspace::new();
    ws.write_report("# Title\n![shot](.playwright-mcp/x.png)\n");

    let doc = render_document(&ws.config(OutputFormat::Html)).unwrap();

    assert!(doc.html.contains("<h1>Title</h1>"));
    assert!(doc.html.contains(".playwright-mcp/x.png"), "placeholder carries the path");
    assert!(doc.html.contains("画像が見つかりません"));
    assert!(!doc.html.contains("<img"), "no img element for the missing reference");
    assert_eq!(doc.missing_images, vec!["../.playwright-mcp/x.png".to_string()]);
}

// ── Scenario: missing source document ────────────────────────────────────────

#[test]
fn missing_source_is_fatal_and_writes_nothing() {
    let ws = Workspace::new();
    let config = ws.config(OutputFormat::Html);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, ReportError::SourceNotFound { .. }));
    assert!(!config.output.exists());
}

// ── Full HTML pipeline ───────────────────────────────────────────────────────

#[test]
fn html_pipeline_writes_self_contained_artifact() {
    let ws = Workspace::new();
    write_one_pixel_png(&ws.screenshot_dir.join("a.png"));
    ws.write_report(
        "# レポート\n\n\
         | 項目 | 値 |\n|---|---|\n| A | 1 |\n\n\
         ```python\nprint('hi')\n```\n\n\
         ![結果](.playwright-mcp/a.png)\n",
    );
    let config = ws.config(OutputFormat::Html);

    let output = generate(&config).unwrap();

    let written = std::fs::read_to_string(&output.artifact).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("<h1>レポート</h1>"));
    assert!(written.contains("<table>"));
    assert!(written.contains("language-python"));
    assert!(written.contains("data:image/png;base64,"));
    assert!(written.contains("@media print"), "HTML variant carries print hints");
    assert_eq!(output.stats.embedded_images, 1);
    assert_eq!(output.stats.missing_images, 0);
    assert_eq!(output.stats.html_bytes, written.len());
}

#[test]
fn assembled_output_is_byte_identical_across_runs() {
    let ws = Workspace::new();
    write_one_pixel_png(&ws.screenshot_dir.join("a.png"));
    ws.write_report("# T\n![a](.playwright-mcp/a.png)\n![b](.playwright-mcp/b.png)\n");
    let config = ws.config(OutputFormat::Html);

    let first = render_document(&config).unwrap().html;
    let second = render_document(&config).unwrap().html;
    assert_eq!(first, second);
}

#[test]
fn multiple_screenshots_resolved_independently() {
    let ws = Workspace::new();
    write_one_pixel_png(&ws.screenshot_dir.join("one.png"));
    ws.write_report(
        "![one](.playwright-mcp/one.png)\n\n![two](.playwright-mcp/two.png)\n",
    );

    let doc = render_document(&ws.config(OutputFormat::Html)).unwrap();
    assert_eq!(doc.embedded_images, 1);
    assert_eq!(doc.missing_images, vec!["../.playwright-mcp/two.png".to_string()]);
    assert!(doc.html.contains("data:image/png;base64,"));
    assert!(doc.html.contains("画像が見つかりません: ../.playwright-mcp/two.png"));
}

// ── PDF variant ──────────────────────────────────────────────────────────────

#[test]
fn pdf_backend_missing_surfaces_as_error() {
    let ws = Workspace::new();
    ws.write_report("# T\n");
    let mut config = ws.config(OutputFormat::Pdf);
    config.wkhtmltopdf = PathBuf::from("md2report-test-no-such-binary");

    let err = generate(&config).unwrap_err();
    match err {
        ReportError::PdfBackendFailed { .. } => {
            assert!(err.to_string().contains("wkhtmltopdf is installed"));
        }
        other => panic!("expected PdfBackendFailed, got {other:?}"),
    }
    assert!(!config.output.exists());
}

/// Skip unless WKHTMLTOPDF_E2E=1 is set (CI has no backend installed).
macro_rules! e2e_skip_unless_backend {
    () => {
        if std::env::var("WKHTMLTOPDF_E2E").is_err() {
            println!("SKIP — set WKHTMLTOPDF_E2E=1 to run wkhtmltopdf tests");
            return;
        }
    };
}

#[test]
fn pdf_pipeline_produces_pdf_magic_bytes() {
    e2e_skip_unless_backend!();

    let ws = Workspace::new();
    write_one_pixel_png(&ws.screenshot_dir.join("a.png"));
    ws.write_report("# PDF Test\n![a](.playwright-mcp/a.png)\n");
    let config = ws.config(OutputFormat::Pdf);

    let output = generate(&config).unwrap();
    let bytes = std::fs::read(&output.artifact).unwrap();
    assert!(bytes.starts_with(b"%PDF"), "artifact must be a PDF");
}
