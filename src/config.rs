//! Configuration types for report generation.
//!
//! All pipeline behaviour is controlled through [`ReportConfig`], built via
//! its [`ReportConfigBuilder`]. The defaults reproduce the historical
//! hard-coded values of the original report script exactly — fixed input and
//! output file names, the Japanese report title, the `.playwright-mcp/`
//! screenshot-prefix rewrite — but every one of them is an ordinary field so
//! tests and callers can inspect or override them.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fixed source file name the original script expected in the working directory.
pub const DEFAULT_INPUT: &str = "レポート課題_AI技術実装レポート.md";

/// Fixed PDF artifact name.
pub const DEFAULT_PDF_OUTPUT: &str = "AI技術実装レポート_samurAI.pdf";

/// Fixed HTML artifact name.
pub const DEFAULT_HTML_OUTPUT: &str = "AI技術実装レポート_samurAI.html";

/// Fixed `<title>` of the assembled document.
pub const DEFAULT_TITLE: &str = "AI技術実装レポート - samurAI";

/// Screenshot-tool directory prefix that triggers the parent-directory rewrite.
///
/// The screenshot tool deposits files next to the report's *parent* directory,
/// so `![x](.playwright-mcp/a.png)` inside the report must be read from
/// `../.playwright-mcp/a.png`.
pub const SCREENSHOT_PREFIX: &str = ".playwright-mcp/";

/// Configuration for one report-generation run.
///
/// Built via [`ReportConfig::builder()`] or [`ReportConfig::default()`].
///
/// # Example
/// ```rust
/// use md2report::{OutputFormat, ReportConfig};
///
/// let config = ReportConfig::builder()
///     .input("notes/report.md")
///     .format(OutputFormat::Html)
///     .open_viewer(false)
///     .build()
///     .unwrap();
/// assert_eq!(config.output.to_str().unwrap(), "AI技術実装レポート_samurAI.html");
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Source Markdown document. Default: [`DEFAULT_INPUT`].
    pub input: PathBuf,

    /// Artifact path. Default depends on [`Self::format`]:
    /// [`DEFAULT_PDF_OUTPUT`] or [`DEFAULT_HTML_OUTPUT`].
    pub output: PathBuf,

    /// Output sink to run. Default: [`OutputFormat::Pdf`].
    pub format: OutputFormat,

    /// Document `<title>`. Default: [`DEFAULT_TITLE`].
    pub title: String,

    /// Image paths starting with this prefix are rewritten to climb one
    /// directory (`../` prepended). Default: [`SCREENSHOT_PREFIX`].
    pub screenshot_prefix: String,

    /// Directory against which relative image paths are resolved.
    /// Default: `"."` — the working directory, as the original script did.
    pub base_dir: PathBuf,

    /// Name or path of the external wkhtmltopdf binary. Default: `wkhtmltopdf`.
    pub wkhtmltopdf: PathBuf,

    /// Page geometry handed to the PDF backend.
    pub pdf_options: PdfOptions,

    /// Launch the default viewer after writing the HTML artifact.
    /// Ignored for PDF output. Default: true.
    pub open_viewer: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_PDF_OUTPUT),
            format: OutputFormat::Pdf,
            title: DEFAULT_TITLE.to_string(),
            screenshot_prefix: SCREENSHOT_PREFIX.to_string(),
            base_dir: PathBuf::from("."),
            wkhtmltopdf: PathBuf::from("wkhtmltopdf"),
            pdf_options: PdfOptions::default(),
            open_viewer: true,
        }
    }
}

impl ReportConfig {
    /// Create a new builder for `ReportConfig`.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder {
            config: Self::default(),
            output_set: false,
        }
    }
}

/// Builder for [`ReportConfig`].
///
/// When no explicit output path is given, `build()` picks the fixed default
/// artifact name matching the selected format.
#[derive(Debug)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
    output_set: bool,
}

impl ReportConfigBuilder {
    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self.output_set = true;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn screenshot_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.screenshot_prefix = prefix.into();
        self
    }

    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.base_dir = dir.into();
        self
    }

    pub fn wkhtmltopdf(mut self, binary: impl Into<PathBuf>) -> Self {
        self.config.wkhtmltopdf = binary.into();
        self
    }

    pub fn pdf_options(mut self, options: PdfOptions) -> Self {
        self.config.pdf_options = options;
        self
    }

    pub fn open_viewer(mut self, v: bool) -> Self {
        self.config.open_viewer = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(mut self) -> Result<ReportConfig, ReportError> {
        if self.config.input.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig(
                "Input path must not be empty".into(),
            ));
        }
        if !self.output_set {
            self.config.output = PathBuf::from(match self.config.format {
                OutputFormat::Pdf => DEFAULT_PDF_OUTPUT,
                OutputFormat::Html => DEFAULT_HTML_OUTPUT,
            });
        }
        if self.config.output.as_os_str().is_empty() {
            return Err(ReportError::InvalidConfig(
                "Output path must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Which terminal stage of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Render the assembled document to PDF via wkhtmltopdf. (default)
    #[default]
    Pdf,
    /// Write the assembled document to disk and open the default viewer;
    /// the user prints to PDF manually from there.
    Html,
}

/// Page geometry handed to wkhtmltopdf.
///
/// Defaults match the original script: A4 with ¾-inch margins all round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfOptions {
    pub page_size: String,
    pub margin_top: String,
    pub margin_right: String,
    pub margin_bottom: String,
    pub margin_left: String,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            margin_top: "0.75in".to_string(),
            margin_right: "0.75in".to_string(),
            margin_bottom: "0.75in".to_string(),
            margin_left: "0.75in".to_string(),
        }
    }
}

impl PdfOptions {
    /// Render as wkhtmltopdf command-line arguments.
    ///
    /// `--no-outline` and `--enable-local-file-access` are always passed:
    /// the original options set disabled the outline and allowed local file
    /// access for image loading.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "--page-size".into(),
            self.page_size.clone(),
            "--margin-top".into(),
            self.margin_top.clone(),
            "--margin-right".into(),
            self.margin_right.clone(),
            "--margin-bottom".into(),
            self.margin_bottom.clone(),
            "--margin-left".into(),
            self.margin_left.clone(),
            "--encoding".into(),
            "UTF-8".into(),
            "--no-outline".into(),
            "--enable-local-file-access".into(),
        ]
    }
}
