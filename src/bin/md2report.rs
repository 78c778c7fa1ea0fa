//! CLI binary for md2report.
//!
//! A thin shim over the library crate that maps CLI flags to `ReportConfig`
//! and prints a summary. Defaults reproduce the original one-shot behaviour:
//! fixed input and output file names in the working directory.

use anyhow::{Context, Result};
use clap::Parser;
use md2report::{generate, OutputFormat, ReportConfig};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Original behaviour: fixed input name, PDF artifact in the working directory
  md2report

  # Explicit input and output
  md2report report.md -o report.pdf

  # HTML variant: write the file and open the default browser,
  # then print to PDF manually
  md2report report.md --format html

  # HTML without launching a viewer (CI)
  md2report report.md --format html --no-open

  # Machine-readable run statistics
  md2report report.md --json

REQUIREMENTS:
  PDF output shells out to wkhtmltopdf (https://wkhtmltopdf.org), which must
  be installed and on PATH. HTML output has no external dependency.

SCREENSHOT RESOLUTION:
  Image paths starting with .playwright-mcp/ are read from ../.playwright-mcp/
  (the screenshot tool deposits files next to the report's parent directory).
  Missing screenshots become visible inline placeholders; the run continues.
"#;

/// Convert a Markdown report to a styled PDF or HTML document.
#[derive(Parser, Debug)]
#[command(
    name = "md2report",
    version,
    about = "Convert a Markdown report to a styled PDF or HTML document",
    long_about = "Convert a single Markdown report into a styled, self-contained PDF or HTML \
document. Referenced screenshots are inlined as base64 data URIs; missing screenshots degrade \
to visible placeholders instead of aborting the run.",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Source Markdown file. Defaults to the fixed report name in the
    /// working directory.
    input: Option<PathBuf>,

    /// Artifact path. Defaults to the fixed name matching --format.
    #[arg(short, long, env = "MD2REPORT_OUTPUT")]
    output: Option<PathBuf>,

    /// Output format: pdf (wkhtmltopdf) or html (write + open viewer).
    #[arg(long, env = "MD2REPORT_FORMAT", value_enum, default_value = "pdf")]
    format: FormatArg,

    /// Document <title> in the assembled HTML.
    #[arg(long, env = "MD2REPORT_TITLE")]
    title: Option<String>,

    /// Name or path of the wkhtmltopdf binary.
    #[arg(long, env = "MD2REPORT_WKHTMLTOPDF", default_value = "wkhtmltopdf")]
    wkhtmltopdf: PathBuf,

    /// Screenshot-directory prefix that triggers the ../ rewrite.
    #[arg(long, env = "MD2REPORT_SCREENSHOT_PREFIX", default_value = ".playwright-mcp/")]
    screenshot_prefix: String,

    /// Do not launch the default viewer after writing HTML.
    #[arg(long, env = "MD2REPORT_NO_OPEN")]
    no_open: bool,

    /// Print run statistics as JSON to stdout.
    #[arg(long, env = "MD2REPORT_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2REPORT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2REPORT_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Pdf,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(v: FormatArg) -> Self {
        match v {
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let msg = format!("{e:#}");
            if io::stderr().is_terminal() {
                eprintln!("{} {}", red("✗"), msg);
            } else {
                eprintln!("error: {msg}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let output = generate(&config).context("Report generation failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        );
    }

    if !cli.quiet && !cli.json {
        eprintln!(
            "{} {}  {}",
            green("✔"),
            bold(&output.artifact.display().to_string()),
            dim(&format!(
                "{} images embedded, {}ms",
                output.stats.embedded_images, output.stats.total_duration_ms
            )),
        );
        for path in &output.missing_images {
            eprintln!("  {} missing screenshot: {}", red("!"), path);
        }
        if config.format == OutputFormat::Html && config.open_viewer {
            eprintln!("   Print to PDF from the browser (印刷 → PDFとして保存).");
        }
    }

    Ok(())
}

/// Map CLI args to `ReportConfig`.
fn build_config(cli: &Cli) -> Result<ReportConfig> {
    let mut builder = ReportConfig::builder()
        .format(cli.format.into())
        .wkhtmltopdf(&cli.wkhtmltopdf)
        .screenshot_prefix(&cli.screenshot_prefix)
        .open_viewer(!cli.no_open);

    if let Some(ref input) = cli.input {
        builder = builder.input(input);
    }
    if let Some(ref output) = cli.output {
        builder = builder.output(output);
    }
    if let Some(ref title) = cli.title {
        builder = builder.title(title.clone());
    }

    builder.build().context("Invalid configuration")
}
