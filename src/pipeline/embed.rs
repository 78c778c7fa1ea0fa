//! Image embedder: replace `![label](path)` references with inline base64.
//!
//! Screenshots are inlined as `data:image/png;base64,…` URIs so the assembled
//! document is self-contained — the PDF backend and the browser both load it
//! without needing the image files next to the artifact.
//!
//! Two deliberate behaviours carried over from the original script:
//!
//! * The MIME type is always declared `image/png`, whatever the file actually
//!   contains. Screenshots are PNGs in practice.
//! * The markdown label is discarded, not preserved as alt text. Known
//!   fidelity loss, kept for parity.
//!
//! A reference whose file cannot be read degrades to a visible inline
//! placeholder carrying the resolved path. Best-effort policy: one missing
//! screenshot must not block generation of the rest of the report.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `![label](path)` — label non-greedy and discarded, path is capture 1.
static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\(([^)]+)\)").unwrap());

/// Result of the substitution pass.
///
/// Every image reference in the input appears in exactly one of the two
/// counters: embedded or missing. None passes through unmodified.
#[derive(Debug)]
pub struct EmbedResult {
    /// Document text with all image references substituted.
    pub markdown: String,
    /// Number of references embedded as base64 payloads.
    pub embedded: usize,
    /// Resolved paths of references that degraded to placeholders.
    pub missing: Vec<String>,
}

/// Rewrite a screenshot path per the fixed normalisation rule.
///
/// Paths starting with `prefix` climb one directory level: the screenshot
/// tool deposits files relative to the report's parent directory, not the
/// report itself. Any other path is returned unmodified.
pub fn resolve_path<'a>(path: &'a str, prefix: &str) -> Cow<'a, str> {
    if !prefix.is_empty() && path.starts_with(prefix) {
        Cow::Owned(format!("../{path}"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Substitute every image reference in `markdown`.
///
/// Relative paths are read against `base_dir` (the working directory in the
/// original script); the placeholder and the [`EmbedResult::missing`] entry
/// both carry the resolved (post-rewrite) path, not the joined one.
pub fn embed_images(markdown: &str, prefix: &str, base_dir: &Path) -> EmbedResult {
    let mut embedded = 0usize;
    let mut missing: Vec<String> = Vec::new();

    let substituted = RE_IMAGE.replace_all(markdown, |caps: &regex::Captures<'_>| {
        let resolved = resolve_path(&caps[1], prefix);
        let read_path = if Path::new(resolved.as_ref()).is_relative() {
            base_dir.join(resolved.as_ref())
        } else {
            PathBuf::from(resolved.as_ref())
        };

        match std::fs::read(&read_path) {
            Ok(bytes) => {
                let b64 = STANDARD.encode(&bytes);
                debug!(
                    "Embedded {} ({} bytes → {} base64 chars)",
                    read_path.display(),
                    bytes.len(),
                    b64.len()
                );
                embedded += 1;
                format!(
                    r#"<img src="data:image/png;base64,{b64}" style="max-width: 100%; height: auto;" />"#
                )
            }
            Err(e) => {
                warn!("Screenshot not readable: {} ({})", read_path.display(), e);
                let shown = resolved.into_owned();
                let placeholder = format!(
                    r#"<p style="color: red; font-style: italic;">画像が見つかりません: {shown}</p>"#
                );
                missing.push(shown);
                placeholder
            }
        }
    });

    EmbedResult {
        markdown: substituted.into_owned(),
        embedded,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PathBuf {
        PathBuf::from(".")
    }

    #[test]
    fn prefix_path_climbs_one_directory() {
        assert_eq!(
            resolve_path(".playwright-mcp/shot.png", ".playwright-mcp/"),
            "../.playwright-mcp/shot.png"
        );
    }

    #[test]
    fn other_paths_unmodified() {
        assert_eq!(resolve_path("images/shot.png", ".playwright-mcp/"), "images/shot.png");
        assert_eq!(resolve_path("/abs/shot.png", ".playwright-mcp/"), "/abs/shot.png");
    }

    #[test]
    fn no_references_means_no_substitution() {
        let md = "# Title\n\nPlain paragraph with [a link](x.md) but no images.\n";
        let result = embed_images(md, ".playwright-mcp/", &base());
        assert_eq!(result.markdown, md);
        assert_eq!(result.embedded, 0);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn existing_image_round_trips_through_base64() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("shot.png");
        let bytes: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
        std::fs::write(&png_path, bytes).unwrap();

        let md = format!("![shot]({})", png_path.display());
        let result = embed_images(&md, ".playwright-mcp/", &base());

        assert_eq!(result.embedded, 1);
        assert!(result.missing.is_empty());

        let b64 = result
            .markdown
            .split("data:image/png;base64,")
            .nth(1)
            .and_then(|s| s.split('"').next())
            .expect("img tag with base64 payload");
        assert_eq!(STANDARD.decode(b64).unwrap(), bytes);
    }

    #[test]
    fn missing_image_degrades_to_placeholder() {
        let md = "![shot](does-not-exist.png)";
        let result = embed_images(md, ".playwright-mcp/", &base());

        assert_eq!(result.embedded, 0);
        assert_eq!(result.missing, vec!["does-not-exist.png".to_string()]);
        assert!(result.markdown.contains("画像が見つかりません: does-not-exist.png"));
        assert!(!result.markdown.contains("<img"));
    }

    #[test]
    fn placeholder_reports_rewritten_path() {
        let md = "![shot](.playwright-mcp/x.png)";
        let result = embed_images(md, ".playwright-mcp/", &base());
        assert!(result.markdown.contains("../.playwright-mcp/x.png"));
    }

    #[test]
    fn every_reference_substituted_independently() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.png");
        std::fs::write(&ok, [1u8, 2, 3]).unwrap();

        let md = format!(
            "![first]({})\n\ntext between\n\n![second](gone.png)\n",
            ok.display()
        );
        let result = embed_images(&md, ".playwright-mcp/", &base());

        assert_eq!(result.embedded, 1);
        assert_eq!(result.missing.len(), 1);
        assert!(!result.markdown.contains("!["), "no reference passes through");
    }

    #[test]
    fn label_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("a.png");
        std::fs::write(&png, [0u8]).unwrap();

        let md = format!("![スクリーンショット]({})", png.display());
        let result = embed_images(&md, ".playwright-mcp/", &base());
        assert!(!result.markdown.contains("スクリーンショット"));
        assert!(!result.markdown.contains("alt="));
    }
}
