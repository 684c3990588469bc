//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper. Format functions are pure: no I/O,
//! no side effects. Diagnostic lines go to stderr so that commands printing
//! JSON keep stdout clean.
//!
//! # Output Format
//!
//! ## Thumbs
//!
//! ```text
//! OK: blackwork/bw_002.jpeg -> blackwork/thumbs/bw_002.webp blackwork/thumbs/bw_002.avif
//! Done. 1 generated, 40 up to date
//! ```
//!
//! Sources that were already complete print nothing.
//!
//! ## Check
//!
//! ```text
//! Checked 125 entries
//! Missing sources (1)
//!     bw_041 → /images/portfolio/blackwork/bw_041.jpeg
//! Missing thumbnails (2)
//!     co_003 → /images/portfolio/color/thumbs/co_003.webp
//!     co_004 → /images/portfolio/color/thumbs/co_004.webp
//! 3 missing
//! ```

use crate::assets::{AssetReport, MissingAsset};
use crate::thumbs::{ThumbsEvent, ThumbsSummary};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Display `path` relative to `base` when it lives under it.
fn relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// Thumbs
// ============================================================================

/// Format a single generator event as display lines.
///
/// Paths are shown relative to `base` (the category root in practice).
pub fn format_thumbs_event(event: &ThumbsEvent, base: &Path) -> Vec<String> {
    match event {
        ThumbsEvent::Generated { source, outputs } => {
            let outputs: Vec<String> = outputs.iter().map(|o| relative(o, base)).collect();
            vec![format!(
                "OK: {} -> {}",
                relative(source, base),
                outputs.join(" ")
            )]
        }
        ThumbsEvent::Skipped { .. } => Vec::new(),
    }
}

/// Format the completion line of a generator run.
pub fn format_thumbs_summary(summary: &ThumbsSummary) -> Vec<String> {
    vec![format!(
        "Done. {} generated, {} up to date",
        summary.generated, summary.skipped
    )]
}

/// Print the completion line to stderr.
pub fn print_thumbs_summary(summary: &ThumbsSummary) {
    for line in format_thumbs_summary(summary) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

fn missing_section(title: &str, items: &[&MissingAsset]) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![format!("{} ({})", title, items.len())];
    for item in items {
        lines.push(format!("{}{} \u{2192} {}", indent(1), item.id, item.url));
    }
    lines
}

/// Format an asset check report.
pub fn format_check_report(report: &AssetReport) -> Vec<String> {
    let mut lines = vec![format!("Checked {} entries", report.checked)];

    let sources: Vec<&MissingAsset> = report.missing_sources().collect();
    let thumbs: Vec<&MissingAsset> = report.missing_thumbnails().collect();
    lines.extend(missing_section("Missing sources", &sources));
    lines.extend(missing_section("Missing thumbnails", &thumbs));

    if report.is_ok() {
        lines.push("All assets present".to_string());
    } else {
        lines.push(format!("{} missing", report.missing.len()));
    }
    lines
}

/// Print an asset check report to stderr.
pub fn print_check_report(report: &AssetReport) {
    for line in format_check_report(report) {
        eprintln!("{}", line);
    }
}
