//! Thumbnail generation for the portfolio tree.
//!
//! Walks every configured category directory under
//! `<public_dir>/images/portfolio/` and writes a square WebP and AVIF
//! thumbnail for each source photo:
//!
//! ```text
//! public/images/portfolio/
//! ├── blackwork/
//! │   ├── bw_001.jpeg
//! │   └── thumbs/
//! │       ├── bw_001.webp      # size × size, fill + center crop
//! │       └── bw_001.avif
//! └── ...
//! ```
//!
//! ## Idempotence
//!
//! Existing outputs are never rewritten. A source whose outputs all exist is
//! skipped without being decoded; one with some outputs missing is decoded
//! once and only the missing formats are encoded. Staleness is not tracked:
//! replace a source photo and delete its thumbnails to regenerate them.
//!
//! ## Ordering
//!
//! Categories are processed in config order, files within a category in
//! file-name order. Processing is sequential; progress is reported as
//! [`ThumbsEvent`]s over an optional channel.

use crate::config::ThumbnailsConfig;
use crate::imaging::{
    BackendError, ImageBackend, OutputFormat, Quality, RustBackend, ThumbnailConfig,
    create_thumbnail, thumbnail_output_path,
};
use crate::naming::{ASSET_ROOT, THUMBS_DIR};
use crate::types::Category;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions picked up as thumbnail sources (compared case-insensitively).
const SOURCE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

#[derive(Error, Debug)]
pub enum ThumbsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk portfolio: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Category directory not found: {0}")]
    MissingCategory(PathBuf),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("{} and {} would write the same thumbnails", .first.display(), .second.display())]
    StemCollision { first: PathBuf, second: PathBuf },
}

/// One expected output of a source.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOutput {
    pub format: OutputFormat,
    pub path: PathBuf,
    /// Whether the file was already on disk when the task was planned.
    pub exists: bool,
}

/// A source photo and the thumbnails it should have.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailTask {
    pub source: PathBuf,
    pub outputs: Vec<PlannedOutput>,
}

impl ThumbnailTask {
    /// Plan the outputs of `source`, checking which already exist.
    pub fn plan(source: &Path) -> Self {
        let outputs = OutputFormat::ALL
            .iter()
            .map(|&format| {
                let path = thumbnail_output_path(source, format);
                let exists = path.exists();
                PlannedOutput {
                    format,
                    path,
                    exists,
                }
            })
            .collect();
        Self {
            source: source.to_path_buf(),
            outputs,
        }
    }

    /// Formats that still need encoding.
    pub fn missing(&self) -> Vec<OutputFormat> {
        self.outputs
            .iter()
            .filter(|o| !o.exists)
            .map(|o| o.format)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.outputs.iter().all(|o| o.exists)
    }

    /// All expected output paths, complete or not.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        self.outputs.iter().map(|o| o.path.clone()).collect()
    }
}

/// Progress reported while generating.
#[derive(Debug, Clone, PartialEq)]
pub enum ThumbsEvent {
    /// At least one output was written. `outputs` lists every expected
    /// output of the source, WebP first.
    Generated {
        source: PathBuf,
        outputs: Vec<PathBuf>,
    },
    /// Every output already existed.
    Skipped { source: PathBuf },
}

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThumbsSummary {
    /// Sources with at least one newly written output.
    pub generated: usize,
    /// Sources whose outputs were all present.
    pub skipped: usize,
    /// Individual files written.
    pub outputs_written: usize,
}

impl ThumbsSummary {
    pub fn total(&self) -> usize {
        self.generated + self.skipped
    }
}

impl std::fmt::Display for ThumbsSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} generated ({} files), {} up to date",
            self.generated, self.outputs_written, self.skipped
        )
    }
}

impl ThumbnailConfig {
    /// Build the imaging config from the `[thumbnails]` table.
    pub fn from_thumbnails_config(config: &ThumbnailsConfig) -> Self {
        Self {
            size: config.size,
            webp_quality: Quality::new(config.quality.webp),
            avif_quality: Quality::new(config.quality.avif),
        }
    }
}

/// Directory holding a category's sources under `public_dir`.
pub fn category_source_dir(public_dir: &Path, category: Category) -> PathBuf {
    public_dir
        .join(ASSET_ROOT.trim_start_matches('/'))
        .join(category.dir_name())
}

fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|s| e.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false)
}

/// Source photos under `category_dir`, depth-first in file-name order.
///
/// Anything inside a `thumbs` directory is ignored, so generated files are
/// never treated as sources. Two sources sharing a directory and a stem
/// (`bw_001.jpg`, `bw_001.jpeg`) map to the same outputs and are an error.
pub fn collect_sources(category_dir: &Path) -> Result<Vec<PathBuf>, ThumbsError> {
    if !category_dir.is_dir() {
        return Err(ThumbsError::MissingCategory(category_dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();
    let walker = WalkDir::new(category_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || e.file_name() != THUMBS_DIR);

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_source_image(entry.path()) {
            let source = entry.into_path();
            let output = thumbnail_output_path(&source, OutputFormat::WebP);
            if let Some(first) = claimed.insert(output, source.clone()) {
                return Err(ThumbsError::StemCollision {
                    first,
                    second: source,
                });
            }
            sources.push(source);
        }
    }
    Ok(sources)
}

/// Generate thumbnails with the built-in [`RustBackend`].
pub fn generate(
    public_dir: &Path,
    config: &ThumbnailsConfig,
    events: Option<Sender<ThumbsEvent>>,
) -> Result<ThumbsSummary, ThumbsError> {
    generate_all(&RustBackend::new(), public_dir, config, events)
}

/// Generate missing thumbnails for every configured category.
///
/// Stops at the first error; outputs written before it stay on disk.
pub fn generate_all(
    backend: &impl ImageBackend,
    public_dir: &Path,
    config: &ThumbnailsConfig,
    events: Option<Sender<ThumbsEvent>>,
) -> Result<ThumbsSummary, ThumbsError> {
    let thumb_config = ThumbnailConfig::from_thumbnails_config(config);
    let mut summary = ThumbsSummary::default();

    let emit = |event: ThumbsEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only loses progress output.
            let _ = tx.send(event);
        }
    };

    for &category in &config.categories {
        let dir = category_source_dir(public_dir, category);
        for source in collect_sources(&dir)? {
            let task = ThumbnailTask::plan(&source);
            if task.is_complete() {
                summary.skipped += 1;
                emit(ThumbsEvent::Skipped { source });
                continue;
            }

            let written = create_thumbnail(backend, &source, &task.missing(), &thumb_config)?;
            summary.generated += 1;
            summary.outputs_written += written.len();
            emit(ThumbsEvent::Generated {
                source,
                outputs: task.output_paths(),
            });
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;
    use crate::test_helpers::{category_dir, create_portfolio_tree};
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn config_for(categories: &[Category]) -> ThumbnailsConfig {
        ThumbnailsConfig {
            categories: categories.to_vec(),
            ..ThumbnailsConfig::default()
        }
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn collect_sources_sorted_and_filtered() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(
            tmp.path(),
            &[(
                "blackwork",
                &[
                    "bw_002.jpeg",
                    "bw_001.jpeg",
                    "bw_003.JPG",
                    "bw_005.png",
                    "notes.txt",
                    "bw_004.webp",
                    "thumbs/bw_001.jpeg",
                ],
            )],
        );

        let sources = collect_sources(&category_dir(tmp.path(), "blackwork")).unwrap();
        assert_eq!(
            file_names(&sources),
            vec!["bw_001.jpeg", "bw_002.jpeg", "bw_003.JPG"]
        );
    }

    #[test]
    fn collect_sources_descends_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(
            tmp.path(),
            &[("color", &["co_001.jpg", "2024/co_002.jpeg", "2024/thumbs/x.jpg"])],
        );

        let sources = collect_sources(&category_dir(tmp.path(), "color")).unwrap();
        assert_eq!(file_names(&sources), vec!["co_002.jpeg", "co_001.jpg"]);
    }

    #[test]
    fn collect_sources_rejects_shared_stem() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("blackwork", &["bw_001.jpeg", "bw_001.jpg"])]);

        let result = collect_sources(&category_dir(tmp.path(), "blackwork"));
        match result {
            Err(ThumbsError::StemCollision { first, second }) => {
                assert!(first.ends_with("bw_001.jpeg"));
                assert!(second.ends_with("bw_001.jpg"));
            }
            other => panic!("expected StemCollision, got {other:?}"),
        }
    }

    #[test]
    fn shared_stem_in_other_directory_is_fine() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(
            tmp.path(),
            &[("color", &["co_001.jpeg", "2024/co_001.jpeg"])],
        );

        let sources = collect_sources(&category_dir(tmp.path(), "color")).unwrap();
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn shared_stem_aborts_before_encoding() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("fine-line", &["fl_001.jpeg", "fl_001.jpg"])]);

        let backend = MockBackend::new();
        let config = config_for(&[Category::FineLine]);
        let result = generate_all(&backend, tmp.path(), &config, None);

        assert!(matches!(result, Err(ThumbsError::StemCollision { .. })));
        assert_eq!(backend.encode_count(), 0);
    }

    #[test]
    fn collect_sources_missing_dir_errors() {
        let tmp = TempDir::new().unwrap();
        let result = collect_sources(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ThumbsError::MissingCategory(_))));
    }

    #[test]
    fn category_source_dir_uses_directory_name() {
        let dir = category_source_dir(Path::new("/site/public"), Category::Studio);
        assert_eq!(dir, Path::new("/site/public/images/portfolio/Studio"));
        let dir = category_source_dir(Path::new("public"), Category::Mixed);
        assert_eq!(dir, Path::new("public/images/portfolio/varios"));
    }

    #[test]
    fn task_plans_both_formats() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("fl_001.jpeg");
        let task = ThumbnailTask::plan(&source);
        assert_eq!(task.missing(), vec![OutputFormat::WebP, OutputFormat::Avif]);
        assert_eq!(
            task.output_paths(),
            vec![
                tmp.path().join("thumbs/fl_001.webp"),
                tmp.path().join("thumbs/fl_001.avif"),
            ]
        );
        assert!(!task.is_complete());
    }

    #[test]
    fn generates_every_source_once() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(
            tmp.path(),
            &[
                ("blackwork", &["bw_001.jpeg", "bw_002.jpeg"]),
                ("color", &["co_001.jpeg"]),
            ],
        );

        let backend = MockBackend::new();
        let config = config_for(&[Category::Blackwork, Category::Color]);
        let summary = generate_all(&backend, tmp.path(), &config, None).unwrap();

        assert_eq!(summary.generated, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.outputs_written, 6);
        assert_eq!(backend.get_operations().len(), 3);

        let thumbs = category_dir(tmp.path(), "blackwork").join("thumbs");
        assert!(thumbs.join("bw_001.webp").exists());
        assert!(thumbs.join("bw_002.avif").exists());
    }

    #[test]
    fn second_run_encodes_nothing() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("blackwork", &["bw_001.jpeg", "bw_002.jpeg"])]);
        let config = config_for(&[Category::Blackwork]);

        generate_all(&MockBackend::new(), tmp.path(), &config, None).unwrap();

        let backend = MockBackend::new();
        let summary = generate_all(&backend, tmp.path(), &config, None).unwrap();
        assert_eq!(backend.encode_count(), 0);
        assert_eq!(summary.generated, 0);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn only_missing_format_is_encoded() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("fine-line", &["fl_001.jpeg"])]);
        let thumbs = category_dir(tmp.path(), "fine-line").join("thumbs");
        std::fs::create_dir_all(&thumbs).unwrap();
        std::fs::write(thumbs.join("fl_001.webp"), b"existing").unwrap();

        let backend = MockBackend::new();
        let config = config_for(&[Category::FineLine]);
        let summary = generate_all(&backend, tmp.path(), &config, None).unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].targets.len(), 1);
        assert_eq!(ops[0].targets[0].0, OutputFormat::Avif);
        assert_eq!(summary.outputs_written, 1);
        // The existing file is untouched.
        assert_eq!(std::fs::read(thumbs.join("fl_001.webp")).unwrap(), b"existing");
    }

    #[test]
    fn uses_configured_size_and_quality() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("color", &["co_001.jpeg"])]);

        let mut config = config_for(&[Category::Color]);
        config.size = 320;
        config.quality.webp = 90;
        config.quality.avif = 30;

        let backend = MockBackend::new();
        generate_all(&backend, tmp.path(), &config, None).unwrap();

        let op = &backend.get_operations()[0];
        assert_eq!(op.size, 320);
        assert_eq!(op.targets[0].2, 90);
        assert_eq!(op.targets[1].2, 30);
    }

    #[test]
    fn generated_thumbs_are_not_sources() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("varios", &["va_001.jpeg"])]);
        let config = config_for(&[Category::Mixed]);

        generate_all(&MockBackend::new(), tmp.path(), &config, None).unwrap();
        // A stray JPEG in thumbs/ must not be picked up either.
        std::fs::write(
            category_dir(tmp.path(), "varios").join("thumbs/va_001.jpeg"),
            b"",
        )
        .unwrap();

        let summary = generate_all(&MockBackend::new(), tmp.path(), &config, None).unwrap();
        assert_eq!(summary.total(), 1);
    }

    #[test]
    fn missing_category_aborts() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("blackwork", &["bw_001.jpeg"])]);

        let backend = MockBackend::new();
        let config = config_for(&[Category::Blackwork, Category::Color]);
        let result = generate_all(&backend, tmp.path(), &config, None);

        assert!(matches!(result, Err(ThumbsError::MissingCategory(p)) if p.ends_with("color")));
        // Work before the failure is kept.
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn backend_failure_aborts() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(
            tmp.path(),
            &[("blackwork", &["bw_001.jpeg", "bw_002.jpeg", "bw_003.jpeg"])],
        );

        let backend = MockBackend::failing_on("bw_002");
        let config = config_for(&[Category::Blackwork]);
        let result = generate_all(&backend, tmp.path(), &config, None);

        assert!(matches!(result, Err(ThumbsError::Imaging(_))));
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn events_report_generated_and_skipped() {
        let tmp = TempDir::new().unwrap();
        create_portfolio_tree(tmp.path(), &[("blackwork", &["bw_001.jpeg", "bw_002.jpeg"])]);
        let thumbs = category_dir(tmp.path(), "blackwork").join("thumbs");
        std::fs::create_dir_all(&thumbs).unwrap();
        std::fs::write(thumbs.join("bw_001.webp"), b"").unwrap();
        std::fs::write(thumbs.join("bw_001.avif"), b"").unwrap();

        let (tx, rx) = mpsc::channel();
        let config = config_for(&[Category::Blackwork]);
        generate_all(&MockBackend::new(), tmp.path(), &config, Some(tx)).unwrap();

        let events: Vec<ThumbsEvent> = rx.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], ThumbsEvent::Skipped { source } if source.ends_with("bw_001.jpeg")));
        match &events[1] {
            ThumbsEvent::Generated { source, outputs } => {
                assert!(source.ends_with("bw_002.jpeg"));
                assert_eq!(
                    outputs,
                    &vec![thumbs.join("bw_002.webp"), thumbs.join("bw_002.avif")]
                );
            }
            other => panic!("expected Generated, got {other:?}"),
        }
    }

    #[test]
    fn summary_display() {
        let summary = ThumbsSummary {
            generated: 2,
            skipped: 5,
            outputs_written: 3,
        };
        assert_eq!(summary.to_string(), "2 generated (3 files), 5 up to date");
        assert_eq!(summary.total(), 7);
    }
}
