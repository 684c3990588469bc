//! High-level image operations.
//!
//! These functions decide which files a source produces and hand the work to
//! a backend. Path layout follows [`crate::naming`]: outputs go to a
//! `thumbs/` directory next to the source, named after its stem.

use super::backend::{BackendError, ImageBackend};
use super::params::{EncodeTarget, OutputFormat, Quality, ThumbnailParams};
use crate::naming::THUMBS_DIR;
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Square edge in pixels.
    pub size: u32,
    pub webp_quality: Quality,
    pub avif_quality: Quality,
}

impl ThumbnailConfig {
    pub fn quality(&self, format: OutputFormat) -> Quality {
        match format {
            OutputFormat::WebP => self.webp_quality,
            OutputFormat::Avif => self.avif_quality,
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            size: 800,
            webp_quality: Quality::new(72),
            avif_quality: Quality::new(45),
        }
    }
}

/// The `thumbs/` directory that holds a source's derivatives.
pub fn thumbs_dir_for(source: &Path) -> PathBuf {
    source
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(THUMBS_DIR)
}

/// Where `source` is thumbnailed to in `format`.
///
/// `blackwork/bw_001.jpeg` → `blackwork/thumbs/bw_001.webp`
pub fn thumbnail_output_path(source: &Path, format: OutputFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    thumbs_dir_for(source).join(format!("{}.{}", stem, format.extension()))
}

/// Plan a thumbnail operation for the given formats without executing it.
pub fn plan_thumbnail(
    source: &Path,
    formats: &[OutputFormat],
    config: &ThumbnailConfig,
) -> ThumbnailParams {
    ThumbnailParams {
        source: source.to_path_buf(),
        size: config.size,
        targets: formats
            .iter()
            .map(|&format| EncodeTarget {
                format,
                output: thumbnail_output_path(source, format),
                quality: config.quality(format),
            })
            .collect(),
    }
}

/// Create thumbnails of `source` in the given formats.
///
/// The `thumbs/` directory is created if needed. Returns the written paths.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    formats: &[OutputFormat],
    config: &ThumbnailConfig,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(thumbs_dir_for(source))?;

    let params = plan_thumbnail(source, formats, config);
    backend.thumbnail(&params)?;

    Ok(params.targets.into_iter().map(|t| t.output).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;

    #[test]
    fn output_paths_live_in_sibling_thumbs_dir() {
        let source = Path::new("/site/public/images/portfolio/blackwork/bw_001.jpeg");
        assert_eq!(
            thumbnail_output_path(source, OutputFormat::WebP),
            Path::new("/site/public/images/portfolio/blackwork/thumbs/bw_001.webp")
        );
        assert_eq!(
            thumbnail_output_path(source, OutputFormat::Avif),
            Path::new("/site/public/images/portfolio/blackwork/thumbs/bw_001.avif")
        );
    }

    #[test]
    fn output_paths_of_nested_source() {
        let source = Path::new("color/2024/co_010.JPG");
        assert_eq!(
            thumbnail_output_path(source, OutputFormat::WebP),
            Path::new("color/2024/thumbs/co_010.webp")
        );
    }

    #[test]
    fn plan_uses_per_format_quality() {
        let params = plan_thumbnail(
            Path::new("/a/fl_001.jpeg"),
            &OutputFormat::ALL,
            &ThumbnailConfig::default(),
        );
        assert_eq!(params.size, 800);
        assert_eq!(params.targets.len(), 2);
        assert_eq!(params.targets[0].quality.value(), 72);
        assert_eq!(params.targets[1].quality.value(), 45);
    }

    #[test]
    fn plan_only_requested_formats() {
        let params = plan_thumbnail(
            Path::new("/a/fl_001.jpeg"),
            &[OutputFormat::Avif],
            &ThumbnailConfig::default(),
        );
        assert_eq!(params.targets.len(), 1);
        assert_eq!(params.targets[0].output, Path::new("/a/thumbs/fl_001.avif"));
    }

    #[test]
    fn create_thumbnail_makes_thumbs_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("bw_001.jpeg");
        std::fs::write(&source, b"").unwrap();

        let backend = MockBackend::new();
        let written =
            create_thumbnail(&backend, &source, &OutputFormat::ALL, &ThumbnailConfig::default())
                .unwrap();

        assert!(tmp.path().join("thumbs").is_dir());
        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|p| p.exists()));
        assert_eq!(backend.get_operations().len(), 1);
    }
}
