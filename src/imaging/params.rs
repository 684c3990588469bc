//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations), which decides which
//! files to write, and the [`backend`](super::backend), which does the pixel
//! work. Tests swap in a mock backend without touching operation logic.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100). Clamped on construction.
//! - [`OutputFormat`] — The two thumbnail encodings, WebP and AVIF.
//! - [`EncodeTarget`] — One output file: format, path, quality.
//! - [`ThumbnailParams`] — Source, square edge, and the targets to encode.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Thumbnail encodings, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputFormat {
    /// Broadly supported; the one the site references.
    WebP,
    /// Smaller, for browsers that take it.
    Avif,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::WebP, OutputFormat::Avif];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Avif => "avif",
        }
    }
}

/// One file to encode.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeTarget {
    pub format: OutputFormat,
    pub output: PathBuf,
    pub quality: Quality,
}

/// Parameters for a thumbnail operation (orient, fill, center crop, encode).
///
/// The source is decoded once and encoded to every target.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailParams {
    pub source: PathBuf,
    /// Edge of the square crop.
    pub size: u32,
    pub targets: Vec<EncodeTarget>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(72).value(), 72);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn output_format_extensions() {
        assert_eq!(OutputFormat::WebP.extension(), "webp");
        assert_eq!(OutputFormat::Avif.extension(), "avif");
    }

    #[test]
    fn webp_comes_first() {
        assert_eq!(OutputFormat::ALL[0], OutputFormat::WebP);
    }
}
