//! Shared test utilities for the tattoo-folio test suite.
//!
//! Builds small on-disk portfolio trees with real, decodable JPEGs so the
//! generator and the asset check can run against a temp directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! create_portfolio_tree(tmp.path(), &[
//!     ("blackwork", &["bw_001.jpeg", "bw_002.jpeg"]),
//!     ("color", &["co_001.jpeg"]),
//! ]);
//! ```

use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;
use std::path::{Path, PathBuf};

use crate::naming::ASSET_ROOT;

// =========================================================================
// Image fixtures
// =========================================================================

fn gradient_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(128);
        }
    }
    pixels
}

fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, 85)
        .write_image(
            &gradient_pixels(width, height),
            width,
            height,
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
    bytes
}

/// Write a `width`×`height` RGB JPEG to `path`.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_jpeg(width, height)).unwrap();
}

/// Write a JPEG carrying an EXIF orientation tag.
///
/// The pixel data is stored `width`×`height`; a decoder that honours the
/// tag reports the rotated dimensions for orientations 5–8.
pub fn create_test_jpeg_with_orientation(path: &Path, width: u32, height: u32, orientation: u16) {
    let jpeg = encode_jpeg(width, height);

    // Minimal little-endian TIFF with one IFD entry: 0x0112 Orientation, SHORT.
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());
    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x0112u16.to_le_bytes());
    tiff.extend_from_slice(&3u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&[0, 0]);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    let mut app1 = Vec::new();
    app1.extend_from_slice(b"Exif\0\0");
    app1.extend_from_slice(&tiff);
    let segment_len = (app1.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + app1.len() + 4);
    out.extend_from_slice(&jpeg[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);

    std::fs::write(path, out).unwrap();
}

// =========================================================================
// Portfolio trees
// =========================================================================

/// Directory for a category under a public root.
pub fn category_dir(public_dir: &Path, dir_name: &str) -> PathBuf {
    public_dir
        .join(ASSET_ROOT.trim_start_matches('/'))
        .join(dir_name)
}

/// Create `public_dir/images/portfolio/<dir>/<file>` for every pair.
///
/// Files with a jpg/jpeg extension get a small real JPEG; anything else is
/// written empty. Returns the created source paths in input order.
pub fn create_portfolio_tree(public_dir: &Path, layout: &[(&str, &[&str])]) -> Vec<PathBuf> {
    let mut created = Vec::new();
    for (dir, files) in layout {
        let dir = category_dir(public_dir, dir);
        std::fs::create_dir_all(&dir).unwrap();
        for file in *files {
            let path = dir.join(file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            let lower = file.to_ascii_lowercase();
            if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
                create_test_jpeg(&path, 40, 30);
            } else {
                std::fs::write(&path, b"").unwrap();
            }
            created.push(path);
        }
    }
    created
}
