//! Built-in image processing backend.
//!
//! Everything is statically linked into the binary. libwebp is compiled from
//! vendored sources by the `webp` crate; the rest is pure Rust.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image` crate (pure Rust decoders) |
//! | Orientation | `ImageDecoder::orientation` + `DynamicImage::apply_orientation` |
//! | Fill + center crop | `DynamicImage::resize_to_fill` with `Lanczos3` |
//! | Encode → WebP | `webp` crate (libwebp, lossy at the target quality) |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |

use super::backend::{BackendError, ImageBackend};
use super::params::{EncodeTarget, OutputFormat, ThumbnailParams};
use image::imageops::FilterType;
use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::BufWriter;
use std::path::Path;

/// rav1e speed preset: 1 is slowest/best, 10 fastest.
const AVIF_SPEED: u8 = 6;

/// Backend using the `image` and `webp` crates.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load an image and apply its embedded orientation, so the result is
/// upright regardless of how the camera stored it.
///
/// Unreadable orientation metadata is treated as "no transform"; an
/// unreadable image is an error.
fn load_oriented(path: &Path) -> Result<DynamicImage, BackendError> {
    let decode_err = |e: image::ImageError| {
        BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
    };

    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()
        .map_err(decode_err)?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder).map_err(decode_err)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Normalize to 8-bit RGB(A), the layouts both encoders accept.
fn to_8bit(img: DynamicImage) -> DynamicImage {
    if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    }
}

/// Encode `img` to one target file.
fn save_image(img: &DynamicImage, target: &EncodeTarget) -> Result<(), BackendError> {
    match target.format {
        OutputFormat::WebP => {
            let encoder = webp::Encoder::from_image(img).map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "WebP encode failed for {}: {}",
                    target.output.display(),
                    e
                ))
            })?;
            let encoded = encoder.encode(target.quality.value() as f32);
            std::fs::write(&target.output, &*encoded)?;
            Ok(())
        }
        OutputFormat::Avif => {
            let file = std::fs::File::create(&target.output)?;
            let writer = BufWriter::new(file);
            let encoder = image::codecs::avif::AvifEncoder::new_with_speed_quality(
                writer,
                AVIF_SPEED,
                target.quality.value() as u8,
            );
            img.write_with_encoder(encoder).map_err(|e| {
                BackendError::ProcessingFailed(format!(
                    "AVIF encode failed for {}: {}",
                    target.output.display(),
                    e
                ))
            })
        }
    }
}

impl ImageBackend for RustBackend {
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError> {
        let img = load_oriented(&params.source)?;
        let filled = img.resize_to_fill(params.size, params.size, FilterType::Lanczos3);
        let filled = to_8bit(filled);

        for target in &params.targets {
            save_image(&filled, target)?;
        }
        Ok(())
    }
}
