//! Image processing, statically linked, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Orient** | `ImageDecoder::orientation` (EXIF) |
//! | **Thumbnail** | `resize_to_fill` (square, center crop) |
//! | **Encode** | `webp::Encoder` (lossy), `AvifEncoder` (rav1e) |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Output path layout + backend calls

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use operations::{
    ThumbnailConfig, create_thumbnail, plan_thumbnail, thumbnail_output_path, thumbs_dir_for,
};
pub use params::{EncodeTarget, OutputFormat, Quality, ThumbnailParams};
pub use rust_backend::RustBackend;
