//! Image processing backend trait and shared types.
//!
//! [`ImageBackend`] is the seam between the generator and the codecs. The
//! production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the
//! recording [`tests::MockBackend`].

use super::params::ThumbnailParams;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode `params.source`, apply its orientation, fill-crop it to a
    /// square of `params.size` and write every target.
    fn thumbnail(&self, params: &ThumbnailParams) -> Result<(), BackendError>;
}
