//! # Tattoo Folio
//!
//! Catalog and thumbnail tooling for a tattoo studio's portfolio site.
//! Every photo on the site has a stable id (`bw_001`, `co_017`, `fl_018`)
//! and lives at a path derived from it; this crate owns both the list of
//! photos and the square thumbnails the gallery shows.
//!
//! # Two Halves
//!
//! ```text
//! Catalog     RangeSpec / curated lists  →  Vec<PortfolioEntry>   (pure, total)
//! Thumbnails  public/images/portfolio/   →  thumbs/*.webp, *.avif (filesystem)
//! ```
//!
//! They meet at the path convention in [`naming`]: the catalog promises
//! `thumbs/<id>.webp` next to every photo, and the generator writes exactly
//! that file. [`assets::check_assets`] verifies the promise holds on disk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Category`, `Locale`, localized alt text, `PortfolioEntry` |
//! | [`naming`] | `bw_001` ids, asset paths, full → thumbnail path mapping |
//! | [`catalog`] | Range expansion, curated entry builders, `Catalog` aggregation |
//! | [`data`] | The studio's shipped portfolio and studio galleries |
//! | [`reviews`] | Customer testimonials in both site languages |
//! | [`thumbs`] | Idempotent thumbnail generation over the portfolio tree |
//! | [`imaging`] | Image operations: orient, fill-crop, WebP/AVIF encode |
//! | [`assets`] | Catalog ↔ filesystem contract check |
//! | [`config`] | `config.toml` loading, validation and merging over stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Catalog Is Data, Not a Scan
//!
//! Entries are declared in code rather than discovered from the filesystem.
//! Alt text is hand-written per photo in Spanish and English, and ids must
//! stay stable for links to keep working. Building a catalog cannot fail; a
//! degenerate range is simply empty.
//!
//! ## Existence-Based Idempotence
//!
//! The generator never overwrites an output that exists, and encodes only the
//! formats that are missing. There is no cache manifest: the `thumbs/`
//! directory is the state. Deleting a thumbnail is how you ask for it again.
//!
//! ## Self-Contained Imaging
//!
//! The [`imaging`] module uses the `image` crate for decoding, EXIF
//! orientation, Lanczos3 resampling and AVIF encoding (rav1e), and the
//! `webp` crate for lossy WebP. No system libraries, no ImageMagick: the
//! binary is self-contained.

pub mod assets;
pub mod catalog;
pub mod config;
pub mod data;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod reviews;
pub mod thumbs;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
