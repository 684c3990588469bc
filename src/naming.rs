//! The asset naming convention shared by the catalog and the thumbnail generator.
//!
//! Every full-resolution image lives at
//!
//! ```text
//! /images/portfolio/<category-dir>/<prefix>_<NNN>.<ext>
//! ```
//!
//! and its thumbnail at
//!
//! ```text
//! /images/portfolio/<category-dir>/thumbs/<prefix>_<NNN>.webp
//! ```
//!
//! with an `.avif` sibling written by the generator. Neither side checks the
//! other; they agree only because both go through this module.

use crate::types::Category;

/// URL path of the portfolio asset tree, relative to the public directory.
pub const ASSET_ROOT: &str = "/images/portfolio";

/// Subdirectory holding derived images, next to the sources.
pub const THUMBS_DIR: &str = "thumbs";

/// Extension of the thumbnail the site references in `thumb_src`.
pub const THUMB_EXTENSION: &str = "webp";

/// Extensions recognized as full-resolution images when rewriting paths.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

/// Zero-pad a sequence number to three digits (`1` → `"001"`).
pub fn pad3(n: u32) -> String {
    format!("{:03}", n)
}

/// `bw` + `1` → `bw_001`
pub fn entry_id(prefix: &str, n: u32) -> String {
    format!("{}_{}", prefix, pad3(n))
}

/// Result of parsing an id like `bw_007`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedId {
    pub prefix: String,
    pub number: u32,
}

/// Parse a `<prefix>_<NNN>` id.
///
/// - `"bw_001"` → prefix="bw", number=1
/// - `"fe_015"` → prefix="fe", number=15
/// - `"bw_1234"` → prefix="bw", number=1234 (padding is a minimum width)
/// - `"bw001"`, `"_001"`, `"bw_x"` → None
pub fn parse_entry_id(id: &str) -> Option<ParsedId> {
    let (prefix, digits) = id.rsplit_once('_')?;
    if prefix.is_empty() || digits.len() < 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(ParsedId {
        prefix: prefix.to_string(),
        number: digits.parse().ok()?,
    })
}

/// Full-resolution URL path for an entry.
pub fn full_asset_path(category: Category, id: &str, extension: &str) -> String {
    format!("{}/{}/{}.{}", ASSET_ROOT, category.dir_name(), id, extension)
}

/// Strip one recognized image extension, ignoring ASCII case.
///
/// Names without a recognized extension are returned unchanged.
pub fn strip_image_extension(file_name: &str) -> &str {
    if let Some((stem, ext)) = file_name.rsplit_once('.') {
        if IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            return stem;
        }
    }
    file_name
}

/// Derive the thumbnail URL path from a full-resolution one.
///
/// Only the final path segment of `full_src` is used; the directory comes
/// from `category`. Pure: equal inputs give equal outputs.
///
/// ```
/// # use tattoo_folio::naming::to_thumbnail_path;
/// # use tattoo_folio::types::Category;
/// assert_eq!(
///     to_thumbnail_path("/images/portfolio/fine-line/fl_018.jpeg", Category::FineLine),
///     "/images/portfolio/fine-line/thumbs/fl_018.webp"
/// );
/// ```
pub fn to_thumbnail_path(full_src: &str, category: Category) -> String {
    let file = full_src.rsplit('/').next().unwrap_or("");
    let base = strip_image_extension(file);
    format!(
        "{}/{}/{}/{}.{}",
        ASSET_ROOT,
        category.dir_name(),
        THUMBS_DIR,
        base,
        THUMB_EXTENSION
    )
}
