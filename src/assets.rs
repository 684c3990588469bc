//! Catalog ↔ filesystem contract check.
//!
//! Every catalog entry promises two files under the web root: the full-size
//! photo at `full_src` and its WebP thumbnail at `thumb_src`. This module
//! resolves those URL paths against `public_dir` and reports the ones that
//! are not there, so a broken gallery shows up before deploy rather than as
//! a 404 on the site.

use crate::catalog::Catalog;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Which file of an entry is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Source,
    Thumbnail,
}

/// A catalog path with no file behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAsset {
    pub id: String,
    pub kind: AssetKind,
    /// The URL path as it appears in the catalog.
    pub url: String,
    /// Where it was looked for.
    pub path: PathBuf,
}

/// Result of checking a catalog against the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetReport {
    /// Number of entries checked.
    pub checked: usize,
    pub missing: Vec<MissingAsset>,
}

impl AssetReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn missing_sources(&self) -> impl Iterator<Item = &MissingAsset> {
        self.missing.iter().filter(|m| m.kind == AssetKind::Source)
    }

    pub fn missing_thumbnails(&self) -> impl Iterator<Item = &MissingAsset> {
        self.missing.iter().filter(|m| m.kind == AssetKind::Thumbnail)
    }
}

/// Map a site URL path (`/images/...`) to a file under `public_dir`.
pub fn resolve_asset(public_dir: &Path, url: &str) -> PathBuf {
    public_dir.join(url.trim_start_matches('/'))
}

fn is_present(path: &Path) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Check that every entry's source and thumbnail exist under `public_dir`.
///
/// Missing files are reported, not raised. Only I/O failures other than
/// "not found" (permissions, for instance) are errors.
pub fn check_assets(catalog: &Catalog, public_dir: &Path) -> io::Result<AssetReport> {
    let mut report = AssetReport::default();

    for entry in catalog {
        report.checked += 1;
        for (kind, url) in [
            (AssetKind::Source, &entry.full_src),
            (AssetKind::Thumbnail, &entry.thumb_src),
        ] {
            let path = resolve_asset(public_dir, url);
            if !is_present(&path)? {
                report.missing.push(MissingAsset {
                    id: entry.id.clone(),
                    kind,
                    url: url.clone(),
                    path,
                });
            }
        }
    }

    Ok(report)
}
