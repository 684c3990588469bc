//! Catalog building: range expansion, curated entries, aggregation.
//!
//! Everything in this module is pure. Entries are built fresh from static
//! declarations (see [`crate::data`]) each time a collection is requested
//! and are never mutated afterwards.
//!
//! ## Range expansion
//!
//! A [`RangeSpec`] like `(blackwork, "bw", 1..=3)` expands to:
//!
//! ```text
//! bw_001  /images/portfolio/blackwork/bw_001.jpeg  thumbs/bw_001.webp
//! bw_002  /images/portfolio/blackwork/bw_002.jpeg  thumbs/bw_002.webp
//! bw_003  /images/portfolio/blackwork/bw_003.jpeg  thumbs/bw_003.webp
//! ```
//!
//! Degenerate ranges (`from > to`) and curated-only categories expand to
//! nothing rather than failing.
//!
//! ## Grouping
//!
//! [`Catalog::group_by_category`] is the inverse of concatenating
//! per-category parts: every entry lands in exactly one bucket and keeps its
//! relative order.

use crate::naming::{entry_id, full_asset_path, to_thumbnail_path};
use crate::types::{AltText, Category, LocalizedEntry, LocalizedText, Locale, PortfolioEntry};
use serde::Serialize;
use std::collections::BTreeMap;

/// Source extension assumed when a range or curated entry declares none.
pub const DEFAULT_EXTENSION: &str = "jpeg";

/// Declarative description of a contiguous run of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSpec {
    pub category: Category,
    pub prefix: String,
    /// Inclusive lower bound
    pub from: u32,
    /// Inclusive upper bound
    pub to: u32,
    pub extension: String,
    /// Alt text each entry is derived from; `None` uses the category default.
    pub alt_base: Option<LocalizedText>,
}

impl RangeSpec {
    /// Range over `from..=to` with the category's prefix, `.jpeg` sources
    /// and the category's default alt text.
    pub fn new(category: Category, from: u32, to: u32) -> Self {
        Self {
            category,
            prefix: category.prefix().to_string(),
            from,
            to,
            extension: DEFAULT_EXTENSION.to_string(),
            alt_base: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_alt_base(mut self, alt_base: LocalizedText) -> Self {
        self.alt_base = Some(alt_base);
        self
    }

    /// Number of entries the range expands to.
    pub fn len(&self) -> usize {
        if self.category.is_curated_only() || self.from > self.to {
            0
        } else {
            (self.to - self.from) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Expand a range into entries, ordered by ascending sequence number.
pub fn build_range(spec: &RangeSpec) -> Vec<PortfolioEntry> {
    if spec.is_empty() {
        return Vec::new();
    }

    let base = spec
        .alt_base
        .clone()
        .unwrap_or_else(|| spec.category.default_alt_base());

    (spec.from..=spec.to)
        .map(|n| {
            let id = entry_id(&spec.prefix, n);
            let full_src = full_asset_path(spec.category, &id, &spec.extension);
            let thumb_src = to_thumbnail_path(&full_src, spec.category);
            let alt = base.map(|text| format!("{} ({})", text, id));
            PortfolioEntry {
                id,
                category: spec.category,
                full_src,
                thumb_src,
                alt: alt.into(),
            }
        })
        .collect()
}

/// Build a single hand-authored entry.
pub fn curated(category: Category, id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    let full_src = full_asset_path(category, id, DEFAULT_EXTENSION);
    let thumb_src = to_thumbnail_path(&full_src, category);
    PortfolioEntry {
        id: id.to_string(),
        category,
        full_src,
        thumb_src,
        alt: alt.into(),
    }
}

pub fn featured(id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    curated(Category::Featured, id, alt)
}

pub fn blackwork(id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    curated(Category::Blackwork, id, alt)
}

pub fn color(id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    curated(Category::Color, id, alt)
}

pub fn fine_line(id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    curated(Category::FineLine, id, alt)
}

pub fn mixed(id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    curated(Category::Mixed, id, alt)
}

pub fn studio(id: &str, alt: impl Into<AltText>) -> PortfolioEntry {
    curated(Category::Studio, id, alt)
}

/// Ordered collection of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<PortfolioEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<PortfolioEntry>) -> Self {
        Self { entries }
    }

    /// Concatenate parts in order.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Vec<PortfolioEntry>>,
    {
        Self {
            entries: parts.into_iter().flatten().collect(),
        }
    }

    /// Expand and concatenate several ranges.
    pub fn from_ranges(specs: &[RangeSpec]) -> Self {
        Self::concat(specs.iter().map(build_range))
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<PortfolioEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PortfolioEntry> {
        self.entries.iter()
    }

    pub fn find(&self, id: &str) -> Option<&PortfolioEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries of one category, in catalog order.
    pub fn of(&self, category: Category) -> Vec<PortfolioEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Partition into per-category buckets. Categories with no entries are
    /// absent from the map.
    pub fn group_by_category(&self) -> BTreeMap<Category, Vec<PortfolioEntry>> {
        let mut groups: BTreeMap<Category, Vec<PortfolioEntry>> = BTreeMap::new();
        for entry in &self.entries {
            groups.entry(entry.category).or_default().push(entry.clone());
        }
        groups
    }

    /// Resolve alt text for every entry.
    pub fn localize(&self, locale: Locale) -> Vec<LocalizedEntry> {
        self.entries.iter().map(|e| e.localize(locale)).collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PortfolioEntry;
    type IntoIter = std::slice::Iter<'a, PortfolioEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<PortfolioEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = PortfolioEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
