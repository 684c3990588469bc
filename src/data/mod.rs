//! The studio's shipped catalog.
//!
//! Two shapes coexist, as on the site:
//!
//! - **Generated** collections ([`portfolio_items`]) expand fixed ranges and
//!   carry generic alt text. They cover every file on disk.
//! - **Curated** collections ([`featured_items`], [`blackwork_items`], ...)
//!   list hand-written bilingual descriptions, one per photo.
//!
//! The studio gallery is a range whose alt text is replaced from a curated
//! map, with a generic fallback for photos that have no description yet.

use crate::catalog::{self, Catalog, RangeSpec, build_range};
use crate::types::{Category, LocalizedText, PortfolioEntry};
use std::collections::BTreeMap;

mod curated;

use curated::{BLACKWORK, COLOR, FEATURED, FINE_LINE, MIXED, STUDIO};

/// A hand-written description for one photo.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CuratedAlt {
    pub id: &'static str,
    pub es: &'static str,
    pub en: &'static str,
}

impl CuratedAlt {
    fn text(&self) -> LocalizedText {
        LocalizedText::new(self.es, self.en)
    }
}

/// Ranges behind [`portfolio_items`], one per category, in site order.
pub fn portfolio_ranges() -> Vec<RangeSpec> {
    vec![
        RangeSpec::new(Category::Blackwork, 1, 41),
        RangeSpec::new(Category::Color, 1, 38),
        RangeSpec::new(Category::FineLine, 1, 25),
        RangeSpec::new(Category::Mixed, 1, 21),
    ]
}

/// Range behind [`studio_items`].
pub fn studio_range() -> RangeSpec {
    RangeSpec::new(Category::Studio, 1, 3)
}

/// Full generated catalog (every non-featured portfolio photo).
pub fn portfolio_items() -> Catalog {
    Catalog::from_ranges(&portfolio_ranges())
}

/// [`portfolio_items`] grouped by category.
pub fn portfolio_by_category() -> BTreeMap<Category, Vec<PortfolioEntry>> {
    portfolio_items().group_by_category()
}

fn curated_list(
    list: &[CuratedAlt],
    build: fn(&str, LocalizedText) -> PortfolioEntry,
) -> Vec<PortfolioEntry> {
    list.iter().map(|c| build(c.id, c.text())).collect()
}

pub fn featured_items() -> Vec<PortfolioEntry> {
    curated_list(FEATURED, |id, alt| catalog::featured(id, alt))
}

pub fn blackwork_items() -> Vec<PortfolioEntry> {
    curated_list(BLACKWORK, |id, alt| catalog::blackwork(id, alt))
}

pub fn color_items() -> Vec<PortfolioEntry> {
    curated_list(COLOR, |id, alt| catalog::color(id, alt))
}

pub fn fine_line_items() -> Vec<PortfolioEntry> {
    curated_list(FINE_LINE, |id, alt| catalog::fine_line(id, alt))
}

pub fn mixed_items() -> Vec<PortfolioEntry> {
    curated_list(MIXED, |id, alt| catalog::mixed(id, alt))
}

/// Every curated entry: featured first, then each style.
pub fn all_portfolio_items() -> Catalog {
    Catalog::concat([
        featured_items(),
        blackwork_items(),
        color_items(),
        fine_line_items(),
        mixed_items(),
    ])
}

/// Studio gallery with curated descriptions.
pub fn studio_items() -> Catalog {
    build_range(&studio_range())
        .into_iter()
        .map(|mut entry| {
            entry.alt = match STUDIO.iter().find(|c| c.id == entry.id) {
                Some(c) => c.text().into(),
                None => studio_fallback_alt(&entry.id).into(),
            };
            entry
        })
        .collect()
}

fn studio_fallback_alt(id: &str) -> LocalizedText {
    Category::Studio
        .default_alt_base()
        .map(|text| format!("{} {}", text, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::parse_entry_id;
    use crate::types::Locale;

    fn assert_contiguous(entries: &[PortfolioEntry], prefix: &str) {
        for (i, entry) in entries.iter().enumerate() {
            let parsed = parse_entry_id(&entry.id)
                .unwrap_or_else(|| panic!("malformed id {}", entry.id));
            assert_eq!(parsed.prefix, prefix, "{}", entry.id);
            assert_eq!(parsed.number as usize, i + 1, "{}", entry.id);
        }
    }

    #[test]
    fn generated_catalog_sizes() {
        let groups = portfolio_by_category();
        assert_eq!(groups[&Category::Blackwork].len(), 41);
        assert_eq!(groups[&Category::Color].len(), 38);
        assert_eq!(groups[&Category::FineLine].len(), 25);
        assert_eq!(groups[&Category::Mixed].len(), 21);
        assert_eq!(portfolio_items().len(), 41 + 38 + 25 + 21);
    }

    #[test]
    fn curated_lists_are_contiguous() {
        assert_contiguous(&featured_items(), "fe");
        assert_contiguous(&blackwork_items(), "bw");
        assert_contiguous(&color_items(), "co");
        assert_contiguous(&fine_line_items(), "fl");
        assert_contiguous(&mixed_items(), "va");
    }

    #[test]
    fn curated_lists_cover_generated_ranges() {
        let generated = portfolio_by_category();
        let curated = all_portfolio_items().group_by_category();
        for (category, entries) in &generated {
            let curated_ids: Vec<&str> =
                curated[category].iter().map(|e| e.id.as_str()).collect();
            let generated_ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(curated_ids, generated_ids, "{category}");
        }
    }

    #[test]
    fn curated_and_generated_share_paths() {
        let generated = portfolio_items();
        for entry in blackwork_items() {
            let twin = generated.find(&entry.id).unwrap();
            assert_eq!(twin.full_src, entry.full_src);
            assert_eq!(twin.thumb_src, entry.thumb_src);
        }
    }

    #[test]
    fn all_portfolio_items_starts_with_featured() {
        let all = all_portfolio_items();
        assert_eq!(all.entries()[0].id, "fe_001");
        assert_eq!(all.len(), 15 + 41 + 38 + 25 + 21);
    }

    #[test]
    fn every_curated_entry_is_bilingual() {
        for entry in all_portfolio_items().iter().chain(studio_items().iter()) {
            let es = entry.alt.resolve(Locale::Es);
            let en = entry.alt.resolve(Locale::En);
            assert!(!es.is_empty() && !en.is_empty(), "{}", entry.id);
            assert_ne!(es, en, "{}", entry.id);
        }
    }

    #[test]
    fn studio_items_use_curated_alt() {
        let studio = studio_items();
        assert_eq!(studio.len(), 3);
        let first = &studio.entries()[0];
        assert_eq!(first.full_src, "/images/portfolio/Studio/st_001.jpeg");
        assert!(first.alt.resolve(Locale::En).starts_with("Vigarartattoo tattoo studio interior"));
    }

    #[test]
    fn studio_fallback_names_the_photo() {
        let alt = studio_fallback_alt("st_009");
        assert_eq!(alt.get(Locale::En), "Vigarartattoo tattoo studio st_009");
        assert_eq!(alt.get(Locale::Es), "Estudio de tatuajes Vigarartattoo st_009");
    }
}
