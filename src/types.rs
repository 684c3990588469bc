//! Shared types used by the catalog, the thumbnail generator and the CLI.
//!
//! Everything here is serialized to JSON by the `catalog` and `studio`
//! commands, so field and variant names are part of the contract with the
//! page-rendering layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Style tag of a portfolio entry. The set is closed.
///
/// Each category owns a directory under the asset root and a two-letter id
/// prefix. The tag is what the site uses in URLs and JSON; the directory is
/// what exists on disk (they only differ for the studio gallery).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Blackwork,
    Color,
    FineLine,
    #[serde(rename = "varios")]
    #[value(name = "varios")]
    Mixed,
    Featured,
    Studio,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Blackwork,
        Category::Color,
        Category::FineLine,
        Category::Mixed,
        Category::Featured,
        Category::Studio,
    ];

    /// Tag used in JSON, config files and the CLI.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Blackwork => "blackwork",
            Category::Color => "color",
            Category::FineLine => "fine-line",
            Category::Mixed => "varios",
            Category::Featured => "featured",
            Category::Studio => "studio",
        }
    }

    /// Directory name under the asset root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Studio => "Studio",
            other => other.tag(),
        }
    }

    /// Default id prefix for range-generated entries.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Blackwork => "bw",
            Category::Color => "co",
            Category::FineLine => "fl",
            Category::Mixed => "va",
            Category::Featured => "fe",
            Category::Studio => "st",
        }
    }

    /// Featured entries are hand-picked and never generated from a range.
    pub fn is_curated_only(self) -> bool {
        matches!(self, Category::Featured)
    }

    /// Generic alt text used when a range declares no base of its own.
    pub fn default_alt_base(self) -> LocalizedText {
        match self {
            Category::Blackwork => LocalizedText::new(
                "Tatuaje estilo blackwork en tinta negra",
                "Blackwork tattoo in black ink",
            ),
            Category::Color => LocalizedText::new(
                "Tatuaje a color estilo ilustración",
                "Color illustrative tattoo",
            ),
            Category::FineLine => {
                LocalizedText::new("Tatuaje de línea fina (fine line)", "Fine line tattoo")
            }
            Category::Studio => LocalizedText::new(
                "Estudio de tatuajes Vigarartattoo",
                "Vigarartattoo tattoo studio",
            ),
            Category::Mixed | Category::Featured => {
                LocalizedText::new("Tatuaje de estilo mixto", "Mixed-style tattoo")
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Site language.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// Locale used when a text has no translation for the requested one.
    pub const DEFAULT: Locale = Locale::Es;

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }
}

/// Text keyed by locale.
///
/// Lookups never fail: a missing translation falls back to
/// [`Locale::DEFAULT`], then to whatever translation exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    /// Spanish + English text, the shape every shipped entry uses.
    pub fn new(es: impl Into<String>, en: impl Into<String>) -> Self {
        Self(BTreeMap::from([(Locale::Es, es.into()), (Locale::En, en.into())]))
    }

    /// Text with a single translation.
    pub fn only(locale: Locale, text: impl Into<String>) -> Self {
        Self(BTreeMap::from([(locale, text.into())]))
    }

    pub fn get(&self, locale: Locale) -> &str {
        self.0
            .get(&locale)
            .or_else(|| self.0.get(&Locale::DEFAULT))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Apply `f` to every translation.
    pub fn map(&self, mut f: impl FnMut(&str) -> String) -> Self {
        Self(self.0.iter().map(|(l, t)| (*l, f(t))).collect())
    }
}

/// Accessible description of an image.
///
/// Older data carried a single string; current data is bilingual. Both
/// shapes deserialize, and [`AltText::resolve`] hides the difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AltText {
    Plain(String),
    Localized(LocalizedText),
}

impl AltText {
    /// Alt text for `locale`. Plain text is returned as is.
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            AltText::Plain(text) => text,
            AltText::Localized(text) => text.get(locale),
        }
    }
}

impl From<LocalizedText> for AltText {
    fn from(text: LocalizedText) -> Self {
        AltText::Localized(text)
    }
}

impl From<&str> for AltText {
    fn from(text: &str) -> Self {
        AltText::Plain(text.to_string())
    }
}

/// One catalog record: an image in a portfolio or studio gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    /// `<prefix>_<NNN>`, e.g. `bw_001`
    pub id: String,
    pub category: Category,
    /// Full-resolution asset, used by the lightbox
    pub full_src: String,
    /// Square thumbnail, used by grids
    pub thumb_src: String,
    pub alt: AltText,
}

impl PortfolioEntry {
    /// Presentation view with alt text resolved for one locale.
    pub fn localize(&self, locale: Locale) -> LocalizedEntry {
        LocalizedEntry {
            id: self.id.clone(),
            category: self.category,
            full_src: self.full_src.clone(),
            thumb_src: self.thumb_src.clone(),
            alt: self.alt.resolve(locale).to_string(),
        }
    }
}

/// [`PortfolioEntry`] with a single-language alt string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedEntry {
    pub id: String,
    pub category: Category,
    pub full_src: String,
    pub thumb_src: String,
    pub alt: String,
}
