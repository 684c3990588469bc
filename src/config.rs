//! Project configuration.
//!
//! Handles loading, validating and merging `config.toml`. Stock defaults
//! are overridden by a `config.toml` in the project root (`--root`):
//!
//! ```text
//! site/
//! ├── config.toml              # Optional, sparse overrides
//! └── public/
//!     └── images/
//!         └── portfolio/
//!             ├── blackwork/
//!             │   ├── bw_001.jpeg
//!             │   └── thumbs/  # Written by `tattoo-folio thumbs`
//!             └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! public_dir = "public"     # Web root the asset paths are relative to
//!
//! [thumbnails]
//! size = 800                # Square edge in pixels (fill + center crop)
//! categories = ["featured", "fine-line", "blackwork", "color", "studio", "varios"]
//!
//! [thumbnails.quality]
//! webp = 72
//! avif = 45
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Project configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Web root, relative to the project root. Catalog paths like
    /// `/images/portfolio/...` resolve under it.
    pub public_dir: String,
    /// Thumbnail generation settings.
    pub thumbnails: ThumbnailsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".to_string(),
            thumbnails: ThumbnailsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.public_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "public_dir must not be empty".into(),
            ));
        }
        if self.thumbnails.size == 0 {
            return Err(ConfigError::Validation(
                "thumbnails.size must be non-zero".into(),
            ));
        }
        for (name, value) in [
            ("webp", self.thumbnails.quality.webp),
            ("avif", self.thumbnails.quality.avif),
        ] {
            if !(1..=100).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "thumbnails.quality.{name} must be 1-100"
                )));
            }
        }
        if self.thumbnails.categories.is_empty() {
            return Err(ConfigError::Validation(
                "thumbnails.categories must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Thumbnail generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailsConfig {
    /// Edge of the square thumbnail, in pixels.
    pub size: u32,
    /// Category directories to walk, in order.
    pub categories: Vec<Category>,
    /// Per-format encoding quality.
    pub quality: QualityConfig,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            size: 800,
            categories: vec![
                Category::Featured,
                Category::FineLine,
                Category::Blackwork,
                Category::Color,
                Category::Studio,
                Category::Mixed,
            ],
            quality: QualityConfig::default(),
        }
    }
}

/// Encoding quality per output format (1 = worst, 100 = best).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QualityConfig {
    pub webp: u32,
    pub avif: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self { webp: 72, avif: 45 }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in `root`, on top of stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# tattoo-folio configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Web root. Catalog paths such as /images/portfolio/blackwork/bw_001.jpeg
# are looked up under this directory.
public_dir = "public"

# ---------------------------------------------------------------------------
# Thumbnail generation (`tattoo-folio thumbs`)
# ---------------------------------------------------------------------------
[thumbnails]
# Thumbnails are square: the source is scaled to cover size x size and
# center-cropped.
size = 800

# Category directories under images/portfolio/ to walk, in order.
# "studio" lives in the Studio/ directory.
categories = ["featured", "fine-line", "blackwork", "color", "studio", "varios"]

# Encoding quality per format (1 = worst, 100 = best).
[thumbnails.quality]
webp = 72
avif = 45
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.public_dir, "public");
        assert_eq!(config.thumbnails.size, 800);
        assert_eq!(config.thumbnails.quality.webp, 72);
        assert_eq!(config.thumbnails.quality.avif, 45);
        assert_eq!(config.thumbnails.categories.len(), 6);
        assert_eq!(config.thumbnails.categories[0], Category::Featured);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[thumbnails.quality]
avif = 50
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.thumbnails.quality.avif, 50);
        // Defaults preserved
        assert_eq!(config.thumbnails.quality.webp, 72);
        assert_eq!(config.thumbnails.size, 800);
    }

    #[test]
    fn parse_categories_by_tag() {
        let toml = r#"
[thumbnails]
categories = ["studio", "varios", "fine-line"]
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.thumbnails.categories,
            vec![Category::Studio, Category::Mixed, Category::FineLine]
        );
    }

    #[test]
    fn unknown_keys_rejected() {
        let toml = r#"
[thumbnails]
sise = 600
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_category_rejected() {
        let toml = r#"
[thumbnails]
categories = ["watercolor"]
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_zero_size() {
        let mut config = SiteConfig::default();
        config.thumbnails.size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_quality_out_of_range() {
        let mut config = SiteConfig::default();
        config.thumbnails.quality.webp = 101;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.thumbnails.quality.avif = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_categories() {
        let mut config = SiteConfig::default();
        config.thumbnails.categories.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_toml_overrides_nested_keys_only() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[thumbnails]\nsize = 600\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.thumbnails.size, 600);
        assert_eq!(config.thumbnails.quality, QualityConfig::default());
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value =
            toml::from_str("[thumbnails]\ncategories = [\"color\"]\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.thumbnails.categories, vec![Category::Color]);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "public_dir = \"dist\"\n[thumbnails]\nsize = 400\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.public_dir, "dist");
        assert_eq!(config.thumbnails.size, 400);
    }

    #[test]
    fn load_config_invalid_toml_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not toml [[[").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_validation_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[thumbnails.quality]\nwebp = 0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
