//! # Client configuration (`booking.toml`)
//!
//! Defines the TOML file the web entry point embeds at build time
//! (filename: [`BookingConfig::filename`] = `"booking.toml"`). It tells the
//! client where the hotels API lives and carries the handful of constants the
//! views need.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://hotels-api.academlo.tech"
//!
//! [images]
//! placeholder = "https://placehold.co/600x400/gray/white?text=Hotel+Image"
//!
//! [reservations]
//! nightly_rate = 487
//!
//! [filters]
//! combine = false   # true = search, price and city narrow each other
//!
//! [reviews]
//! page_size = 5
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`BookingConfig`] | Top-level config. TOML (de)serialisation, base-URL override, filename constant. |
//! | [`ApiConfig`] | Remote API base URL. |
//! | [`ImagesConfig`] | Placeholder shown for missing or invalid hotel images. |
//! | [`ReservationsConfig`] | Flat nightly rate used for reservation subtotals. |
//! | [`FiltersConfig`] | Whether the home filters compose or act one at a time. |
//! | [`ReviewsConfig`] | How many reviews are revealed per "load more" step. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent
//! to [`BookingConfig::default`].

use serde::{Deserialize, Serialize};

use crate::filter::FilterMode;

pub const DEFAULT_API_BASE_URL: &str = "https://hotels-api.academlo.tech";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/600x400/gray/white?text=Hotel+Image";
pub const DEFAULT_NIGHTLY_RATE: u32 = 487;
pub const DEFAULT_REVIEW_PAGE_SIZE: usize = 5;

/// Top-level configuration stored in `booking.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub images: ImagesConfig,
    #[serde(default)]
    pub reservations: ReservationsConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub reviews: ReviewsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationsConfig {
    /// Flat per-night amount; not the hotel's own price.
    #[serde(default = "default_nightly_rate")]
    pub nightly_rate: u32,
}

fn default_nightly_rate() -> u32 {
    DEFAULT_NIGHTLY_RATE
}

impl Default for ReservationsConfig {
    fn default() -> Self {
        Self {
            nightly_rate: default_nightly_rate(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    #[serde(default)]
    pub combine: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewsConfig {
    #[serde(default = "default_review_page_size")]
    pub page_size: usize,
}

fn default_review_page_size() -> usize {
    DEFAULT_REVIEW_PAGE_SIZE
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            page_size: default_review_page_size(),
        }
    }
}

impl BookingConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "booking.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to replace the API base URL. Blank values are ignored.
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn filter_mode(&self) -> FilterMode {
        if self.filters.combine {
            FilterMode::Combined
        } else {
            FilterMode::Independent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = BookingConfig::from_toml("").unwrap();
        assert_eq!(config, BookingConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.reservations.nightly_rate, 487);
        assert_eq!(config.reviews.page_size, 5);
        assert_eq!(config.filter_mode(), FilterMode::Independent);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = BookingConfig::from_toml(
            r#"
            [reservations]
            nightly_rate = 120

            [filters]
            combine = true
            "#,
        )
        .unwrap();
        assert_eq!(config.reservations.nightly_rate, 120);
        assert_eq!(config.filter_mode(), FilterMode::Combined);
        assert_eq!(config.images.placeholder, DEFAULT_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn base_url_override_trims_trailing_slash() {
        let config = BookingConfig::default().with_base_url(Some("http://localhost:3000/"));
        assert_eq!(config.api.base_url, "http://localhost:3000");

        let unchanged = BookingConfig::default().with_base_url(Some("   "));
        assert_eq!(unchanged.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn toml_roundtrip() {
        let config = BookingConfig::default().with_base_url(Some("http://api.test"));
        let text = config.to_toml().unwrap();
        assert_eq!(BookingConfig::from_toml(&text).unwrap(), config);
    }
}
