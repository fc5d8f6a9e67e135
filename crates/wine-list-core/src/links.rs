//! Outbound link construction.
//!
//! Links point at the static pages of the wine list site. Every
//! user-controlled value is percent-encoded.

use serde::{Deserialize, Serialize};

use crate::models::WineType;

/// Builds page links relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBuilder {
    /// Page showing a single wine, e.g. `wine.html`.
    pub detail_page: String,
    /// Page listing wines for a region and/or type, e.g. `wines.html`.
    pub list_page: String,
}

impl Default for LinkBuilder {
    fn default() -> Self {
        Self {
            detail_page: "wine.html".to_string(),
            list_page: "wines.html".to_string(),
        }
    }
}

impl LinkBuilder {
    pub fn new(detail_page: impl Into<String>, list_page: impl Into<String>) -> Self {
        Self {
            detail_page: detail_page.into(),
            list_page: list_page.into(),
        }
    }

    /// `wine.html?id=<id>`
    pub fn detail(&self, id: &str) -> String {
        format!("{}?id={}", self.detail_page, urlencoding::encode(id))
    }

    /// `wines.html?region=<region>[&type=<TYPE>]`
    pub fn region(&self, region: &str, wine_type: Option<WineType>) -> String {
        let mut link = format!("{}?region={}", self.list_page, urlencoding::encode(region));
        if let Some(t) = wine_type {
            link.push_str("&type=");
            link.push_str(t.as_str());
        }
        link
    }

    /// `wines.html?type=<TYPE>`
    pub fn wine_type(&self, wine_type: WineType) -> String {
        format!("{}?type={}", self.list_page, wine_type.as_str())
    }
}
