//! Page context, URL parameters, and the view state machine.
//!
//! The page a controller serves is an explicit [`PageContext`] chosen by
//! the host (the CLI subcommand, the HTTP route), never inferred from a
//! URL path. Combined with the query string it determines a
//! [`ViewState`], which stays fixed for the controller's lifetime. Moving
//! to another state means building a new controller, just as navigating
//! to another page means a full page load.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::models::{FilterState, WineType};

/// Which page the controller is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageContext {
    Home,
    Regions,
    Wines,
    Detail,
}

impl PageContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageContext::Home => "home",
            PageContext::Regions => "regions",
            PageContext::Wines => "wines",
            PageContext::Detail => "detail",
        }
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page: '{0}'. Use home, regions, wines, or detail.")]
pub struct ParsePageError(pub String);

impl FromStr for PageContext {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" | "index" => Ok(PageContext::Home),
            "regions" => Ok(PageContext::Regions),
            "wines" | "list" => Ok(PageContext::Wines),
            "detail" | "wine" => Ok(PageContext::Detail),
            _ => Err(ParsePageError(s.to_string())),
        }
    }
}

/// Parameters read from the page URL's query string.
///
/// Values are percent-decoded. Empty values count as absent. When a key
/// repeats, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub wine_type: Option<WineType>,
    pub region: Option<String>,
    pub id: Option<String>,
    pub search: Option<String>,
    /// Raw `type` value that did not name a wine type; it leaves the
    /// type filter unset.
    pub invalid_type: Option<String>,
}

impl QueryParams {
    /// Parse `type`, `region`, `id`, and `q` from a query string. A leading
    /// `?` is accepted.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = QueryParams::default();
        let mut seen_type = false;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "type" if !seen_type => {
                    seen_type = true;
                    match value.parse::<WineType>() {
                        Ok(t) => params.wine_type = Some(t),
                        Err(_) => params.invalid_type = Some(value.into_owned()),
                    }
                }
                "region" if params.region.is_none() => params.region = Some(value.into_owned()),
                "id" if params.id.is_none() => params.id = Some(value.into_owned()),
                "q" if params.search.is_none() => params.search = Some(value.into_owned()),
                _ => {}
            }
        }

        params
    }

    /// Initial filter state seeded from the URL.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            type_filter: self.wine_type,
            region_filter: self.region.clone(),
            search_text: self.search.clone(),
        }
    }
}

/// The state a page is in, fixed at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Home,
    RegionsList,
    WineList {
        region: Option<String>,
        wine_type: Option<WineType>,
    },
    /// `id` is `None` when the detail page was loaded without one; that
    /// resolves to not-found.
    WineDetail { id: Option<String> },
}

impl ViewState {
    pub fn resolve(page: PageContext, params: &QueryParams) -> Self {
        match page {
            PageContext::Home => ViewState::Home,
            PageContext::Regions => ViewState::RegionsList,
            PageContext::Wines => ViewState::WineList {
                region: params.region.clone(),
                wine_type: params.wine_type,
            },
            PageContext::Detail => ViewState::WineDetail {
                id: params.id.clone(),
            },
        }
    }
}
