//! Derived views and render projections.
//!
//! [`derive`] computes the filter-dependent state (filtered wines plus
//! region index) in one step. The projection types ([`WineCard`],
//! [`WineRow`], [`WineDetailView`], ...) are what a renderer consumes:
//! plain data with placeholders already substituted and links already
//! built, so the renderer never touches a raw record.

use serde::Serialize;

use crate::detail::resolve_detail;
use crate::filter::filter_wines;
use crate::links::LinkBuilder;
use crate::models::{FilterState, WineRecord, WineType, NOT_AVAILABLE};
use crate::page::ViewState;
use crate::regions::{build_region_index, RegionCount};
use crate::stats::type_counts;
use crate::vintage::extract_year;

/// Filter-dependent state, recomputed on every filter change.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    /// Matching records in catalog order.
    pub filtered_wines: Vec<&'a WineRecord>,
    /// Distinct regions narrowed by the search text only.
    pub region_index: Vec<RegionCount>,
}

pub fn derive<'a>(catalog: &'a [WineRecord], filter: &FilterState) -> DerivedView<'a> {
    DerivedView {
        filtered_wines: filter_wines(catalog, filter),
        region_index: build_region_index(catalog, filter.search_text.as_deref()),
    }
}

/// Grid card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WineCard {
    pub id: String,
    pub name: String,
    pub wine_type: WineType,
    pub region: String,
    pub year: String,
    pub price: String,
    pub link: String,
}

/// Table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WineRow {
    pub id: String,
    pub name: String,
    pub wine_type: WineType,
    pub region: String,
    pub varietals: String,
    pub year: String,
    pub price: String,
    pub link: String,
}

/// Everything the detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WineDetailView {
    pub id: String,
    pub name: String,
    pub wine_type: WineType,
    pub region: String,
    pub varietals: String,
    pub description: String,
    pub vintage: String,
    pub year: String,
    pub price: String,
    pub alcohol: String,
    pub aging: String,
    /// Back link to the wine's region listing; absent for wines without a
    /// region.
    pub region_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionEntry {
    pub region: String,
    pub count: usize,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeTile {
    pub wine_type: WineType,
    pub count: usize,
    pub link: String,
}

/// The rendered state of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home {
        total: usize,
        types: Vec<TypeTile>,
        regions: Vec<RegionEntry>,
    },
    Regions {
        regions: Vec<RegionEntry>,
    },
    Wines {
        filter: FilterState,
        total: usize,
        cards: Vec<WineCard>,
        rows: Vec<WineRow>,
        regions: Vec<RegionEntry>,
    },
    /// `wine` is `None` when no record matches `id`.
    Detail {
        id: Option<String>,
        wine: Option<WineDetailView>,
    },
}

impl PageView {
    /// True for a detail page whose wine could not be resolved.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageView::Detail { wine: None, .. })
    }
}

/// Render `state` against the catalog and filter.
pub fn render_page(
    state: &ViewState,
    catalog: &[WineRecord],
    filter: &FilterState,
    links: &LinkBuilder,
) -> PageView {
    match state {
        ViewState::Home => PageView::Home {
            total: catalog.len(),
            types: type_counts(catalog)
                .into_iter()
                .map(|t| TypeTile {
                    wine_type: t.wine_type,
                    count: t.count,
                    link: links.wine_type(t.wine_type),
                })
                .collect(),
            regions: region_entries(
                &build_region_index(catalog, filter.search_text.as_deref()),
                None,
                links,
            ),
        },
        ViewState::RegionsList => PageView::Regions {
            regions: region_entries(
                &build_region_index(catalog, filter.search_text.as_deref()),
                filter.type_filter,
                links,
            ),
        },
        ViewState::WineList { .. } => {
            let derived = derive(catalog, filter);
            PageView::Wines {
                filter: filter.clone(),
                total: derived.filtered_wines.len(),
                cards: derived
                    .filtered_wines
                    .iter()
                    .map(|w| WineCard::project(w, links))
                    .collect(),
                rows: derived
                    .filtered_wines
                    .iter()
                    .map(|w| WineRow::project(w, links))
                    .collect(),
                regions: region_entries(&derived.region_index, filter.type_filter, links),
            }
        }
        ViewState::WineDetail { id } => PageView::Detail {
            id: id.clone(),
            wine: id
                .as_deref()
                .and_then(|id| resolve_detail(catalog, id))
                .map(|w| WineDetailView::project(w, links)),
        },
    }
}

pub fn region_entries(
    index: &[RegionCount],
    wine_type: Option<WineType>,
    links: &LinkBuilder,
) -> Vec<RegionEntry> {
    index
        .iter()
        .map(|r| RegionEntry {
            region: r.region.clone(),
            count: r.count,
            link: links.region(&r.region, wine_type),
        })
        .collect()
}

impl WineCard {
    pub fn project(wine: &WineRecord, links: &LinkBuilder) -> Self {
        Self {
            id: wine.id.clone(),
            name: wine.name.clone(),
            wine_type: wine.wine_type,
            region: wine.region_or_placeholder().to_string(),
            year: extract_year(wine.vintage.as_deref()),
            price: format_price(wine.price),
            link: links.detail(&wine.id),
        }
    }
}

impl WineRow {
    pub fn project(wine: &WineRecord, links: &LinkBuilder) -> Self {
        Self {
            id: wine.id.clone(),
            name: wine.name.clone(),
            wine_type: wine.wine_type,
            region: wine.region_or_placeholder().to_string(),
            varietals: or_placeholder(wine.varietals.as_deref()),
            year: extract_year(wine.vintage.as_deref()),
            price: format_price(wine.price),
            link: links.detail(&wine.id),
        }
    }
}

impl WineDetailView {
    pub fn project(wine: &WineRecord, links: &LinkBuilder) -> Self {
        let has_region = !wine.region.trim().is_empty();
        Self {
            id: wine.id.clone(),
            name: wine.name.clone(),
            wine_type: wine.wine_type,
            region: wine.region_or_placeholder().to_string(),
            varietals: or_placeholder(wine.varietals.as_deref()),
            description: or_placeholder(wine.description.as_deref()),
            vintage: or_placeholder(wine.vintage.as_deref()),
            year: extract_year(wine.vintage.as_deref()),
            price: format_price(wine.price),
            alcohol: or_placeholder(wine.alcohol.as_deref()),
            aging: or_placeholder(wine.aging.as_deref()),
            region_link: has_region.then(|| links.region(&wine.region, None)),
        }
    }
}

/// Two decimals, or the placeholder when the price is unknown.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => format!("{:.2}", p),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
