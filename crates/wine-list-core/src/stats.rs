//! Catalog-wide statistics: per-type counts and an overview summary.

use serde::Serialize;

use crate::models::{WineRecord, WineType};
use crate::regions::build_region_index;
use crate::vintage::year_value;

/// Number of catalog records of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub wine_type: WineType,
    pub count: usize,
}

/// Count records per type over the whole catalog.
///
/// Every type is present, in [`WineType::ALL`] order, including those
/// with a zero count.
pub fn type_counts(catalog: &[WineRecord]) -> Vec<TypeCount> {
    WineType::ALL
        .iter()
        .map(|&wine_type| TypeCount {
            wine_type,
            count: catalog.iter().filter(|w| w.wine_type == wine_type).count(),
        })
        .collect()
}

/// Overview of a loaded catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub types: Vec<TypeCount>,
    pub regions: usize,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub earliest_vintage: Option<u16>,
    pub latest_vintage: Option<u16>,
}

pub fn catalog_stats(catalog: &[WineRecord]) -> CatalogStats {
    let prices = || catalog.iter().filter_map(|w| w.price);
    let years = || catalog.iter().filter_map(|w| year_value(w.vintage.as_deref()));

    CatalogStats {
        total: catalog.len(),
        types: type_counts(catalog),
        regions: build_region_index(catalog, None).len(),
        price_min: prices().reduce(f64::min),
        price_max: prices().reduce(f64::max),
        earliest_vintage: years().min(),
        latest_vintage: years().max(),
    }
}
