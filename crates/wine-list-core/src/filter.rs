//! Filter engine: applies a [`FilterState`] to the catalog.
//!
//! A record passes when every set criterion holds:
//!
//! - `type_filter` equals the record's type,
//! - `region_filter`, when non-empty, equals the record's region exactly
//!   (case-sensitive),
//! - the search needle is a case-insensitive substring of the name, the
//!   region, or the varietals. A record without varietals simply cannot
//!   match on that field.
//!
//! The output is always a subsequence of the input in catalog order.

use crate::models::{FilterState, WineRecord};

/// Return the records passing `filter`, in catalog order.
pub fn filter_wines<'a>(catalog: &'a [WineRecord], filter: &FilterState) -> Vec<&'a WineRecord> {
    let needle = filter.search_needle();
    catalog
        .iter()
        .filter(|wine| passes(wine, filter, needle.as_deref()))
        .collect()
}

/// Whether a single record passes `filter`.
pub fn matches(wine: &WineRecord, filter: &FilterState) -> bool {
    passes(wine, filter, filter.search_needle().as_deref())
}

fn passes(wine: &WineRecord, filter: &FilterState, needle: Option<&str>) -> bool {
    if let Some(wine_type) = filter.type_filter {
        if wine.wine_type != wine_type {
            return false;
        }
    }

    if let Some(region) = filter.region() {
        if wine.region != region {
            return false;
        }
    }

    match needle {
        None => true,
        Some(needle) => matches_search(wine, needle),
    }
}

/// `needle` must already be lowercased.
pub(crate) fn matches_search(wine: &WineRecord, needle: &str) -> bool {
    contains_ci(&wine.name, needle)
        || contains_ci(&wine.region, needle)
        || wine
            .varietals
            .as_deref()
            .is_some_and(|v| contains_ci(v, needle))
}

pub(crate) fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
