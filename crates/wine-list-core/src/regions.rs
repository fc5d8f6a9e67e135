//! Region index builder.
//!
//! The region list shown next to the wine list is derived from the whole
//! catalog, ignoring the type and region filters. Only the search text
//! narrows which regions are listed, and even then each region's count is
//! its full population in the catalog.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::filter::contains_ci;
use crate::models::{search_needle, WineRecord};

/// A distinct region and the number of catalog records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub region: String,
    pub count: usize,
}

/// Build the sorted region index.
///
/// - Blank regions are excluded.
/// - Regions are compared and sorted by their exact value (ordinal,
///   case-sensitive), so `"Toscana"` and `"TOSCANA"` are distinct entries.
/// - When `search_text` is non-blank, only regions containing it
///   (case-insensitively) survive. Counts are unaffected.
pub fn build_region_index(catalog: &[WineRecord], search_text: Option<&str>) -> Vec<RegionCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for wine in catalog {
        if wine.region.trim().is_empty() {
            continue;
        }
        *counts.entry(wine.region.as_str()).or_insert(0) += 1;
    }

    let needle = search_needle(search_text);

    counts
        .into_iter()
        .filter(|(region, _)| match needle.as_deref() {
            Some(needle) => contains_ci(region, needle),
            None => true,
        })
        .map(|(region, count)| RegionCount {
            region: region.to_string(),
            count,
        })
        .collect()
}
