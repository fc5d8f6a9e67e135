//! Detail resolver: look up a single wine by id.

use crate::models::WineRecord;

/// Find the record whose id equals `id` exactly.
///
/// Ids are expected to be unique. When the catalog nonetheless contains
/// duplicates, the first one in catalog order is returned. `None` is the
/// not-found signal.
pub fn resolve_detail<'a>(catalog: &'a [WineRecord], id: &str) -> Option<&'a WineRecord> {
    catalog.iter().find(|wine| wine.id == id)
}
