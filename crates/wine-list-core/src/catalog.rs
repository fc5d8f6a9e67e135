//! The in-memory wine catalog and its JSON payload parser.
//!
//! The data file has the shape `{ "wines": [ ... ] }`. Parsing is split
//! into two levels:
//!
//! 1. The envelope must be a JSON object. Anything else is a parse error
//!    for the caller to degrade on.
//! 2. Each entry of `wines` is decoded on its own. Entries that fail (an
//!    unknown `type`, a missing `name`, ...) are reported in
//!    [`ParsedCatalog::skipped`] and left out, so one bad record never
//!    hides the rest of the list.
//!
//! A missing or `null` `wines` key yields an empty catalog.

use serde::Deserialize;

use crate::models::WineRecord;

/// Ordered, read-only collection of wine records.
///
/// Insertion order is the source order and is preserved by every
/// derivation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    wines: Vec<WineRecord>,
}

impl Catalog {
    pub fn new(wines: Vec<WineRecord>) -> Self {
        Self { wines }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn wines(&self) -> &[WineRecord] {
        &self.wines
    }

    pub fn len(&self) -> usize {
        self.wines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wines.is_empty()
    }
}

/// A record that could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position within the `wines` array.
    pub index: usize,
    /// The record's `id`, when one could be read.
    pub id: Option<String>,
    pub reason: String,
}

/// Result of parsing a catalog payload.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    wines: Option<Vec<serde_json::Value>>,
}

/// Parse a `{ "wines": [...] }` payload.
///
/// Fails only when the payload is not valid JSON or not an object with an
/// array-valued (or absent) `wines` key.
pub fn parse_catalog(payload: &str) -> serde_json::Result<ParsedCatalog> {
    let envelope: Envelope = serde_json::from_str(payload)?;
    let entries = envelope.wines.unwrap_or_default();

    let mut wines = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let id = entry.get("id").and_then(|v| match v {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        match serde_json::from_value::<WineRecord>(entry) {
            Ok(wine) => wines.push(wine),
            Err(e) => skipped.push(SkippedRecord {
                index,
                id,
                reason: e.to_string(),
            }),
        }
    }

    Ok(ParsedCatalog {
        catalog: Catalog::new(wines),
        skipped,
    })
}
