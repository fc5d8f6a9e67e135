//! Core data models: wine records, wine types, and the visitor filter state.
//!
//! Records arrive from a static JSON catalog whose shape is loosely
//! controlled. Deserialization is tolerant: ids may be
//! strings or numbers, numeric fields such as `vintage` or `alcohol` may be
//! written as bare numbers, and any optional field may be absent or `null`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder rendered wherever an optional field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// The closed set of wine categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WineType {
    Red,
    White,
    Rose,
    Sparkling,
}

impl WineType {
    /// All variants, in display order.
    pub const ALL: [WineType; 4] = [
        WineType::Red,
        WineType::White,
        WineType::Rose,
        WineType::Sparkling,
    ];

    /// Canonical uppercase form, as used in the data file and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            WineType::Red => "RED",
            WineType::White => "WHITE",
            WineType::Rose => "ROSE",
            WineType::Sparkling => "SPARKLING",
        }
    }
}

impl fmt::Display for WineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string is not one of the four wine types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wine type: '{0}'. Must be RED, WHITE, ROSE, or SPARKLING.")]
pub struct ParseWineTypeError(pub String);

impl FromStr for WineType {
    type Err = ParseWineTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RED" => Ok(WineType::Red),
            "WHITE" => Ok(WineType::White),
            "ROSE" | "ROSÉ" => Ok(WineType::Rose),
            "SPARKLING" => Ok(WineType::Sparkling),
            _ => Err(ParseWineTypeError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for WineType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single entry of the wine list. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub wine_type: WineType,
    /// Empty when the source omits the region or sets it to `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub region: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub varietals: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub description: Option<String>,
    /// Free text; may embed a year ("2015 Riserva").
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub vintage: Option<String>,
    /// Numbers and numeric strings are accepted; anything else reads as
    /// unknown.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub alcohol: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub aging: Option<String>,
}

impl WineRecord {
    /// Minimal record with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, wine_type: WineType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            wine_type,
            region: String::new(),
            varietals: None,
            description: None,
            vintage: None,
            price: None,
            alcohol: None,
            aging: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_varietals(mut self, varietals: impl Into<String>) -> Self {
        self.varietals = Some(varietals.into());
        self
    }

    pub fn with_vintage(mut self, vintage: impl Into<String>) -> Self {
        self.vintage = Some(vintage.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Region for display, with the placeholder substituted when blank.
    pub fn region_or_placeholder(&self) -> &str {
        if self.region.trim().is_empty() {
            NOT_AVAILABLE
        } else {
            &self.region
        }
    }
}

/// The visitor's current filter selection.
///
/// All three criteria are conjunctive; an unset criterion matches
/// everything. An empty region and blank search text are treated the same
/// as unset, whichever entry point set them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub type_filter: Option<WineType>,
    pub region_filter: Option<String>,
    pub search_text: Option<String>,
}

impl FilterState {
    /// Trimmed, lowercased search needle, or `None` when there is nothing
    /// to search for.
    pub fn search_needle(&self) -> Option<String> {
        search_needle(self.search_text.as_deref())
    }

    /// The region to match exactly, or `None` when unset or empty.
    pub fn region(&self) -> Option<&str> {
        self.region_filter.as_deref().filter(|r| !r.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.type_filter.is_none() && self.region().is_none() && self.search_needle().is_none()
    }
}

/// Whitespace-only text means no search; otherwise the text is matched
/// as typed, lowercased.
pub(crate) fn search_needle(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
        .map(str::to_lowercase)
}

// ============ Deserialization helpers ============

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Num(n) => number_to_string(&n),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Integral floats print without a fraction (`1.0` -> `"1"`), matching how
/// the catalog's ids appear in URLs.
fn number_to_string(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(Scalar::into_string)
}

fn opt_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let price = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Num(n)) => n.as_f64(),
        Some(Scalar::Str(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(price.filter(|p| p.is_finite()))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
