//! # Wine List Core
//!
//! Pure derivation logic for the Wine List: data models, catalog parsing,
//! filtering, region index, detail lookup, vintage years, page state, and
//! render projections.
//!
//! This crate performs no I/O and has no async runtime dependency. Loading
//! the catalog and presenting the views is left to the host application.

pub mod catalog;
pub mod controller;
pub mod detail;
pub mod filter;
pub mod links;
pub mod models;
pub mod page;
pub mod regions;
pub mod stats;
pub mod view;
pub mod vintage;

pub use catalog::{parse_catalog, Catalog, ParsedCatalog};
pub use controller::CatalogController;
pub use models::{FilterState, WineRecord, WineType, NOT_AVAILABLE};
pub use page::{PageContext, QueryParams, ViewState};
pub use view::PageView;
