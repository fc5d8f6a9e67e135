//! # Wine List
//!
//! Browse, filter, and serve a restaurant wine list from a static JSON
//! catalog.
//!
//! The catalog is loaded once from a file or URL. Visitors narrow it by
//! wine type, region, and free-text search; the derived views (grid cards,
//! table rows, region index, wine detail) are printed by the CLI or served
//! as JSON to an external page renderer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌──────────────────┐
//! │ Data Source │──▶│   Loader     │──▶│ Catalog (Arc)    │
//! │ file / HTTP │   │ parse+degrade│   │ read-only        │
//! └─────────────┘   └─────────────┘   └────────┬─────────┘
//!                                              │ per page / request
//!                                              ▼
//!                                   ┌──────────────────────┐
//!                                   │ CatalogController     │
//!                                   │ ViewState+FilterState │
//!                                   └──────────┬───────────┘
//!                          ┌───────────────────┤
//!                          ▼                   ▼
//!                     ┌──────────┐       ┌──────────┐
//!                     │   CLI    │       │   HTTP   │
//!                     │(winelist)│       │  (JSON)  │
//!                     └──────────┘       └──────────┘
//! ```
//!
//! The pure derivation layer (filtering, region index, detail lookup,
//! vintage years, page state, projections) lives in the `wine-list-core`
//! crate; this crate adds configuration, loading, and the two frontends.
//!
//! ## Quick Start
//!
//! ```bash
//! winelist wines --type RED             # red wines as a table
//! winelist regions --search tosc        # regions matching "tosc"
//! winelist show W123                    # one wine in detail
//! winelist page wines --query "region=TOSCANA&type=RED" --json
//! winelist serve                        # start the JSON API
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`source`] | Data sources: local file and HTTP |
//! | [`loader`] | Catalog loading with degrade-to-empty on failure |
//! | [`browse`] | `wines`, `regions`, and `page` commands |
//! | [`show`] | Wine detail lookup (`show`) |
//! | [`stats`] | Catalog statistics (`stats`) |
//! | [`server`] | JSON HTTP server (Axum) with CORS |

pub mod browse;
pub mod config;
pub mod loader;
pub mod server;
pub mod show;
pub mod source;
pub mod stats;

pub use wine_list_core as core;
