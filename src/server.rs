//! JSON HTTP server.
//!
//! Exposes the derived wine list views to an external page renderer (a
//! static site, a template layer, a mobile app). The server owns no DOM or
//! markup: every endpoint returns plain derived data.
//!
//! The catalog is loaded once at startup and shared read-only between
//! requests. Each request builds its own controller from the query string,
//! so no filter state is shared between visitors.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/health` | Health check (version, catalog size, load time) |
//! | `GET`  | `/api/wines?type=&region=&q=` | Filtered wine list with region index |
//! | `GET`  | `/api/wines/{id}` | Single wine detail |
//! | `GET`  | `/api/regions?q=&type=` | Region index |
//! | `GET`  | `/api/pages/{page}?...` | Full view for `home`, `regions`, `wines`, or `detail` |
//! | `GET`  | `/api/stats` | Catalog statistics |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "not_found", "message": "wine not found: W999" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted so a static site served
//! from another origin can call the API.

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use wine_list_core::links::LinkBuilder;
use wine_list_core::stats::{catalog_stats, CatalogStats};
use wine_list_core::view::{PageView, WineDetailView};
use wine_list_core::{CatalogController, PageContext, QueryParams};

use crate::config::Config;
use crate::loader::LoadedCatalog;

/// Shared application state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct AppState {
    loaded: Arc<LoadedCatalog>,
    links: Arc<LinkBuilder>,
}

impl AppState {
    fn controller(&self, page: PageContext, query: Option<&str>) -> CatalogController {
        let params = QueryParams::parse(query.unwrap_or_default());
        if let Some(ref raw) = params.invalid_type {
            tracing::debug!(value = %raw, "ignoring unknown wine type in query");
        }
        CatalogController::from_params(self.loaded.catalog.clone(), page, &params)
            .with_links((*self.links).clone())
    }
}

/// Serve an already loaded catalog.
///
/// Binds to `[server].bind` and runs until the process is terminated.
pub async fn run_server_with_catalog(
    config: &Config,
    loaded: LoadedCatalog,
) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = router(loaded, config.links.link_builder());

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("wine list server listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(loaded: LoadedCatalog, links: LinkBuilder) -> Router {
    let state = AppState {
        loaded: Arc::new(loaded),
        links: Arc::new(links),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/wines", get(handle_wines))
        .route("/api/wines/{id}", get(handle_wine_detail))
        .route("/api/regions", get(handle_regions))
        .route("/api/pages/{page}", get(handle_page))
        .route("/api/stats", get(handle_stats))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    wines: usize,
    catalog_available: bool,
    source: String,
    loaded_at: String,
}

async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        wines: state.loaded.catalog.len(),
        catalog_available: state.loaded.available,
        source: state.loaded.source.clone(),
        loaded_at: state.loaded.loaded_at.to_rfc3339(),
    })
}

// ============ GET /api/wines, /api/regions ============

async fn handle_wines(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<PageView> {
    Json(state.controller(PageContext::Wines, query.as_deref()).render())
}

async fn handle_regions(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<PageView> {
    Json(state.controller(PageContext::Regions, query.as_deref()).render())
}

// ============ GET /api/wines/{id} ============

async fn handle_wine_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WineDetailView>, AppError> {
    let params = QueryParams {
        id: Some(id.clone()),
        ..Default::default()
    };
    let controller =
        CatalogController::from_params(state.loaded.catalog.clone(), PageContext::Detail, &params)
            .with_links((*state.links).clone());

    match controller.render() {
        PageView::Detail {
            wine: Some(wine), ..
        } => Ok(Json(wine)),
        _ => Err(not_found(format!("wine not found: {}", id))),
    }
}

// ============ GET /api/pages/{page} ============

/// A detail page whose wine is unknown still returns its view (with
/// `wine: null`) so the renderer can show a not-found message.
async fn handle_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<PageView>, AppError> {
    let page: PageContext = page.parse().map_err(|e: wine_list_core::page::ParsePageError| {
        bad_request(e.to_string())
    })?;
    Ok(Json(state.controller(page, query.as_deref()).render()))
}

// ============ GET /api/stats ============

async fn handle_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(catalog_stats(state.loaded.catalog.wines()))
}
