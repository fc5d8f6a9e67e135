//! Catalog loader.
//!
//! Loads the wine list once at startup. Failure to obtain or parse the
//! payload never aborts the program: it is logged and the catalog comes up
//! empty, so every page still renders (as an empty list or a not-found
//! message). Individual malformed records are logged and skipped.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use wine_list_core::{parse_catalog, Catalog, ParsedCatalog};

use crate::config::CatalogConfig;
use crate::source::{create_source, DataSource, LoadError};

/// A catalog together with where and when it was loaded.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Arc<Catalog>,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    /// Records dropped because they could not be decoded.
    pub skipped: usize,
    /// False when the source could not be read or parsed at all.
    pub available: bool,
}

/// Load the catalog described by `config`, degrading to empty on failure.
pub async fn load_catalog(config: &CatalogConfig) -> LoadedCatalog {
    let source = create_source(config);
    load_from_source(source.as_ref()).await
}

/// Load from an arbitrary [`DataSource`], degrading to empty on failure.
pub async fn load_from_source(source: &dyn DataSource) -> LoadedCatalog {
    let location = source.describe();

    match try_load(source).await {
        Ok(parsed) => {
            for skipped in &parsed.skipped {
                tracing::warn!(
                    index = skipped.index,
                    id = skipped.id.as_deref().unwrap_or("?"),
                    "skipping malformed wine record: {}",
                    skipped.reason
                );
            }
            tracing::info!(
                source = %location,
                wines = parsed.catalog.len(),
                skipped = parsed.skipped.len(),
                "catalog loaded"
            );
            LoadedCatalog {
                catalog: Arc::new(parsed.catalog),
                source: location,
                loaded_at: Utc::now(),
                skipped: parsed.skipped.len(),
                available: true,
            }
        }
        Err(e) => {
            tracing::warn!(
                source = %location,
                "catalog unavailable, continuing with an empty list: {}",
                e
            );
            LoadedCatalog {
                catalog: Arc::new(Catalog::empty()),
                source: location,
                loaded_at: Utc::now(),
                skipped: 0,
                available: false,
            }
        }
    }
}

/// Fetch and parse without degrading, for callers that want the error.
pub async fn try_load(source: &dyn DataSource) -> Result<ParsedCatalog, LoadError> {
    let payload = source.fetch().await?;
    Ok(parse_catalog(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticSource(&'static str);

    #[async_trait]
    impl DataSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch(&self) -> Result<String, LoadError> {
            Err(LoadError::Status {
                url: "http://example.invalid/wines.json".to_string(),
                status: 503,
            })
        }
    }

    #[tokio::test]
    async fn test_loads_records() {
        let loaded = load_from_source(&StaticSource(
            r#"{"wines": [{"id": 1, "name": "Chianti", "type": "RED", "region": "TOSCANA", "price": 25}]}"#,
        ))
        .await;
        assert!(loaded.available);
        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.source, "static");
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let loaded = load_from_source(&FailingSource).await;
        assert!(!loaded.available);
        assert!(loaded.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_degrades_to_empty() {
        let loaded = load_from_source(&StaticSource("<html>oops</html>")).await;
        assert!(!loaded.available);
        assert!(loaded.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_missing_wines_key_is_available_but_empty() {
        let loaded = load_from_source(&StaticSource(r#"{"bottles": []}"#)).await;
        assert!(loaded.available);
        assert!(loaded.catalog.is_empty());
    }

    #[tokio::test]
    async fn test_bad_records_counted() {
        let loaded = load_from_source(&StaticSource(
            r#"{"wines": [{"id": 1, "name": "A", "type": "RED"}, {"id": 2, "name": "B", "type": "BLUE"}]}"#,
        ))
        .await;
        assert_eq!(loaded.catalog.len(), 1);
        assert_eq!(loaded.skipped, 1);
    }

    #[tokio::test]
    async fn test_try_load_surfaces_parse_error() {
        let err = try_load(&StaticSource("not json")).await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
