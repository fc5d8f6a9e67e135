//! Catalog data sources.
//!
//! A [`DataSource`] produces the raw JSON payload of the wine list. Two
//! implementations are provided:
//!
//! - **[`FileSource`]** reads a local file.
//! - **[`HttpSource`]** fetches a URL with a bounded timeout.
//!
//! Use [`create_source`] to pick one from the configured `catalog.source`
//! string. Custom sources (embedded data, object storage, ...) can
//! implement the trait and be passed to
//! [`load_from_source`](crate::loader::load_from_source) directly.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::CatalogConfig;

/// Why the catalog could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch catalog from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Something that can hand over the catalog payload.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable location, used in logs and `/health`.
    fn describe(&self) -> String;

    /// Fetch the raw `{ "wines": [...] }` payload.
    async fn fetch(&self) -> Result<String, LoadError>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn http_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Http {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| self.http_error(e))?;

        let response = client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.http_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.http_error(e))
    }
}

/// Pick a data source for `catalog.source`: URLs go over HTTP, anything
/// else is a file path.
pub fn create_source(config: &CatalogConfig) -> Box<dyn DataSource> {
    let source = config.source.trim();
    if source.starts_with("http://") || source.starts_with("https://") {
        Box::new(HttpSource::new(
            source,
            Duration::from_secs(config.timeout_secs),
        ))
    } else {
        Box::new(FileSource::new(source))
    }
}
