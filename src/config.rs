use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use wine_list_core::links::LinkBuilder;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path to the JSON data file, or an `http(s)://` URL.
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7340".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LinksConfig {
    #[serde(default = "default_detail_page")]
    pub detail_page: String,
    #[serde(default = "default_list_page")]
    pub list_page: String,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            detail_page: default_detail_page(),
            list_page: default_list_page(),
        }
    }
}

fn default_detail_page() -> String {
    "wine.html".to_string()
}
fn default_list_page() -> String {
    "wines.html".to_string()
}

impl LinksConfig {
    pub fn link_builder(&self) -> LinkBuilder {
        LinkBuilder::new(&self.detail_page, &self.list_page)
    }
}

impl Config {
    /// Defaults used when no config file exists.
    pub fn minimal() -> Self {
        Self {
            catalog: CatalogConfig {
                source: "./data/wines.json".to_string(),
                timeout_secs: default_timeout_secs(),
            },
            server: ServerConfig::default(),
            links: LinksConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.catalog.source.trim().is_empty() {
        anyhow::bail!("catalog.source must not be empty");
    }

    if config.catalog.timeout_secs == 0 {
        anyhow::bail!("catalog.timeout_secs must be > 0");
    }

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.links.detail_page.trim().is_empty() || config.links.list_page.trim().is_empty() {
        anyhow::bail!("links.detail_page and links.list_page must not be empty");
    }

    Ok(())
}
