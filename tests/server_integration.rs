//! HTTP server tests: spawn the router on a free port and query it with
//! reqwest.

use std::fs;
use tempfile::TempDir;

use wine_list::config::Config;
use wine_list::loader::load_catalog;
use wine_list::server;

const CATALOG: &str = r#"{
  "wines": [
    {"id": "W100", "name": "Chianti Classico", "type": "RED", "region": "TOSCANA",
     "varietals": "Sangiovese", "vintage": "2019", "price": 25},
    {"id": "W101", "name": "Pinot Grigio", "type": "WHITE", "region": "VENETO",
     "varietals": "Pinot Grigio", "vintage": "2022", "price": 18},
    {"id": "W123", "name": "Brunello di Montalcino", "type": "RED", "region": "TOSCANA",
     "varietals": "Sangiovese Grosso", "vintage": "2015", "price": 95},
    {"id": "W130", "name": "Barolo", "type": "RED", "region": "PIEMONTE",
     "varietals": "Nebbiolo", "vintage": "Vendemmia 2016"}
  ]
}"#;

fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

async fn wait_for_server(port: u16) {
    let client = reqwest::Client::new();
    let url = format!("http://127.0.0.1:{}/health", port);
    for _ in 0..50 {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        if let Ok(resp) = client.get(&url).send().await {
            if resp.status().is_success() {
                return;
            }
        }
    }
    panic!("Server did not become ready within 5 seconds");
}

/// Start a server over `catalog_json` and return its base URL.
async fn start_server(catalog_json: Option<&str>) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let catalog_path = tmp.path().join("wines.json");
    if let Some(json) = catalog_json {
        fs::write(&catalog_path, json).unwrap();
    }

    let port = find_free_port();
    let config: Config = toml::from_str(&format!(
        r#"
[catalog]
source = "{}"

[server]
bind = "127.0.0.1:{}"
"#,
        catalog_path.display(),
        port
    ))
    .unwrap();

    let loaded = load_catalog(&config.catalog).await;
    tokio::spawn(async move {
        server::run_server_with_catalog(&config, loaded).await.unwrap();
    });
    wait_for_server(port).await;

    (tmp, format!("http://127.0.0.1:{}", port))
}

async fn get_json(url: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::get(url).await.unwrap();
    let status = resp.status().as_u16();
    let body = resp.json().await.unwrap();
    (status, body)
}

fn ids(list: &serde_json::Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/health", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["wines"], 4);
    assert_eq!(body["catalog_available"], true);
    assert!(body["loaded_at"].as_str().is_some());
}

#[tokio::test]
async fn test_wines_filtered_by_type() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/wines?type=RED", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], "wines");
    assert_eq!(ids(&body["cards"]), vec!["W100", "W123", "W130"]);
    assert_eq!(ids(&body["rows"]), vec!["W100", "W123", "W130"]);
    assert_eq!(body["cards"][2]["year"], "2016");
    assert_eq!(body["cards"][2]["price"], "N/A");
}

#[tokio::test]
async fn test_wines_filtered_by_region_and_type() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (_, body) = get_json(&format!("{}/api/wines?region=TOSCANA&type=RED", base)).await;
    assert_eq!(ids(&body["rows"]), vec!["W100", "W123"]);
    assert_eq!(body["rows"][0]["link"], "wine.html?id=W100");
}

#[tokio::test]
async fn test_wines_search() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (_, body) = get_json(&format!("{}/api/wines?q=sangiovese", base)).await;
    assert_eq!(ids(&body["rows"]), vec!["W100", "W123"]);
}

#[tokio::test]
async fn test_regions_search_keeps_whole_catalog_counts() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/regions?q=tosc", base)).await;
    assert_eq!(status, 200);
    let regions = body["regions"].as_array().unwrap();
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0]["region"], "TOSCANA");
    assert_eq!(regions[0]["count"], 2);
}

#[tokio::test]
async fn test_regions_sorted() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (_, body) = get_json(&format!("{}/api/regions", base)).await;
    let names: Vec<&str> = body["regions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["region"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["PIEMONTE", "TOSCANA", "VENETO"]);
}

#[tokio::test]
async fn test_wine_detail_found() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/wines/W123", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Brunello di Montalcino");
    assert_eq!(body["year"], "2015");
    assert_eq!(body["price"], "95.00");
    assert_eq!(body["alcohol"], "N/A");
    assert_eq!(body["region_link"], "wines.html?region=TOSCANA");
}

#[tokio::test]
async fn test_wine_detail_not_found() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/wines/W999", base)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "not_found");
    assert!(body["error"]["message"].as_str().unwrap().contains("W999"));
}

#[tokio::test]
async fn test_detail_page_for_missing_wine() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/pages/detail?id=missing", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], "detail");
    assert_eq!(body["id"], "missing");
    assert!(body["wine"].is_null());
}

#[tokio::test]
async fn test_home_page() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/pages/home", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 4);
    let types = body["types"].as_array().unwrap();
    assert_eq!(types.len(), 4);
    assert_eq!(types[0]["wine_type"], "RED");
    assert_eq!(types[0]["count"], 3);
}

#[tokio::test]
async fn test_unknown_page_is_bad_request() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/pages/cellar", base)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_stats() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let (status, body) = get_json(&format!("{}/api/stats", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["total"], 4);
    assert_eq!(body["regions"], 3);
    assert_eq!(body["earliest_vintage"], 2015);
    assert_eq!(body["latest_vintage"], 2022);
}

#[tokio::test]
async fn test_missing_catalog_serves_empty_views() {
    let (_tmp, base) = start_server(None).await;

    let (_, health) = get_json(&format!("{}/health", base)).await;
    assert_eq!(health["wines"], 0);
    assert_eq!(health["catalog_available"], false);

    let (status, body) = get_json(&format!("{}/api/wines", base)).await;
    assert_eq!(status, 200);
    assert!(body["rows"].as_array().unwrap().is_empty());
    assert!(body["regions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_tmp, base) = start_server(Some(CATALOG)).await;

    let resp = reqwest::Client::new()
        .get(format!("{}/api/regions", base))
        .header("Origin", "https://winebar.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
