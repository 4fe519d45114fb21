//! Integration tests for `AdminClient::get_all_products` and its disk cache.
//!
//! Every test gets its own `TempDir` for the cache file and its own
//! `wiremock` server; `.expect(n)` pins how many full fetches happen.

use std::fs::File;
use std::time::{Duration, SystemTime};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopsync_admin::{AdminClient, ProductCache};
use shopsync_core::AppConfig;

fn test_client(server: &MockServer, dir: &TempDir) -> AdminClient {
    let config = AppConfig {
        shop: "example.myshopify.com".to_owned(),
        access_token: "shpat_test".to_owned(),
        api_version: "2024-04".to_owned(),
        admin_api_url: server.uri(),
        location_id: Some(1),
        cache_path: dir.path().join("all_products.json"),
        cache_ttl_secs: 7200,
        request_timeout_secs: 5,
        user_agent: "shopsync-test/0.1".to_owned(),
        max_pages: 10,
        log_level: "debug".to_owned(),
    };
    AdminClient::new(&config).expect("failed to build test AdminClient")
}

fn age_file(client: &AdminClient, by: Duration) {
    let file = File::options()
        .write(true)
        .open(client.cache().path())
        .unwrap();
    file.set_modified(SystemTime::now() - by).unwrap();
}

async fn mount_single_page(server: &MockServer, body: serde_json::Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn second_call_within_window_is_served_from_cache() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_single_page(&server, json!({"products": [{"id": 1}, {"id": 2}]}), 1).await;

    let client = test_client(&server, &dir);
    let first = client.get_all_products().await.unwrap().unwrap();
    let bytes_after_first = std::fs::read(client.cache().path()).unwrap();
    let second = client.get_all_products().await.unwrap().unwrap();
    let bytes_after_second = std::fs::read(client.cache().path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(bytes_after_first, bytes_after_second);
    assert_eq!(first, vec![json!({"id": 1}), json!({"id": 2})]);
}

#[tokio::test]
async fn stale_cache_triggers_one_fetch_and_is_overwritten() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_single_page(&server, json!({"products": [{"id": 9}]}), 1).await;

    let client = test_client(&server, &dir);
    client.cache().store(&[json!({"id": 1})]).unwrap();
    age_file(&client, Duration::from_secs(7201));

    let products = client.get_all_products().await.unwrap().unwrap();
    assert_eq!(products, vec![json!({"id": 9})]);

    let on_disk = client.cache().load_fresh(SystemTime::now()).unwrap();
    assert_eq!(on_disk, vec![json!({"id": 9})]);
}

#[tokio::test]
async fn empty_cache_file_is_never_trusted() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_single_page(&server, json!({"products": [{"id": 3}]}), 1).await;

    let client = test_client(&server, &dir);
    std::fs::write(client.cache().path(), "[]").unwrap();

    let products = client.get_all_products().await.unwrap().unwrap();
    assert_eq!(products, vec![json!({"id": 3})]);
}

#[tokio::test]
async fn empty_listing_returns_none_and_leaves_cache_untouched() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_single_page(&server, json!({"products": []}), 1).await;

    let client = test_client(&server, &dir);
    client.cache().store(&[json!({"id": 1})]).unwrap();
    age_file(&client, Duration::from_secs(8000));
    let before = std::fs::read(client.cache().path()).unwrap();

    let result = client.get_all_products().await.unwrap();
    assert!(result.is_none(), "a failed refresh must not fall back to the stale cache");
    assert_eq!(std::fs::read(client.cache().path()).unwrap(), before);
}

#[tokio::test]
async fn empty_listing_does_not_create_a_cache_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_single_page(&server, json!({"products": []}), 1).await;

    let client = test_client(&server, &dir);
    assert!(client.get_all_products().await.unwrap().is_none());
    assert!(!client.cache().path().exists());
}

#[tokio::test]
async fn pages_are_concatenated_in_response_order() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let link_to = |cursor: &str| {
        format!(
            "<{}/products.json?limit=250&page_info={cursor}>; rel=\"next\"",
            server.uri()
        )
    };

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param_is_missing("page_info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [{"id": 1}, {"id": 2}]}))
                .insert_header("Link", link_to("p2").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [{"id": 3}]}))
                .insert_header("Link", link_to("p3").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products.json"))
        .and(query_param("page_info", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": [{"id": 4}, {"id": 5}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, &dir);
    let products = client.get_all_products().await.unwrap().unwrap();
    let ids: Vec<i64> = products.iter().filter_map(|p| p["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let cached = ProductCache::new(client.cache().path(), Duration::from_secs(7200))
        .load_fresh(SystemTime::now())
        .unwrap();
    assert_eq!(cached, products);
}

#[tokio::test]
async fn fetch_failure_propagates_and_keeps_cache() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/products.json"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, &dir);
    client.cache().store(&[json!({"id": 1})]).unwrap();
    age_file(&client, Duration::from_secs(7300));

    assert!(client.get_all_products().await.is_err());
    assert!(client.cache().path().exists());
}
