//! Integration tests for the HTTP transport against a local fake service.
//!
//! An Axum router stands in for the data service on an ephemeral port, so
//! the real `reqwest` path (status handling, body decoding, fallback) is
//! exercised without touching the network.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use pokedex_fetch::{Fetcher, FetcherConfig, Transport};
use pokedex_types::{EntryId, StatKind, SummaryRef};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(serde::Deserialize)]
struct ListQuery {
    limit: Option<usize>,
}

const SERVED: [(u32, &str, &str); 3] = [
    (4, "charmander", "fire"),
    (7, "squirtle", "water"),
    (25, "pikachu", "electric"),
];

fn record(id: u32, name: &str, type_name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": format!("https://img/{id}.png"),
            "other": { "official-artwork": { "front_default": format!("https://img/art/{id}.png") } }
        },
        "types": [{ "slot": 1, "type": { "name": type_name, "url": "t" } }],
        "abilities": [{ "ability": { "name": "static", "url": "a" }, "is_hidden": false }],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "s" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "s" } }
        ]
    })
}

async fn list(Query(query): Query<ListQuery>, addr: SocketAddr) -> Response {
    let limit = query.limit.unwrap_or(20);
    let results: Vec<serde_json::Value> = SERVED
        .iter()
        .take(limit)
        .map(|(id, name, _)| json!({ "name": name, "url": format!("http://{addr}/api/v2/pokemon/{id}/") }))
        .collect();
    axum::Json(json!({ "count": SERVED.len(), "next": null, "previous": null, "results": results }))
        .into_response()
}

async fn detail(Path(key): Path<String>) -> Response {
    match key.as_str() {
        "500" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "13" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => SERVED
            .iter()
            .find(|(id, name, _)| id.to_string() == key || *name == key)
            .map_or_else(
                || (StatusCode::NOT_FOUND, "Not Found").into_response(),
                |(id, name, type_name)| axum::Json(record(*id, name, type_name)).into_response(),
            ),
    }
}

async fn start_fake_service() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let router = Router::new()
        .route("/api/v2/pokemon", get(move |query: Query<ListQuery>| list(query, addr)))
        .route("/api/v2/pokemon/{key}", get(detail));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn http_fetcher(base: String) -> Fetcher {
    let config = FetcherConfig {
        api_base_url: base,
        ..FetcherConfig::default()
    };
    let fetcher = Fetcher::from_config(&config).unwrap();
    assert!(matches!(fetcher.transport(), Transport::Http(_)));
    fetcher
}

#[tokio::test]
async fn full_pipeline_over_http() {
    let addr = start_fake_service().await;
    let fetcher = http_fetcher(format!("http://{addr}/api/v2"));

    let summaries = fetcher.fetch_summary_list(151).await;
    assert_eq!(summaries.len(), 3);

    let entries = fetcher.fetch_details_for_list(&summaries).await;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "squirtle", "pikachu"]);
    assert_eq!(
        entries.last().and_then(|e| e.stat(StatKind::Speed)),
        Some(90)
    );
}

#[tokio::test]
async fn limit_is_forwarded() {
    let addr = start_fake_service().await;
    let fetcher = http_fetcher(format!("http://{addr}/api/v2"));
    assert_eq!(fetcher.fetch_summary_list(2).await.len(), 2);
}

#[tokio::test]
async fn lookup_by_name_over_http() {
    let addr = start_fake_service().await;
    let fetcher = http_fetcher(format!("http://{addr}/api/v2"));
    let entry = fetcher.fetch_by_name("Squirtle").await;
    assert_eq!(entry.map(|e| e.id), Some(EntryId(7)));
}

#[tokio::test]
async fn error_status_and_bad_body_fall_back() {
    let addr = start_fake_service().await;
    let fetcher = http_fetcher(format!("http://{addr}/api/v2"));

    assert!(fetcher.fetch_by_id(EntryId(500)).await.is_none());
    assert!(fetcher.fetch_by_id(EntryId(13)).await.is_none());
    // Not served by the fake, but present in the fallback table.
    assert_eq!(
        fetcher.fetch_by_id(EntryId(1)).await.map(|e| e.name),
        Some(String::from("bulbasaur"))
    );
}

#[tokio::test]
async fn partial_results_when_some_ids_are_missing() {
    let addr = start_fake_service().await;
    let fetcher = http_fetcher(format!("http://{addr}/api/v2"));
    let refs = vec![
        SummaryRef {
            name: String::from("pikachu"),
            url: format!("http://{addr}/api/v2/pokemon/25/"),
        },
        SummaryRef {
            name: String::from("missingno"),
            url: format!("http://{addr}/api/v2/pokemon/0/"),
        },
    ];
    let entries = fetcher.fetch_details_for_list(&refs).await;
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn unreachable_service_yields_fallback() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = http_fetcher(format!("http://{addr}/api/v2"));
    let summaries = fetcher.fetch_summary_list(151).await;
    assert_eq!(summaries.len(), 2);

    let entries = fetcher.fetch_details_for_list(&summaries).await;
    let ids: Vec<EntryId> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EntryId(1), EntryId(2)]);
}
