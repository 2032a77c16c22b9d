//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against a stub
//! breed provider and a temporary favorites file.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dog_breeds_explorer::{
    api::create_router,
    cache::{self, CacheStore},
    services::{BreedService, FavoritesService},
    upstream::{BreedListing, BreedProvider, UpstreamError},
    AppState,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

// == Stub Provider ==

#[derive(Default)]
struct FakeDogApi {
    failing: HashSet<String>,
    fail_listing: bool,
    image_calls: AtomicUsize,
}

impl FakeDogApi {
    fn failing(paths: &[&str]) -> Self {
        Self {
            failing: paths.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl BreedProvider for FakeDogApi {
    async fn list_all_breeds(&self) -> Result<BreedListing, UpstreamError> {
        if self.fail_listing {
            return Err(UpstreamError::Status {
                status: "error".into(),
                message: "listing unavailable".into(),
            });
        }
        let mut listing = BTreeMap::new();
        listing.insert("pug".to_string(), vec![]);
        listing.insert(
            "bulldog".to_string(),
            vec!["french".to_string(), "english".to_string()],
        );
        listing.insert("akita".to_string(), vec![]);
        Ok(listing)
    }

    async fn random_images(
        &self,
        breed_path: &str,
        count: usize,
    ) -> Result<Vec<String>, UpstreamError> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(breed_path) {
            return Err(UpstreamError::Status {
                status: "error".into(),
                message: "Breed not found (master breed does not exist)".into(),
            });
        }
        Ok((0..count)
            .map(|i| format!("https://images.dog.ceo/breeds/{}/{}.jpg", breed_path, i))
            .collect())
    }
}

// == Helper Functions ==

struct TestApp {
    _dir: TempDir,
    api: Arc<FakeDogApi>,
    router: Router,
}

fn create_test_app_with(api: FakeDogApi) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(api);
    let breeds = BreedService::new(api.clone(), cache::shared(CacheStore::default()), 4);
    let favorites = FavoritesService::new(dir.path().join("data/favorites.json"), breeds.clone());
    let router = create_router(AppState::new(breeds, favorites));
    TestApp {
        _dir: dir,
        api,
        router,
    }
}

fn create_test_app() -> TestApp {
    create_test_app_with(FakeDogApi::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == Breeds Endpoint Tests ==

#[tokio::test]
async fn test_breeds_endpoint_sorted_catalog() {
    let app = create_test_app();

    let (status, json) = send_json(&app.router, "GET", "/breeds", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 5);
    assert!(json["duration"].as_str().unwrap().ends_with("ms"));

    let names: Vec<&str> = json["breeds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["akita", "bulldog", "bulldog-english", "bulldog-french", "pug"]
    );
}

#[tokio::test]
async fn test_breeds_endpoint_keeps_breed_without_image() {
    let app = create_test_app_with(FakeDogApi::failing(&["bulldog/french"]));

    let (status, json) = send_json(&app.router, "GET", "/breeds", None).await;

    assert_eq!(status, StatusCode::OK);
    let breeds = json["breeds"].as_array().unwrap();
    let french = breeds
        .iter()
        .find(|b| b["name"] == "bulldog-french")
        .unwrap();
    assert!(french.get("image").is_none());
    let pug = breeds.iter().find(|b| b["name"] == "pug").unwrap();
    assert!(pug["image"].as_str().unwrap().contains("/pug/"));
}

#[tokio::test]
async fn test_breeds_endpoint_listing_failure() {
    let app = create_test_app_with(FakeDogApi {
        fail_listing: true,
        ..FakeDogApi::default()
    });

    let (status, json) = send_json(&app.router, "GET", "/breeds", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to fetch dog breeds");
    assert_eq!(json["message"], "listing unavailable");
    assert!(json.get("duration").is_some());
}

// == Breed Images Endpoint Tests ==

#[tokio::test]
async fn test_breed_images_default_count() {
    let app = create_test_app();

    let (status, json) = send_json(&app.router, "GET", "/breeds/pug/images", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_breed_images_cached_between_calls() {
    let app = create_test_app();

    let (_, first) = send_json(&app.router, "GET", "/breeds/pug/images?count=5", None).await;
    let (_, second) = send_json(&app.router, "GET", "/breeds/pug/images?count=5", None).await;

    assert_eq!(first.as_array().unwrap().len(), 5);
    assert_eq!(first, second);
    assert_eq!(app.api.image_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_breed_images_invalid_count() {
    let app = create_test_app();

    for uri in [
        "/breeds/pug/images?count=0",
        "/breeds/pug/images?count=11",
        "/breeds/pug/images?count=abc",
    ] {
        let (status, json) = send_json(&app.router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(json["error"].as_str().unwrap().contains("between 1 and 10"));
    }
    assert_eq!(app.api.image_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_breed_images_upstream_failure() {
    let app = create_test_app_with(FakeDogApi::failing(&["unicorn"]));

    let (status, json) = send_json(&app.router, "GET", "/breeds/unicorn/images", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json.get("error").is_some());
}

// == Favorites Endpoint Tests ==

#[tokio::test]
async fn test_favorites_lifecycle() {
    let app = create_test_app();

    let (status, json) =
        send_json(&app.router, "POST", "/favorites", Some(r#"{"breed":"pug"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["breed"], "pug");
    assert!(json.get("addedAt").is_some());

    let (status, json) = send_json(&app.router, "GET", "/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    let favorites = json.as_array().unwrap();
    assert!(favorites.iter().any(|f| f["breed"] == "pug"));
    assert!(favorites[0]["image"].is_string());

    let (status, body) = send(&app.router, "DELETE", "/favorites/pug", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, json) = send_json(&app.router, "GET", "/favorites", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!json
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["breed"] == "pug"));
}

#[tokio::test]
async fn test_add_favorite_duplicate_conflict() {
    let app = create_test_app();

    let (status, _) =
        send_json(&app.router, "POST", "/favorites", Some(r#"{"breed":"Labrador"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) =
        send_json(&app.router, "POST", "/favorites", Some(r#"{"breed":"labrador"}"#)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Breed already in favorites");
}

#[tokio::test]
async fn test_add_favorite_invalid_bodies() {
    let app = create_test_app();

    for body in [r#"{}"#, r#"{"breed":"   "}"#, r#"{"breed":42}"#, r#"{"invalid json"#] {
        let (status, json) = send_json(&app.router, "POST", "/favorites", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert!(json.get("error").is_some());
    }
}

#[tokio::test]
async fn test_remove_favorite_case_insensitive() {
    let app = create_test_app();

    send_json(&app.router, "POST", "/favorites", Some(r#"{"breed":"labrador"}"#)).await;
    let (status, _) = send(&app.router, "DELETE", "/favorites/LABRADOR", None).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_remove_favorite_not_found() {
    let app = create_test_app();

    let (status, json) = send_json(&app.router, "DELETE", "/favorites/unknown-breed", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Breed not found in favorites");
}

#[tokio::test]
async fn test_remove_favorite_blank_breed() {
    let app = create_test_app();

    let (status, _) = send_json(&app.router, "DELETE", "/favorites/%20%20", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Cache Endpoint Tests ==

#[tokio::test]
async fn test_cache_stats_endpoint() {
    let app = create_test_app();
    send(&app.router, "GET", "/breeds/pug/images?count=2", None).await;

    let (status, json) = send_json(&app.router, "GET", "/cache/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["stats"]["validEntries"], 1);
    assert_eq!(json["stats"]["expiredEntries"], 0);
    assert_eq!(json["stats"]["totalEntries"], 1);
    assert_eq!(json["stats"]["cacheSize"], 1);
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_cache_clear_all() {
    let app = create_test_app();
    send(&app.router, "GET", "/breeds", None).await;

    let (status, json) = send_json(&app.router, "POST", "/cache/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "All cache cleared");

    let (_, json) = send_json(&app.router, "GET", "/cache/stats", None).await;
    assert_eq!(json["stats"]["cacheSize"], 0);
}

#[tokio::test]
async fn test_cache_clear_single_breed_refetches() {
    let app = create_test_app();
    send(&app.router, "GET", "/breeds/pug/images", None).await;

    let (status, json) =
        send_json(&app.router, "POST", "/cache/clear", Some(r#"{"breed":"pug"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Cache cleared for breed: pug");

    send(&app.router, "GET", "/breeds/pug/images", None).await;
    assert_eq!(app.api.image_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_cache_cleanup_endpoint() {
    let app = create_test_app();

    let (status, json) = send_json(&app.router, "POST", "/cache/cleanup", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["deletedCount"], 0);
    assert_eq!(json["success"], true);
}

// == Misc Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send_json(&app.router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert!(json.get("timestamp").is_some());
    assert!(json["uptime"].is_number());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let (status, json) = send_json(&app.router, "GET", "/api/unknown", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Route not found");
    assert_eq!(json["path"], "/api/unknown");
}
