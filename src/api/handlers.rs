//! API Handlers
//!
//! HTTP request handlers for each breed explorer endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::cache::{self, CacheStore};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    AddFavoriteRequest, BreedsErrorResponse, BreedsResponse, CacheActionResponse,
    CacheCleanupResponse, CacheStatsResponse, ClearCacheRequest, FavoriteEntry, HealthResponse,
    ImagesQuery, RouteNotFoundResponse,
};
use crate::services::{BreedService, FavoritesService};
use crate::upstream::{DogApiClient, UpstreamError};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Breed catalog and image batches
    pub breeds: BreedService,
    /// Persisted favorites
    pub favorites: Arc<FavoritesService>,
    /// Process start, for the health endpoint's uptime
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new AppState from already constructed services.
    pub fn new(breeds: BreedService, favorites: FavoritesService) -> Self {
        Self {
            breeds,
            favorites: Arc::new(favorites),
            started_at: Instant::now(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the Dog CEO client, a fresh cache and the favorites file together.
    pub fn from_config(config: &Config) -> std::result::Result<Self, UpstreamError> {
        let client = DogApiClient::new(&config.dog_api_base_url, config.upstream_timeout())?;
        let cache = cache::shared(CacheStore::new(config.default_ttl()));
        let breeds = BreedService::new(Arc::new(client), cache, config.fetch_concurrency);
        let favorites = FavoritesService::new(config.favorites_path.clone(), breeds.clone());
        Ok(Self::new(breeds, favorites))
    }
}

// == Breeds ==

/// Handler for GET /breeds
///
/// Returns the full catalog with the time it took to build; failures also
/// report the elapsed time.
pub async fn list_breeds_handler(State(state): State<AppState>) -> Response {
    let started = Instant::now();

    match state.breeds.get_all_breeds().await {
        Ok(breeds) => {
            let elapsed = started.elapsed().as_millis();
            info!("Fetched {} breeds in {}ms", breeds.len(), elapsed);
            Json(BreedsResponse::new(breeds, elapsed)).into_response()
        }
        Err(err) => {
            let elapsed = started.elapsed().as_millis();
            error!("Failed to fetch breeds after {}ms: {}", elapsed, err);
            let message = match &err {
                AppError::Upstream(upstream) => upstream.short_message(),
                _ => "Unknown error".to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(BreedsErrorResponse::new(message, elapsed)),
            )
                .into_response()
        }
    }
}

/// Handler for GET /breeds/:breed/images?count=N
pub async fn breed_images_handler(
    State(state): State<AppState>,
    Path(breed): Path<String>,
    Query(query): Query<ImagesQuery>,
) -> Result<Json<Vec<String>>> {
    let count = query.count()?;
    let images = state.breeds.get_breed_images(&breed, count).await?;
    Ok(Json(images))
}

// == Favorites ==

/// Handler for GET /favorites
pub async fn list_favorites_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteEntry>>> {
    Ok(Json(state.favorites.list().await?))
}

/// Handler for POST /favorites
///
/// A body that is not JSON, or whose `breed` is not a string, is reported as
/// a validation error rather than axum's default rejection.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteEntry>)> {
    let Json(req) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let breed = req.breed()?;

    let favorite = state.favorites.add(breed).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Handler for DELETE /favorites/:breed
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Path(breed): Path<String>,
) -> Result<StatusCode> {
    let breed = breed.trim();
    if breed.is_empty() {
        return Err(AppError::Validation("Breed parameter is required".to_string()));
    }

    state.favorites.remove(breed).await?;
    Ok(StatusCode::NO_CONTENT)
}

// == Cache ==

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse::new(state.breeds.cache_stats().await))
}

/// Handler for POST /cache/clear
///
/// The body is optional; `{ "breed": "x" }` limits the clear to one breed.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CacheActionResponse>> {
    let req: ClearCacheRequest = if body.iter().all(u8::is_ascii_whitespace) {
        ClearCacheRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|err| AppError::Validation(format!("Invalid request body: {}", err)))?
    };

    let breed = req.breed();
    state.breeds.clear_cache(breed).await;
    Ok(Json(CacheActionResponse::cleared(breed)))
}

/// Handler for POST /cache/cleanup
pub async fn cleanup_cache_handler(State(state): State<AppState>) -> Json<CacheCleanupResponse> {
    Json(CacheCleanupResponse::new(state.breeds.cleanup_cache().await))
}

// == Misc ==

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.started_at.elapsed().as_secs_f64()))
}

/// Fallback for unmatched routes
pub async fn not_found_handler(uri: Uri) -> (StatusCode, Json<RouteNotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFoundResponse::new(uri.path())),
    )
}
