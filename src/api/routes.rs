//! API Routes
//!
//! Configures the Axum router with all breed explorer endpoints.

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{
    add_favorite_handler, breed_images_handler, cache_stats_handler, cleanup_cache_handler,
    clear_cache_handler, health_handler, list_breeds_handler, list_favorites_handler,
    not_found_handler, remove_favorite_handler, AppState,
};

/// Inbound request timeout used by [`create_router`]
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Creates the main router with all endpoints and the default request timeout.
pub fn create_router(state: AppState) -> Router {
    create_router_with_timeout(state, DEFAULT_REQUEST_TIMEOUT)
}

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /breeds` - Full breed catalog
/// - `GET /breeds/:breed/images` - Random images for one breed
/// - `GET /favorites` - List favorites
/// - `POST /favorites` - Add a favorite
/// - `DELETE /favorites/:breed` - Remove a favorite
/// - `GET /cache/stats` - Cache statistics
/// - `POST /cache/clear` - Clear all or one breed's cache
/// - `POST /cache/cleanup` - Sweep expired cache entries
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Timeout: Requests exceeding `request_timeout` get 408
/// - Body limit: [`MAX_BODY_BYTES`], larger bodies get 413
/// - Security headers: `nosniff` and `SAMEORIGIN` framing on every response
/// - Tracing: Logs all requests
pub fn create_router_with_timeout(state: AppState, request_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/breeds", get(list_breeds_handler))
        .route("/breeds/:breed/images", get(breed_images_handler))
        .route(
            "/favorites",
            get(list_favorites_handler).post(add_favorite_handler),
        )
        .route("/favorites/:breed", delete(remove_favorite_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/clear", post(clear_cache_handler))
        .route("/cache/cleanup", post(cleanup_cache_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
