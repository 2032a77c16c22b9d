//! API Module
//!
//! HTTP handlers and routing for the breed explorer REST API.
//!
//! # Endpoints
//! - `GET /breeds` - Full breed catalog
//! - `GET /breeds/:breed/images` - Random images for one breed
//! - `GET|POST /favorites`, `DELETE /favorites/:breed` - Favorites list
//! - `GET /cache/stats`, `POST /cache/clear`, `POST /cache/cleanup` - Cache housekeeping
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, create_router_with_timeout};
