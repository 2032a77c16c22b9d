//! Dog Breeds Explorer - a caching proxy over the Dog CEO breed API
//!
//! Aggregates the breed catalog with representative images, serves image
//! batches per breed, and keeps a file-backed list of favorite breeds.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
