//! Breed Aggregation Service
//!
//! Builds the breed catalog and per-breed image batches on top of the breed
//! provider, memoizing every upstream answer in the shared cache.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, SharedCache};
use crate::error::Result;
use crate::models::Breed;
use crate::upstream::BreedProvider;

// == Cache TTLs ==
/// The catalog touches every breed and is the most expensive to rebuild
pub const CATALOG_TTL: Duration = Duration::from_secs(60 * 60);
/// Image batches for one breed
pub const IMAGE_BATCH_TTL: Duration = Duration::from_secs(30 * 60);
/// Representative image for one catalog entry
pub const SINGLE_IMAGE_TTL: Duration = Duration::from_secs(15 * 60);

/// Default cap on concurrent image lookups while building the catalog
pub const DEFAULT_FETCH_CONCURRENCY: usize = 16;

// == Cache Keys ==
const CATALOG_KEY: &str = "all_breeds_with_images";

fn single_image_key(breed_path: &str) -> String {
    format!("breed_image_{}", breed_path)
}

fn image_batch_key(breed: &str, count: usize) -> String {
    format!("breed_images_{}_{}", breed, count)
}

/// Batch sizes invalidated by a per-breed cache clear
const INVALIDATED_BATCH_COUNTS: [usize; 2] = [3, 1];

// == Cached Payload ==
/// Everything the breed service keeps in the cache.
#[derive(Debug, Clone)]
pub enum CachedPayload {
    Catalog(Vec<Breed>),
    Images(Vec<String>),
    Image(String),
}

impl CachedPayload {
    fn into_catalog(self) -> Option<Vec<Breed>> {
        match self {
            CachedPayload::Catalog(breeds) => Some(breeds),
            _ => None,
        }
    }

    fn into_images(self) -> Option<Vec<String>> {
        match self {
            CachedPayload::Images(images) => Some(images),
            _ => None,
        }
    }

    fn into_image(self) -> Option<String> {
        match self {
            CachedPayload::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// Cache shared by the breed service and the cleanup task.
pub type BreedCache = SharedCache<CachedPayload>;

// == Breed Service ==
/// Aggregates breed data from a [`BreedProvider`] through the cache.
#[derive(Clone)]
pub struct BreedService {
    provider: Arc<dyn BreedProvider>,
    cache: BreedCache,
    fetch_concurrency: usize,
}

impl BreedService {
    /// Creates a service over `provider` and `cache`.
    ///
    /// `fetch_concurrency` bounds the simultaneous image lookups issued while
    /// building the catalog; values below 1 are raised to 1.
    pub fn new(provider: Arc<dyn BreedProvider>, cache: BreedCache, fetch_concurrency: usize) -> Self {
        Self {
            provider,
            cache,
            fetch_concurrency: fetch_concurrency.max(1),
        }
    }

    /// The cache this service reads and fills.
    pub fn cache(&self) -> &BreedCache {
        &self.cache
    }

    async fn cached(&self, key: &str) -> Option<CachedPayload> {
        self.cache.write().await.get(key)
    }

    async fn store(&self, key: String, payload: CachedPayload, ttl: Duration) {
        self.cache.write().await.set(key, payload, Some(ttl));
    }

    // == All Breeds ==
    /// Returns every breed and sub-breed with a representative image, sorted by name.
    ///
    /// Only a failure of the breed listing itself fails the call; an image
    /// lookup that fails leaves that breed without an image.
    pub async fn get_all_breeds(&self) -> Result<Vec<Breed>> {
        if let Some(breeds) = self.cached(CATALOG_KEY).await.and_then(CachedPayload::into_catalog) {
            debug!("Returning cached breed catalog ({} breeds)", breeds.len());
            return Ok(breeds);
        }

        info!("Fetching fresh breed catalog from upstream");
        let listing = self.provider.list_all_breeds().await?;

        // (display name, upstream path)
        let targets: Vec<(String, String)> = listing
            .iter()
            .flat_map(|(breed, subs)| {
                std::iter::once((breed.clone(), breed.clone())).chain(
                    subs.iter()
                        .map(move |sub| (format!("{}-{}", breed, sub), format!("{}/{}", breed, sub))),
                )
            })
            .collect();

        let mut breeds: Vec<Breed> = stream::iter(targets)
            .map(move |(name, path)| async move {
                let image = self.fetch_breed_image(&path).await;
                Breed::new(name, image)
            })
            .buffer_unordered(self.fetch_concurrency)
            .collect()
            .await;

        breeds.sort_by(|a, b| Breed::compare_names(&a.name, &b.name));

        self.store(
            CATALOG_KEY.to_string(),
            CachedPayload::Catalog(breeds.clone()),
            CATALOG_TTL,
        )
        .await;
        info!(
            "Cached {} breeds for {} minutes",
            breeds.len(),
            CATALOG_TTL.as_secs() / 60
        );

        Ok(breeds)
    }

    /// Best-effort single image for a breed path; failures are logged and absorbed.
    async fn fetch_breed_image(&self, breed_path: &str) -> Option<String> {
        let key = single_image_key(breed_path);
        if let Some(image) = self.cached(&key).await.and_then(CachedPayload::into_image) {
            return Some(image);
        }

        match self.provider.random_images(breed_path, 1).await {
            Ok(images) => {
                let image = images.into_iter().next()?;
                self.store(key, CachedPayload::Image(image.clone()), SINGLE_IMAGE_TTL)
                    .await;
                Some(image)
            }
            Err(err) => {
                warn!("Failed to fetch image for breed {}: {}", breed_path, err);
                None
            }
        }
    }

    // == Breed Images ==
    /// Returns `count` random images for `breed`.
    ///
    /// Each count is cached separately. Upstream failure fails the call.
    /// `count` is expected to be validated by the caller.
    pub async fn get_breed_images(&self, breed: &str, count: usize) -> Result<Vec<String>> {
        let key = image_batch_key(breed, count);
        if let Some(images) = self.cached(&key).await.and_then(CachedPayload::into_images) {
            debug!("Returning cached images for {} ({} images)", breed, count);
            return Ok(images);
        }

        info!("Fetching fresh images for {} ({} images)", breed, count);
        let images = self.provider.random_images(breed, count).await?;

        self.store(key, CachedPayload::Images(images.clone()), IMAGE_BATCH_TTL)
            .await;
        debug!(
            "Cached {} images for {} for {} minutes",
            images.len(),
            breed,
            IMAGE_BATCH_TTL.as_secs() / 60
        );

        Ok(images)
    }

    // == Cache Management ==
    /// Invalidates cached data for one breed, or the whole cache when `breed` is None.
    ///
    /// The per-breed set is fixed: the single image and the 1- and 3-image
    /// batches. Batches cached under other counts stay until they expire.
    pub async fn clear_cache(&self, breed: Option<&str>) {
        let mut cache = self.cache.write().await;
        match breed {
            Some(breed) => {
                cache.delete(&single_image_key(breed));
                for count in INVALIDATED_BATCH_COUNTS {
                    cache.delete(&image_batch_key(breed, count));
                }
                info!("Cleared cache for breed: {}", breed);
            }
            None => {
                cache.clear();
                info!("Cleared all cache");
            }
        }
    }

    /// Stats for the underlying cache; sweeps expired entries.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.write().await.stats()
    }

    /// Removes expired cache entries, returning how many were dropped.
    pub async fn cleanup_cache(&self) -> usize {
        let removed = self.cache.write().await.cleanup_expired();
        info!("Cleaned up {} expired cache entries", removed);
        removed
    }
}
