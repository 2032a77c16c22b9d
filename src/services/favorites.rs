//! Favorites Store
//!
//! Keeps the user's favorite breeds in a JSON file and decorates them with
//! images from the breed service when read.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::favorite::normalize_breed;
use crate::models::{FavoriteEntry, FavoriteRecord};
use crate::services::BreedService;

/// File-backed list of favorite breeds.
///
/// Every mutation reads and rewrites the whole file while holding `lock`, so
/// concurrent requests never interleave read-modify-write cycles.
pub struct FavoritesService {
    path: PathBuf,
    breeds: BreedService,
    lock: Mutex<()>,
}

impl FavoritesService {
    /// Creates a store persisting to `path`. Nothing touches the disk until first use.
    pub fn new(path: impl Into<PathBuf>, breeds: BreedService) -> Self {
        Self {
            path: path.into(),
            breeds,
            lock: Mutex::new(()),
        }
    }

    /// Location of the favorites file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and an empty `[]` file if missing.
    async fn ensure_data_file(&self) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).await?;
        }
        if !fs::try_exists(&self.path).await? {
            info!("Creating favorites file at {}", self.path.display());
            fs::write(&self.path, "[]").await?;
        }
        Ok(())
    }

    async fn read_records(&self) -> Result<Vec<FavoriteRecord>> {
        self.ensure_data_file().await?;
        let data = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn write_records(&self, records: &[FavoriteRecord]) -> Result<()> {
        self.ensure_data_file().await?;
        let data = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, data).await?;
        Ok(())
    }

    /// Best-effort image for a favorite; reuses the breed service's 1-image batch.
    async fn resolve_image(&self, breed: &str) -> Option<String> {
        match self.breeds.get_breed_images(breed, 1).await {
            Ok(images) => images.into_iter().next(),
            Err(err) => {
                warn!("Failed to fetch image for favorite {}: {}", breed, err);
                None
            }
        }
    }

    // == List ==
    /// Returns favorites in insertion order, each with a freshly resolved image.
    pub async fn list(&self) -> Result<Vec<FavoriteEntry>> {
        let records = {
            let _guard = self.lock.lock().await;
            self.read_records().await?
        };

        let entries = join_all(records.into_iter().map(move |record| async move {
            let image = self.resolve_image(&record.breed).await;
            record.with_image(image)
        }))
        .await;

        debug!("Listed {} favorites", entries.len());
        Ok(entries)
    }

    // == Add ==
    /// Adds `breed` (stored lowercase).
    ///
    /// Fails with [`AppError::Conflict`] when it is already a favorite in any casing.
    pub async fn add(&self, breed: &str) -> Result<FavoriteEntry> {
        let record = {
            let _guard = self.lock.lock().await;
            let mut records = self.read_records().await?;

            if records.iter().any(|record| record.matches(breed)) {
                return Err(AppError::Conflict(format!(
                    "Breed {} is already in favorites",
                    breed
                )));
            }

            let record = FavoriteRecord::new(breed);
            records.push(record.clone());
            self.write_records(&records).await?;
            record
        };
        info!("Added favorite: {}", record.breed);

        // Upstream lookup runs outside the file lock
        let image = self.resolve_image(&record.breed).await;
        Ok(record.with_image(image))
    }

    // == Remove ==
    /// Removes `breed` in any casing and drops its cached images.
    ///
    /// Fails with [`AppError::NotFound`] without touching the file when absent.
    pub async fn remove(&self, breed: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        let before = records.len();

        records.retain(|record| !record.matches(breed));
        if records.len() == before {
            return Err(AppError::NotFound(format!(
                "Breed {} not found in favorites",
                breed
            )));
        }

        self.write_records(&records).await?;
        self.breeds.clear_cache(Some(&normalize_breed(breed))).await;
        info!("Removed favorite: {}", breed);

        Ok(())
    }

    // == Membership ==
    /// Case-insensitive membership test.
    pub async fn is_favorite(&self, breed: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let records = self.read_records().await?;
        Ok(records.iter().any(|record| record.matches(breed)))
    }
}
