use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::api::dtos::LocationResponse;
use crate::application::proximity;
use crate::domain::{Coordinate, DomainError, NewLocation};
use crate::error::AppResult;
use crate::infrastructure::repositories::LocationRepository;

pub mod mapper;

#[derive(Clone)]
pub struct LocationService {
    location_repo: Arc<dyn LocationRepository>,
}

impl LocationService {
    pub fn new(location_repo: Arc<dyn LocationRepository>) -> Self {
        Self { location_repo }
    }

    /// Persists `items` as one atomic batch. The clock is read once, so every
    /// stored row carries the same `created_at`/`updated_at`.
    pub async fn add_locations(&self, items: Vec<NewLocation>) -> AppResult<u64> {
        if items.is_empty() {
            return Err(DomainError::EmptyBatch.into());
        }

        let batch_timestamp = Utc::now();
        let inserted = self
            .location_repo
            .insert_batch(&items, batch_timestamp)
            .await?;

        info!(
            count = inserted,
            batch_timestamp = %batch_timestamp,
            "locations batch inserted"
        );
        Ok(inserted)
    }

    pub async fn nearest_one(&self, reference: Coordinate) -> AppResult<Option<LocationResponse>> {
        let snapshot = self.location_repo.fetch_all().await?;
        let nearest = proximity::nearest_one(&snapshot, reference).cloned();

        debug!(
            candidates = snapshot.len(),
            found = nearest.is_some(),
            lat = reference.latitude,
            lng = reference.longitude,
            "nearest location query"
        );
        Ok(nearest.map(mapper::map_location_to_response))
    }

    pub async fn nearest_within(
        &self,
        reference: Coordinate,
        threshold_km: f64,
    ) -> AppResult<Vec<LocationResponse>> {
        let snapshot = self.location_repo.fetch_all().await?;
        let matches = proximity::nearest_within(&snapshot, reference, threshold_km);

        debug!(
            candidates = snapshot.len(),
            matches = matches.len(),
            threshold_km,
            "locations within threshold query"
        );
        Ok(mapper::map_locations_to_response(matches))
    }
}
