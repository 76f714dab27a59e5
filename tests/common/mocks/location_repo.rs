#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use locations_api::domain::{Location, NewLocation};
use locations_api::error::{AppError, AppResult};
use locations_api::infrastructure::repositories::LocationRepository;

/// In-memory store that assigns increasing ids like a `BIGSERIAL` column.
#[derive(Default)]
pub struct MockLocationRepo {
    pub locations: Mutex<Vec<Location>>,
    pub batch_timestamps: Mutex<Vec<DateTime<Utc>>>,
}

impl MockLocationRepo {
    pub fn with_locations(items: Vec<NewLocation>) -> Self {
        let now = Utc::now();
        let locations = items
            .into_iter()
            .zip(1..)
            .map(|(item, id)| item.into_location(id, now))
            .collect();

        Self {
            locations: Mutex::new(locations),
            batch_timestamps: Mutex::new(Vec::new()),
        }
    }

    pub fn stored(&self) -> Vec<Location> {
        self.locations
            .lock()
            .expect("locations mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl LocationRepository for MockLocationRepo {
    async fn fetch_all(&self) -> AppResult<Vec<Location>> {
        let mut all = self.stored();
        all.sort_by_key(|location| location.id);
        Ok(all)
    }

    async fn insert_batch(
        &self,
        items: &[NewLocation],
        timestamp: DateTime<Utc>,
    ) -> AppResult<u64> {
        let mut locations = self.locations.lock().expect("locations mutex poisoned");
        let mut next_id = locations.iter().map(|location| location.id).max().unwrap_or(0);

        for item in items {
            next_id += 1;
            locations.push(item.clone().into_location(next_id, timestamp));
        }

        self.batch_timestamps
            .lock()
            .expect("timestamps mutex poisoned")
            .push(timestamp);
        Ok(items.len() as u64)
    }
}

/// Every call fails as if the database were down.
pub struct FailingLocationRepo;

#[async_trait]
impl LocationRepository for FailingLocationRepo {
    async fn fetch_all(&self) -> AppResult<Vec<Location>> {
        Err(AppError::database_unavailable(
            "Unable to connect to database. Please try again later.",
        ))
    }

    async fn insert_batch(
        &self,
        _items: &[NewLocation],
        _timestamp: DateTime<Utc>,
    ) -> AppResult<u64> {
        Err(AppError::database_unavailable(
            "Unable to connect to database. Please try again later.",
        ))
    }
}
