use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Location, NewLocation};
use crate::error::AppResult;

/// Storage capability behind the location service.
///
/// Implementations must return a consistent snapshot from `fetch_all`,
/// ordered by insertion, and must make `insert_batch` all-or-nothing.
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn fetch_all(&self) -> AppResult<Vec<Location>>;

    /// Stores every item with `created_at = updated_at = timestamp` and
    /// returns the number of rows written.
    async fn insert_batch(&self, items: &[NewLocation], timestamp: DateTime<Utc>)
        -> AppResult<u64>;
}
