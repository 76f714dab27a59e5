use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::{Location, NewLocation};
use crate::error::AppResult;

use super::traits::LocationRepository;

/// Postgres accepts at most this many bind parameters per statement.
const MAX_BIND_PARAMETERS: usize = 65_535;
const COLUMNS_PER_ROW: usize = 5;
const ROWS_PER_STATEMENT: usize = MAX_BIND_PARAMETERS / COLUMNS_PER_ROW;

pub struct LocationRepositoryImpl {
    pool: PgPool,
}

impl LocationRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for LocationRepositoryImpl {
    async fn fetch_all(&self) -> AppResult<Vec<Location>> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT id, name, lat, lng, created_at, updated_at FROM locations ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    async fn insert_batch(
        &self,
        items: &[NewLocation],
        timestamp: DateTime<Utc>,
    ) -> AppResult<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in items.chunks(ROWS_PER_STATEMENT) {
            let mut builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO locations (name, lat, lng, created_at, updated_at) ",
            );
            builder.push_values(chunk, |mut row, item| {
                row.push_bind(&item.name)
                    .push_bind(item.coordinate.latitude)
                    .push_bind(item.coordinate.longitude)
                    .push_bind(timestamp)
                    .push_bind(timestamp);
            });

            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
