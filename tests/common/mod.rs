#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use locations_api::api::routes::AppState;
use locations_api::application::LocationService;
use locations_api::config::SecurityConfig;
use locations_api::infrastructure::db::migrations::run_migrations;
use locations_api::infrastructure::repositories::LocationRepository;
use locations_api::observability::AppMetrics;
use once_cell::sync::Lazy;
use sqlx::postgres::{PgConnection, PgPool, PgPoolOptions};
use sqlx::Connection;
use tokio::sync::{Mutex, MutexGuard};

pub mod fixtures;
pub mod mocks;

static TEST_DB_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const TEST_DB_ADVISORY_LOCK: i64 = 7_245_001;

pub struct TestDb {
    pool: PgPool,
    _db_lock_conn: PgConnection,
    _lock: MutexGuard<'static, ()>,
}

impl TestDb {
    /// Connects to the test database and empties the `locations` table.
    /// Returns `None` when no database URL is configured so local runs skip;
    /// in CI a missing URL is a hard failure.
    pub async fn new() -> Option<Self> {
        dotenvy::dotenv().ok();
        let url = env::var("TEST_DATABASE_URL")
            .ok()
            .or_else(|| env::var("DATABASE_URL").ok());

        let Some(url) = url else {
            if env::var("CI").is_ok() {
                panic!(
                    "DATABASE_URL or TEST_DATABASE_URL not set in CI. \
                    Integration tests require a database connection."
                );
            }
            eprintln!("Skipping test: DATABASE_URL or TEST_DATABASE_URL not set");
            return None;
        };

        let lock = Lazy::force(&TEST_DB_MUTEX).lock().await;

        // Serializes resets across test binaries sharing one database.
        let mut db_lock_conn = PgConnection::connect(&url).await.ok()?;
        sqlx::query("SELECT pg_advisory_lock($1)")
            .bind(TEST_DB_ADVISORY_LOCK)
            .execute(&mut db_lock_conn)
            .await
            .ok()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .ok()?;

        run_migrations(&pool).await.ok()?;
        sqlx::query("TRUNCATE TABLE locations RESTART IDENTITY")
            .execute(&pool)
            .await
            .ok()?;

        Some(Self {
            pool,
            _db_lock_conn: db_lock_conn,
            _lock: lock,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

pub fn test_security_config() -> SecurityConfig {
    SecurityConfig {
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        metrics_allow_private_only: true,
        metrics_admin_token: None,
        global_rate_limit_per_minute: 300,
        global_rate_limit_burst_size: 30,
    }
}

pub fn create_app_state(location_repo: Arc<dyn LocationRepository>) -> AppState {
    AppState {
        location_service: Arc::new(LocationService::new(location_repo)),
        security: test_security_config(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: None,
    }
}
