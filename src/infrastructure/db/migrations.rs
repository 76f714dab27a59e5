use sqlx::PgPool;
use tracing::info;

/// Applies the migrations embedded from `./migrations` at compile time.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    migrator.run(pool).await?;
    info!(
        migrations = migrator.iter().count(),
        "database migrations applied"
    );
    Ok(())
}
