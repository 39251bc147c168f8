use crate::core::config::DatabaseConfig;
use crate::core::error::AppError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Build the shared Postgres pool for every feature service
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Apply the embedded schema migrations under `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Convert a unique-constraint violation (PostgreSQL 23505) into `Conflict`.
///
/// `conflicts` pairs constraint names with the message for that clash; any other
/// unique violation gets `fallback`, and non-unique errors stay `Database`.
pub fn map_unique_violation(e: sqlx::Error, conflicts: &[(&str, &str)], fallback: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23505") {
            let message = db_err
                .constraint()
                .and_then(|name| conflicts.iter().find(|(c, _)| *c == name))
                .map(|(_, message)| *message)
                .unwrap_or(fallback);
            return AppError::Conflict(message.to_string());
        }
    }

    tracing::error!("Database error: {:?}", e);
    AppError::Database(e)
}
