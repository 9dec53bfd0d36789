use keyscope_core::{AppError, AppResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Connects to PostgreSQL and applies the embedded relation-schema
/// migrations.
///
/// The returned pool is passed into adapters by the composition root;
/// connections are acquired per query and released on every exit path,
/// including query failure.
pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|error| AppError::Internal(format!("failed to connect to database: {error}")))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to run migrations: {error}")))?;

    info!("relation schema migrations applied");

    Ok(pool)
}
