use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use std::time::Duration;

/// PostgreSQL caps `statement_timeout` at `i32::MAX` milliseconds
fn statement_timeout_ms(secs: u64) -> u64 {
    secs.saturating_mul(1000).min(i32::MAX as u64)
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let statement_timeout = format!(
        "SET statement_timeout = {}",
        statement_timeout_ms(config.statement_timeout_secs)
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .after_connect(move |conn, _meta| {
            let statement_timeout = statement_timeout.clone();
            Box::pin(async move {
                conn.execute(statement_timeout.as_str()).await?;
                Ok(())
            })
        })
        .connect(&config.url)
        .await
}
