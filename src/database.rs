// src/database.rs
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DbConfig;

/// Connection options for the configured database. The session search_path
/// is pinned to the configured schema so every statement resolves unqualified
/// table names there.
pub fn connect_options(cfg: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&cfg.host)
        .port(cfg.port)
        .database(&cfg.database)
        .username(&cfg.user)
        .password(&cfg.password)
        .options([("search_path", cfg.schema.as_str())])
}

/// Create the connection pool, verifying that the database is reachable.
pub async fn create_pool(cfg: &DbConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options(cfg))
        .await
}
