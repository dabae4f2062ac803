// src/main.rs
mod config;
mod database;
mod dtos;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod validation;

use std::net::{IpAddr, SocketAddr};

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::init as tracing_init;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();

    // Create database pool
    let db_config = config::DbConfig::from_env();
    let db_pool = database::create_pool(&db_config)
        .await
        .expect("Failed to create database pool");

    let app = routes::app(state::AppState::new(db_pool.clone()));

    let host_str = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let host: IpAddr = host_str.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from((host, port));

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => {
            tracing::info!("Server running on {}", addr);
            l
        }
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    // Release pooled connections before exiting
    db_pool.close().await;
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
