mod calendar;
mod config;
mod emoji;
mod error;
mod formatter;
mod models;
mod penguin;
mod responder;
mod routes;
mod security;
mod service;
mod twilio;

use crate::config::Config;
use crate::routes::{build_router, AppState};
use crate::service::DailyTextService;
use dotenv::dotenv;
use std::error::Error as StdError;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn StdError>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        daily: Arc::new(DailyTextService::from_settings(&config.twilio)),
        cron_secret: Arc::from(config.cron_secret.as_str()),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Larry & Steve are listening on {} 🐧", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
