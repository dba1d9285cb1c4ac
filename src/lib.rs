pub mod api;
pub mod config;
pub mod error;
pub mod groq;
pub mod query;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::groq::{ChatClient, GroqClient};
use crate::query::QueryHandler;

pub struct AppState {
    pub handler: QueryHandler,
}

impl AppState {
    pub fn new(client: Arc<dyn ChatClient>, model: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            handler: QueryHandler::new(client, model),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Arc<Self>, ConfigError> {
        let client = GroqClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config.model.clone()))
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
