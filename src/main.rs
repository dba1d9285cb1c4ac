use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use groq_qa::config::AppConfig;
use groq_qa::{build_app, run_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let state = AppState::from_config(&config).context("failed to initialise model client")?;
    info!(model = %config.model, port = config.port, "starting groq-qa");

    run_server(build_app(state), config.port)
        .await
        .context("server failed")
}
