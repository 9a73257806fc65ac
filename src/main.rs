mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "mealplanner host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let host = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &host.site_root {
        leptos_options.site_root = site_root.to_string_lossy().as_ref().into();
    }

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(host.addr).await?;

    tracing::info!(addr = %host.addr, "mealplanner listening");
    axum::serve(listener, app).await?;
    Ok(())
}
