mod api;
mod middleware;

use std::sync::Arc;

use scout_core::ServiceMode;
use scout_places::PlacesClient;
use scout_scraper::PageClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, Backend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = scout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let backend = match config.mode {
        ServiceMode::Scrape => Backend::Scrape(Arc::new(PageClient::new(
            config.scraper_request_timeout_secs,
            &config.scraper_user_agent,
        )?)),
        ServiceMode::Places => Backend::Places(Arc::new(PlacesClient::with_base_url(
            config.require_places_api_key()?,
            &config.places_base_url,
        )?)),
    };

    tracing::info!(
        mode = %config.mode,
        env = %config.env,
        bind_addr = %config.bind_addr,
        "starting charity-scout server"
    );

    let app = build_app(backend);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
