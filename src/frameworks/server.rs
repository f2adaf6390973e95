// Framework bootstrap for the zone server runtime.

use crate::frameworks::config;
use crate::interface_adapters::clients::{RecordStoreClient, StoreConfig};
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, SystemClock};

use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app(state)).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state()?;
    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

fn build_state() -> Result<AppState> {
    let store_config = StoreConfig {
        base_url: config::store_base_url(),
        timeout: config::store_timeout(),
    };
    tracing::debug!(
        store_base_url = %store_config.base_url,
        store_timeout_ms = store_config.timeout.as_millis(),
        "record store client configured"
    );

    let store = RecordStoreClient::new(store_config)
        .map_err(|e| std::io::Error::other(format!("failed to initialize store client: {e}")))?;

    Ok(AppState::new(Arc::new(store), Arc::new(SystemClock)))
}
