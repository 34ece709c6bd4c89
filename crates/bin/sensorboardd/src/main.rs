//! # sensorboardd — sensorboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Install the `tracing` subscriber
//! - Construct the item store client once (DynamoDB or in-memory)
//! - Construct the record service, injecting the store via the port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sensorboard_adapter_http_axum::state::AppState;
use sensorboard_adapter_storage_memory::InMemoryRecordStore;
use sensorboard_app::ports::RecordStore;
use sensorboard_app::services::record_service::RecordService;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match config.storage.backend {
        Backend::DynamoDb => {
            let dynamodb = &config.storage.dynamodb;
            tracing::info!(
                table = %dynamodb.table,
                region = %dynamodb.region,
                follow_pages = dynamodb.follow_pages,
                "using dynamodb item store"
            );
            let store = sensorboard_adapter_storage_dynamodb::Config {
                table_name: dynamodb.table.clone(),
                region: dynamodb.region.clone(),
                endpoint_url: dynamodb.endpoint_url.clone(),
                follow_pages: dynamodb.follow_pages,
            }
            .build()
            .await;
            serve(&config, store).await
        }
        Backend::Memory => {
            let store = match &config.storage.memory.seed_path {
                Some(path) => InMemoryRecordStore::from_json_file(path)
                    .with_context(|| format!("failed to seed store from {}", path.display()))?,
                None => InMemoryRecordStore::default(),
            };
            tracing::info!(records = store.len(), "using in-memory item store");
            serve(&config, store).await
        }
    }
}

async fn serve<S>(config: &Config, store: S) -> anyhow::Result<()>
where
    S: RecordStore + Send + Sync + 'static,
{
    let state = AppState::new(RecordService::new(store));
    let app = sensorboard_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(backend = %config.storage.backend, "sensorboardd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("sensorboardd stopped");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
