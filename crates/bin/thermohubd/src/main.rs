//! # thermohubd: thermohub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Construct the JSON file rule store (adapter) and its guarded handle
//! - Construct application services, injecting the store via the port trait
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use thermohub_adapter_http_axum::router;
use thermohub_adapter_http_axum::state::AppState;
use thermohub_app::services::rule_service::RuleService;
use thermohub_app::services::status_service::StatusService;
use thermohub_app::store::GuardedStore;
use thermohub_domain::schedule::ScheduleResolver;
use thermohub_domain::time;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let offset = time::utc_offset(config.schedule.utc_offset_hours)
        .context("UTC offset out of range")?;

    // Storage
    let rule_store = thermohub_adapter_storage_json::Config {
        rules_path: config.storage.rules_path.clone(),
    }
    .build();
    let store = Arc::new(GuardedStore::new(rule_store));

    // Services
    let rule_service = RuleService::new(Arc::clone(&store));
    let status_service = StatusService::new(store, ScheduleResolver::new(offset));

    // HTTP
    let app = router::build(AppState::new(rule_service, status_service));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(
        %bind_addr,
        rules = %config.storage.rules_path.display(),
        utc_offset_hours = config.schedule.utc_offset_hours,
        "thermohubd listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("thermohubd stopped");
    Ok(())
}

/// Resolve when SIGINT or (on unix) SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
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
                tracing::warn!(%err, "failed to listen for SIGTERM");
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
