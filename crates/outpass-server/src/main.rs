//! E-Outpass Server — Application entry point.

mod api;
mod config;

use std::sync::Arc;

use outpass_db::DbManager;
use outpass_db::repository::{SurrealOutpassRequestRepository, SurrealUserRepository};
use outpass_notify::LogNotifier;
use outpass_workflow::{TransitionService, WorkflowConfig};
use tracing_subscriber::EnvFilter;

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("outpass=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting E-Outpass server...");

    if let Err(err) = run(ServerConfig::from_env()).await {
        tracing::error!(error = %err, "E-Outpass server terminated");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let manager = DbManager::connect(&config.db).await?;
    outpass_db::run_migrations(manager.client()).await?;

    let requests = SurrealOutpassRequestRepository::new(manager.client().clone());
    let users = SurrealUserRepository::new(manager.client().clone());
    let service = TransitionService::new(
        requests.clone(),
        users,
        LogNotifier,
        WorkflowConfig {
            notify_timeout: config.notify_timeout,
        },
    );
    let state = Arc::new(AppState { service, requests });

    api::run_server(&config.listen_addr, state).await
}
