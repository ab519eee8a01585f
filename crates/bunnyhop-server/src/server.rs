//! HTTP server lifecycle

use axum::{serve, Router};
use bunnyhop_commands::CommandManager;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::ServerConfig,
    error::{ServerError, ServerResult},
    routes::app_routes,
    state::AppState,
};

/// Keyword redirect server
pub struct BunnyhopServer {
    config: ServerConfig,
    state: AppState,
}

impl BunnyhopServer {
    /// Load the command table named by the config and prepare the server
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let manager = CommandManager::from_file(&config.commands_path)?;
        info!(
            path = %config.commands_path.display(),
            commands = manager.table().len(),
            "loaded command table"
        );
        Self::with_manager(config, manager)
    }

    /// Prepare the server around an existing command manager
    pub fn with_manager(config: ServerConfig, manager: CommandManager) -> ServerResult<Self> {
        let state = AppState::new(manager)?;
        Ok(Self { config, state })
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router
    pub fn router(&self) -> Router {
        app_routes(self.state.clone())
    }

    /// Listen and serve until Ctrl-C
    pub async fn start(&self) -> ServerResult<()> {
        info!(address = %self.config.bind_addr, "starting bunnyhop server");
        let listener = TcpListener::bind(self.config.bind_addr)
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))?;

        serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| ServerError::Internal(err.to_string()))
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
