//! Router assembly and server lifecycle: routes, CORS, tracing and timeout
//! layers, graceful shutdown on Ctrl+C or SIGTERM.

use crate::auth::{AuthVerifier, NoAuth, StaticTokenAuth};
use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use pagecheck_core::data::Database;
use pagecheck_pipeline::Pipeline;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/check", post(routes::check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_secs)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP boundary until shutdown. Blocks the calling task.
pub async fn serve(config: ServerConfig, pipeline: Pipeline) -> anyhow::Result<()> {
    let database = match &config.database_path {
        Some(path) => Some(Database::new(path).map_err(anyhow::Error::from)?),
        None => None,
    };

    let auth: Arc<dyn AuthVerifier> = match &config.auth_token {
        Some(token) => Arc::new(StaticTokenAuth::new(token.clone(), "service")),
        None => Arc::new(NoAuth),
    };

    let state = AppState::new(pipeline, database, auth);
    let app = build_router(state, &config);
    let addr = config.socket_addr()?;

    tracing::info!(
        "Starting pagecheck server on {} (cors: {}, persistence: {})",
        addr,
        config.enable_cors,
        config.database_path.is_some()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
