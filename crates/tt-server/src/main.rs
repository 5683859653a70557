//! TicketTrack RS server binary.
//!
//! Wires configuration, the database pool, session storage, and the HTTP
//! routes together and runs the server until a shutdown signal arrives.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tt_api::AppState;
use tt_auth::{MemorySessionStore, SessionPrincipalResolver};
use tt_core::config::AppConfig;
use tt_db::{Database, DatabaseConfig, PgTicketRepository, TicketRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting TicketTrack RS"
    );

    let db_config = DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        connect_timeout_secs: config.database.connect_timeout_secs,
        ..DatabaseConfig::default()
    };
    let db = Database::connect(&db_config).await?;
    info!("Connected to database");

    let repo: Arc<dyn TicketRepository> = Arc::new(PgTicketRepository::new(db.pool().clone()));
    let session_store = Arc::new(MemorySessionStore::new());
    let resolver = Arc::new(SessionPrincipalResolver::new(session_store, repo.clone()));

    let state = AppState::new(config.clone(), repo, resolver);
    let app = tt_api::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tt_server=debug,tt_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
