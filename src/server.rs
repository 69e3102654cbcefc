//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, service wiring, and Axum server lifecycle.

use crate::application::services::CredentialService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{AccountRepository, LinkRepository};
use crate::infrastructure::memory::{MemoryAccountRepository, MemoryLinkRepository};
use crate::infrastructure::persistence::{PgAccountRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

type Repositories = (Arc<dyn LinkRepository>, Arc<dyn AccountRepository>);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool with migrations, or in-memory maps)
/// - Credential service from the signing secret
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (link_repository, account_repository) = build_repositories(&config).await?;

    let credentials = Arc::new(CredentialService::new(
        &config.token_signing_secret,
        chrono::Duration::hours(config.token_ttl_hours),
    ));

    let state = AppState::new(
        link_repository,
        account_repository,
        credentials,
        config.trusted_identity_header_name(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connects the configured storage backend.
async fn build_repositories(config: &Config) -> Result<Repositories> {
    match (config.storage_backend, &config.database_url) {
        (StorageBackend::Postgres, Some(database_url)) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            let pool = Arc::new(pool);
            let links: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(pool.clone()));
            let accounts: Arc<dyn AccountRepository> = Arc::new(PgAccountRepository::new(pool));
            Ok((links, accounts))
        }
        (StorageBackend::Postgres, None) => {
            anyhow::bail!("DATABASE_URL must be set for the postgres storage backend")
        }
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let links: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
            let accounts: Arc<dyn AccountRepository> = Arc::new(MemoryAccountRepository::new());
            Ok((links, accounts))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
