//! rolodex-api server binary.

use anyhow::Context;
use rolodex_api::logging::{self, LogSettings};
use rolodex_api::{router, ApiConfig, AppState};
use rolodex_db::{Database, PoolConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let log_settings = LogSettings::from_env();
    let _file_guard = logging::init(&log_settings);
    info!(
        log_format = if log_settings.json { "json" } else { "text" },
        log_file = log_settings.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let addr = config.bind_addr()?;

    let pool_config = PoolConfig::new().max_connections(config.max_connections);
    let db = Database::connect_with_config(&config.database_url, pool_config)
        .await
        .context("failed to connect to the database")?;
    info!(max_connections = config.max_connections, "Database pool ready");

    if config.run_migrations {
        db.migrate().await.context("failed to run migrations")?;
        info!("Migrations applied");
    }

    let app = router(AppState::new(db.clone()), &config);

    info!(%addr, "Starting rolodex-api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.pool().close().await;
    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
