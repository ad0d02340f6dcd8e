use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use tickets::logging::init_tracing;
use tickets::metrics::{init_metrics, metrics_app};
use tickets::router::init_router;
use tickets::state::AppState;
use tickets_config::AppConfig;
use tickets_db::{init_db_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = AppConfig::from_env().context("Invalid configuration")?;
    init_tracing(&config.server.log_dir).context("Failed to initialize tracing")?;

    let db = init_db_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    if config.server.run_migrations {
        run_migrations(&db).await.context("Failed to run migrations")?;
    }

    let metrics_handle =
        init_metrics(config.server.metrics_enabled).context("Failed to install metrics recorder")?;

    let state = AppState::new(db, config.jwt, config.cors, &config.rate_limit);
    if let Some(throttle) = &state.login_throttle {
        throttle.spawn_cleanup(Duration::from_secs(60));
    }

    let mut app = init_router(state);
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_app(handle));
    }

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(%address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
