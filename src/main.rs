use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use docvault::docvault_config::ServerConfig;
use docvault::docvault_db::{init_db_pool, run_migrations};
use docvault::logging::init_tracing;
use docvault::metrics::{init_metrics, metrics_router};
use docvault::router::init_router;
use docvault::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing().context("Failed to initialize tracing")?;

    let metrics_handle = init_metrics().context("Failed to install metrics recorder")?;

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let mut app = init_router(AppState::from_pool(pool));
    if let Some(handle) = metrics_handle {
        app = app.merge(metrics_router(handle));
    }

    let server_config = ServerConfig::from_env();
    let address = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "Server running");
    info!("Scalar UI available at http://{}/scalar", address);
    axum::serve(listener, app).await?;

    Ok(())
}
