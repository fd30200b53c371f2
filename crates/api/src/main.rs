use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teamform_api::background;
use teamform_api::config::ServerConfig;
use teamform_api::router::build_app_router;
use teamform_api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "teamform_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    let pool = teamform_db::create_pool(&database_url).await?;
    tracing::info!("Database connection pool created");

    teamform_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    teamform_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // --- App state (includes the assignment engine) ---
    let state = AppState::new(pool, config.clone());
    tracing::info!(
        seeded = config.assignment.rng_seed.is_some(),
        theme_timeout_secs = config.assignment.theme_timeout_secs,
        "Group assignment engine ready"
    );

    // --- Scheduled batch ---
    let scheduler_cancel = CancellationToken::new();
    let scheduler_handle = config.assignment.batch_interval().map(|interval| {
        tokio::spawn(background::group_assignment::run(
            state.engine.clone(),
            interval,
            scheduler_cancel.clone(),
        ))
    });

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let host: IpAddr = config.host.parse()?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    scheduler_cancel.cancel();
    if let Some(handle) = scheduler_handle {
        let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
        tracing::info!("Group assignment scheduler stopped");
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
