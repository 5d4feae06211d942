use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rollcall::config::Config;
use rollcall::router::{RollcallState, rollcall_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// In-flight requests get this long to drain after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let storage = rollcall::db::spawn(&cfg.database_url()).await?;
    info!(
        env = %cfg.env,
        storage_path = %cfg.storage_path,
        "storage initialized"
    );

    let state = RollcallState::new(storage);
    let app = rollcall_router(state);

    let listener = TcpListener::bind(&cfg.http_server.address).await?;
    info!("HTTP server listening on {}", cfg.http_server.address);

    let graceful = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        info!("shutdown signal received, draining in-flight requests");
    });

    tokio::select! {
        result = graceful => result?,
        _ = async {
            shutdown_signal().await;
            tokio::time::sleep(SHUTDOWN_GRACE).await;
        } => {
            warn!(
                grace_secs = SHUTDOWN_GRACE.as_secs(),
                "grace period elapsed, aborting remaining requests"
            );
        }
    }

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
