mod model;
mod server;

use std::{future::IntoFuture, io, time::Duration};

use tokio::{sync::oneshot, task::JoinError};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenService, startup,
    state::AppState,
};

/// Time in-flight requests get to finish after a shutdown signal.
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(5);

const DEFAULT_LOG_FILTER: &str = "roster=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let db = startup::connect_to_database(&config).await?;
    startup::seed_database(&db, &config).await?;

    if config.jwt_static_token.is_some() {
        tracing::warn!("Static admin token is enabled");
    }

    let state = AppState::new(
        db.clone(),
        TokenService::new(config.jwt_secret.clone(), config.jwt_expiration_minutes),
        config.jwt_static_token.clone(),
        config.max_shifts_per_week,
    );

    let listener = tokio::net::TcpListener::bind(&config.app_address).await?;
    tracing::info!("Starting server on {}", config.app_address);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server = axum::serve(listener, router::router(state))
        .with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        })
        .into_future();
    let mut server = tokio::spawn(server);

    tokio::select! {
        result = &mut server => log_server_exit(result),
        _ = startup::shutdown_signal() => {
            let _ = shutdown_tx.send(());

            match tokio::time::timeout(SHUTDOWN_GRACE_PERIOD, &mut server).await {
                Ok(result) => log_server_exit(result),
                Err(_) => {
                    tracing::warn!(
                        "In-flight requests did not finish within {:?}, aborting",
                        SHUTDOWN_GRACE_PERIOD
                    );
                    server.abort();
                }
            }
        }
    }

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}

fn log_server_exit(result: Result<io::Result<()>, JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Server error: {}", e),
        Err(e) => tracing::error!("Server task failed: {}", e),
    }
}
