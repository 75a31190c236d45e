mod model;
mod server;

use std::net::SocketAddr;

use tokio::{net::TcpListener, signal};
use tracing_subscriber::{fmt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, scheduler::study_invites, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let _scheduler =
        study_invites::start_scheduler(db.clone(), config.meet_room_prefix.clone()).await?;

    let app = router::router(&config.app_url)?
        .with_state(AppState::new(db, http_client, oauth_client, &config))
        .layer(session);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Server running on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
