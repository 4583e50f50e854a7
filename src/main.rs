mod app;
mod config;
mod db;
mod error;
mod votes;

use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "picsfeed_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!(
        "Starting picsfeed API on port {} for front-end origin {:?}",
        config.port,
        config.frontend_origin
    );

    // Ensure the parent directory of a file-backed database exists
    if let Some(parent) = config
        .database_path()
        .and_then(|path| std::path::Path::new(path).parent())
    {
        std::fs::create_dir_all(parent)?;
    }

    let separator = if config.database_url.contains('?') { '&' } else { '?' };
    let db = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&format!("{}{}mode=rwc", config.database_url, separator))
        .await?;

    db::init_db(&db).await?;
    tracing::info!("Database initialized at {}", config.database_url);

    let seeded = db::seed_images(&db).await?;
    if seeded > 0 {
        tracing::info!("Seeded {} images", seeded);
    } else {
        tracing::info!("Image catalog already present, skipping seed");
    }

    let state = Arc::new(app::AppState {
        config: config.clone(),
        db,
    });

    let app = app::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!("Server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, app)
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
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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
}
