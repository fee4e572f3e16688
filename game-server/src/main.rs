use anyhow::{Context, Result};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use game_core::{DailyLimiter, WordList};
use game_persistence::{KeyValueStore, MemoryStore, SqliteStore};
use game_server::{config::Config, create_routes, game_manager::GameManager};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Word Craft server...");

    let config = Config::new()?;

    let word_list = match &config.words_file {
        Some(path) => {
            info!("Loading words from file: {}", path);
            WordList::from_file(path)?
        }
        None => WordList::default(),
    };
    info!("Word list ready with {} words", word_list.len());

    // Initialize storage; SQLite migrations run on connect
    let store: Arc<dyn KeyValueStore> = if config.uses_memory_store() {
        info!("Using in-memory storage, results will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        let store = SqliteStore::connect(&config.database_url)
            .await
            .with_context(|| format!("Failed to open database {}", config.database_url))?;
        Arc::new(store)
    };

    let game_manager = Arc::new(
        GameManager::new(store, word_list)
            .with_limiter(DailyLimiter::new_with_limit(config.daily_game_limit))
            .with_evaluation_mode(config.evaluation_mode),
    );

    let routes = create_routes(game_manager);

    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST {}", config.host))?;

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown((host, config.port), shutdown_signal())
        .context("Failed to bind server address")?;

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");

    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use signal::unix::{SignalKind, signal as unix_signal};

        let (Ok(mut sigint), Ok(mut sigterm)) = (
            unix_signal(SignalKind::interrupt()),
            unix_signal(SignalKind::terminate()),
        ) else {
            tracing::error!("Failed to install signal handlers, falling back to Ctrl+C");
            let _ = signal::ctrl_c().await;
            return;
        };

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {}", err);
        }
        info!("Received Ctrl+C, shutting down gracefully...");
    }
}
