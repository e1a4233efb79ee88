use anyhow::Context;
use std::sync::Arc;
use tickerboard::config::Config;
use tickerboard::feed::FeedClient;
use tickerboard::services::{Reconciler, SeriesStore};
use tickerboard::{tui, AppState};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing to a file; stdout belongs to the TUI.
fn init_tracing(log_file: &str) -> anyhow::Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("failed to create log file {log_file}"))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickerboard=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Arc::new(Config::from_env());
    init_tracing(&config.log_file)?;
    info!(broker = %config.broker_url, topic = %config.topic, "starting tickerboard");

    let store = SeriesStore::new();
    let reconciler = Reconciler::new(store.clone());

    // Start the feed client
    let (batch_tx, mut batch_rx) = mpsc::unbounded_channel();
    let feed = FeedClient::new(config.clone(), batch_tx);
    let connection = feed.connection();
    tokio::spawn(async move {
        feed.run().await;
    });

    // Single writer: every store and tile mutation happens on this task, in
    // batch arrival order.
    {
        let reconciler = reconciler.clone();
        tokio::spawn(async move {
            while let Some(batch) = batch_rx.recv().await {
                reconciler.apply_batch(&batch);
            }
        });
    }

    // Create application state and run the TUI
    let state = AppState {
        config,
        store,
        reconciler,
        connection,
    };
    tui::run_tui(Arc::new(state)).await?;

    info!("tickerboard exited");
    Ok(())
}
