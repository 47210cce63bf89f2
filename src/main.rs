use std::sync::Arc;

use chrono::Local;
use dlebot::{
    router, AppState, ChannelHub, Config, DailyScheduler, JsonFileScoreRepository,
    ScoreboardService,
};
use tokio::sync::watch;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dlebot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(?config, "Starting -dle score bot");

    let repository = Arc::new(JsonFileScoreRepository::new(&config.data_file));
    info!(path = %repository.path().display(), "Using score file");
    let service = Arc::new(ScoreboardService::builder(repository).load().await);
    let hub = Arc::new(ChannelHub::new());
    let app_state = AppState::new(service.clone(), hub.clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let daily_task = config.summary_channel.clone().map(|channel| {
        let scheduler = DailyScheduler::new(service.clone(), hub.clone(), channel, Local);
        tokio::spawn(scheduler.run(shutdown_rx))
    });
    if daily_task.is_none() {
        info!("DLEBOT_SUMMARY_CHANNEL not set, daily summary disabled");
    }

    let app = router(app_state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!(error = %err, "Failed to listen for shutdown signal");
            }
            info!("Shutdown requested");
        })
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(task) = daily_task {
        let _ = task.await;
    }

    if let Err(err) = service.flush().await {
        error!(error = %err, "Failed to flush scores on shutdown");
        return Err(err.into());
    }

    info!("Shutdown complete");
    Ok(())
}
