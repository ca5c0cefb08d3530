use std::sync::Arc;

use anagrams::{app_state::AppState, config::Config, dictionary::Dictionary, router::create_router};
use axum::Server;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anagrams=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    let dictionary = Dictionary::load(&config.words).await.map_err(|e| {
        tracing::error!("{e}");
        e
    })?;
    tracing::info!("Loaded {} words from {}.", dictionary.len(), &config.words);

    let app = create_router(Arc::new(AppState { dictionary }));

    let addr = config.addr();
    tracing::debug!("Listening on {}", addr);
    Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down.");
}
