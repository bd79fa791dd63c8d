use rack_api::error::MainError;
use rack_api::state::AppState;
use rack_core::session::ingest_feed;
use shared::error::InitializationError;
use shared::{init_tracing, load_config, shutdown_listener};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), MainError> {
    init_tracing()?;
    let config = load_config().map_err(InitializationError::from)?;

    let timeout = Duration::from_secs(config.feed.timeout_seconds);
    let http_client = reqwest::Client::builder().timeout(timeout).build()?;

    let state = AppState::default();

    // Single attempt; the session stays Failed if this does not succeed.
    let ingest_state = state.clone();
    let feed_url = config.feed.url.clone();
    info!(
        url = %feed_url,
        timeout = %humantime::format_duration(timeout),
        "fetching rack feed"
    );
    tokio::spawn(async move {
        let result = ingest_feed(&http_client, &feed_url).await;
        ingest_state.session.write().complete(result);
    });

    let shutdown_token = CancellationToken::new();
    let signal_handle = tokio::spawn(shutdown_listener(Some(shutdown_token.clone())));

    let listener = TcpListener::bind(&config.server.listen_addr).await?;
    info!(addr = %config.server.listen_addr, "starting rack api server");
    axum::serve(listener, rack_api::app(state))
        .with_graceful_shutdown(async move {
            shutdown_token.cancelled().await;
        })
        .await?;

    signal_handle.abort();
    Ok(())
}
