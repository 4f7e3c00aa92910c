use bikeshare_map::app::MapApp;
use bikeshare_map::config::AppConfig;
use bikeshare_map::feed::{FeedSource, GbfsClient, StaticFeed};
use bikeshare_map::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bikeshare_map=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // Pick the feed: saved documents if configured, otherwise the live provider
    let feed = match &config.fixture_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving station data from fixtures");
            FeedSource::Fixture(StaticFeed::from_dir(dir).expect("Failed to load fixtures"))
        }
        None => {
            info!(base_url = %config.feed.base_url, "using live GBFS feed");
            let client =
                GbfsClient::new(config.feed.clone()).expect("Failed to create GBFS client");
            FeedSource::Live(client)
        }
    };

    let app = MapApp::new(feed);

    // Warm up so the first page load already has stations. A failure here
    // is not fatal: the page shows the notice and the user can retry.
    match app.refresh().await {
        Ok(applied) => info!(?applied, "initial stations loaded"),
        Err(e) => warn!(error = %e, "initial station load failed"),
    }

    let state = AppState::new(app, config.map.clone());
    let router = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    info!("Bike-share map listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                - Health check");
    info!("  GET  /api/map               - Current map");
    info!("  POST /api/refresh           - Re-fetch stations");
    info!("  POST /api/filter/toggle     - Bikes / docks");
    info!("  POST /api/dark-mode/toggle  - Light / dark map");
    info!("  POST /api/help/toggle       - Help panel");
    info!("  POST /api/locate            - Mark user position");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, router).await.expect("Server error");
}
