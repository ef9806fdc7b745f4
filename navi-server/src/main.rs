use navi_server::cache::CachedNetworkSource;
use navi_server::config::ServerConfig;
use navi_server::network::{FixtureNetwork, NetworkClient, NetworkSource};
use navi_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("navi_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Local fixtures take precedence over the remote provider
    let source = match &config.fixtures_dir {
        Some(dir) => NetworkSource::Fixture(FixtureNetwork::new(dir)),
        None => NetworkSource::Remote(
            NetworkClient::new(config.network_client()).expect("Failed to create network client"),
        ),
    };

    let networks = CachedNetworkSource::new(source, &config.cache());
    info!(source = %networks.source().describe(), "network source");
    if let NetworkSource::Fixture(fixture) = networks.source() {
        match fixture.worlds().await {
            Ok(worlds) => info!(?worlds, "fixture worlds"),
            Err(e) => warn!("Failed to list fixture worlds: {}", e),
        }
    }
    let state = AppState::new(networks);
    let app = create_router(state, &config.static_dir);

    info!("Navi listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /health                           - Health check");
    info!("  GET  /api/stations?world=              - Stations and lines");
    info!("  GET  /api/route?world=&from=&to=       - Plan a route");
    info!("  GET  /gv?world=&adj=lines              - GraphViz export");

    let listener = tokio::net::TcpListener::bind(config.addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
