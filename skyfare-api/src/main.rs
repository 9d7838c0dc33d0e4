use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use skyfare_api::{app, config::Config, AppState};
use skyfare_engine::SearchEngine;
use skyfare_providers::{Blackstone, FlyOne};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyfare_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Skyfare API on port {}", config.server.port);

    let engine = SearchEngine::new()
        .with_timeout(Duration::from_millis(config.search.provider_timeout_ms))
        .register(Arc::new(FlyOne))
        .register(Arc::new(Blackstone));

    let state = AppState {
        engine: Arc::new(engine),
    };
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
