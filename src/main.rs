use std::net::SocketAddr;
use std::sync::Arc;

use safeurl::config::Config;
use safeurl::server::{create_router, AppState};
use safeurl::verdict::{ChatClassifier, VerdictService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safeurl=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  endpoint: {}", config.api_url);
    tracing::info!("  model: {}", config.model);
    tracing::info!("  timeout: {:?}", config.timeout);
    tracing::info!("  port: {}", config.port);

    let classifier = ChatClassifier::new(&config)?;
    let service = Arc::new(VerdictService::new(Box::new(classifier)));
    let app = create_router(AppState { service });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
