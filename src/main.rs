use anyhow::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

use replybot_backend::config::Config;
use replybot_backend::routes;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env()?;

    // All origins allowed on all routes.
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().layer(cors);

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    info!("replybot listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
