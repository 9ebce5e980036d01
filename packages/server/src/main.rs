use std::sync::Arc;

use anyhow::Context;
use tracing::{Level, info};

use petclinic_server::cache::LruResponseCache;
use petclinic_server::config::AppConfig;
use petclinic_server::database::init_db;
use petclinic_server::seed::seed_pet_types;
use petclinic_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    seed_pet_types(&db)
        .await
        .context("Failed to seed pet types")?;

    let cache = Arc::new(LruResponseCache::new(config.cache.capacity));
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        db,
        config,
        cache,
    };
    let app = petclinic_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    info!("Swagger UI at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
