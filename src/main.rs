//! Service entry point: config, tracing, pool, migrations, serve.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use venue_events::api::rest::{create_router, AppState};
use venue_events::application::store::EventVenueStore;
use venue_events::config::Settings;
use venue_events::infrastructure::persistence::PostgresCatalogRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load().context("loading configuration")?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await
        .context("connecting to PostgreSQL")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("running migrations")?;

    let repository = Arc::new(PostgresCatalogRepository::new(pool));
    let state = AppState::new(EventVenueStore::new(repository));
    let router = create_router(state);

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, "venue-events listening");
    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
