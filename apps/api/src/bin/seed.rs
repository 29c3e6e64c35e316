//! Seed the Discotheque database with the demo catalog
//!
//! Existing catalog rows are deleted first.

use anyhow::Context;
use discotheque_api::{config::Config, seed};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discotheque_api=info,discotheque_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.connect_timeout_secs,
        ))
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations completed successfully");

    let summary = seed::seed(&pool).await?;

    tracing::info!(
        artists = summary.artists,
        albums = summary.albums,
        musiques = summary.musiques,
        users = summary.users,
        playlists = summary.playlists,
        playlist_entries = summary.playlist_entries,
        "Database seeded"
    );

    pool.close().await;
    Ok(())
}
