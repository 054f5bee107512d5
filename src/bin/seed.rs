//! Rebuilds the product database from scratch and fills it with sample snapshots.

use dotenvy::dotenv;
use product_inventory::{
    config::{self, database},
    core::seed,
    errors::Result,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    dotenv().ok();

    let settings = config::load_settings()?;
    // The file is removed below, so the connection must be allowed to recreate it
    let database_url = database::with_create_mode(&settings.database_url);

    match database::sqlite_file_path(&database_url) {
        Some(path) if path.exists() => {
            info!("Removing existing database file {}", path.display());
            std::fs::remove_file(&path)?;
        }
        Some(_) => {}
        None => warn!("Database URL does not name an SQLite file; nothing removed"),
    }

    let db = database::create_connection(&database_url).await?;
    database::create_tables(&db).await?;

    let written = seed::seed_products(&db, &mut rand::thread_rng()).await?;
    info!("Database seeded with {} rows.", written);
    Ok(())
}
