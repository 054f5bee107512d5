//! Database configuration module.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! The `product` table is generated from the entity definition with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust model.

use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Default `SQLite` location, created on first connect.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://product.db?mode=rwc";

/// Establishes a connection to the database at `database_url`.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    info!("Database connection established.");
    Ok(db)
}

/// Creates the `product` table if it does not already exist.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    debug!("Product table ensured.");

    Ok(())
}

/// Resolves the file backing an `SQLite` URL.
///
/// Returns `None` for in-memory databases and for URLs of other backends.
#[must_use]
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Returns `database_url` with `mode=rwc` added when it names an `SQLite` file
/// without an explicit `mode`, so connecting creates a missing database file.
#[must_use]
pub fn with_create_mode(database_url: &str) -> String {
    if sqlite_file_path(database_url).is_none() {
        return database_url.to_string();
    }
    match database_url.split_once('?') {
        Some((_, query)) if query.split('&').any(|pair| pair.starts_with("mode=")) => {
            database_url.to_string()
        }
        Some(_) => format!("{database_url}&mode=rwc"),
        None => format!("{database_url}?mode=rwc"),
    }
}
