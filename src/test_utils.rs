//! Shared test utilities.
//!
//! This module provides helpers for setting up in-memory test databases and
//! inserting product snapshots with controlled timestamps.

use crate::{entities::product, errors::Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, NotSet, Set};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with the product table initialized.
/// Test tracing is installed on the way.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Inserts a snapshot directly, bypassing the service so `timestamp` can be chosen.
pub async fn insert_snapshot(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    inventory_level: i32,
    timestamp: i64,
) -> Result<product::Model> {
    product::ActiveModel {
        row_id: NotSet,
        id: Set(id),
        name: Set(name.to_string()),
        inventory_level: Set(inventory_level),
        timestamp: Set(timestamp),
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
