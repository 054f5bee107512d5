//! Product business logic - Handles the five REST operations on product snapshots.
//!
//! Each function receives the storage context explicitly and never caches rows
//! between calls. Writes run inside a single `SeaORM` transaction: the changes
//! become visible on `commit()`, and a transaction dropped on an early error
//! return is rolled back. Lookups by identifier always filter on the logical
//! `id` column, and when a product has several snapshots the newest one wins.

use crate::{
    core::schema::{ProductPayload, now_timestamp},
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{
    ConnectionTrait, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*,
    sea_query::Expr,
};
use tracing::{debug, info, instrument, warn};

/// Logical id handed out by create when the store holds no rows.
pub const FIRST_PRODUCT_ID: i64 = 1;

/// Controls how create treats a product that duplicates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePolicy {
    /// Accept a new row even if another row already has the same name and
    /// inventory level. Several snapshots of one product routinely collide
    /// this way, so the flag is on unless configured otherwise.
    pub allow_duplicate_snapshots: bool,
}

impl Default for CreatePolicy {
    fn default() -> Self {
        Self {
            allow_duplicate_snapshots: true,
        }
    }
}

/// Retrieves all rows ordered by logical id, newest snapshot first within each id.
pub async fn read_all(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find()
        .order_by_asc(product::Column::Id)
        .order_by_desc(product::Column::Timestamp)
        .order_by_desc(product::Column::RowId)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the newest snapshot of the product with logical id `product_id`.
///
/// # Errors
/// Returns `Error::NotFound` if no row carries that id.
#[instrument(skip(db))]
pub async fn read_one(db: &DatabaseConnection, product_id: i64) -> Result<product::Model> {
    find_latest(db, product_id)
        .await?
        .ok_or(Error::NotFound { product_id })
}

/// Creates a new product snapshot.
///
/// When the payload has no `id`, the product gets the next free logical id
/// (`max(id) + 1`, or [`FIRST_PRODUCT_ID`] on an empty store).
///
/// # Errors
/// Returns an error if:
/// - `name` or `inventory_level` is missing
/// - duplicates are disallowed by `policy` and another row has the same name and inventory level
/// - no `id` was given and the largest existing id is `i64::MAX`
/// - the database insert fails
#[instrument(skip(db))]
pub async fn create(
    db: &DatabaseConnection,
    payload: ProductPayload,
    policy: CreatePolicy,
) -> Result<product::Model> {
    let product = payload.validate()?;

    let txn = db.begin().await?;

    if !policy.allow_duplicate_snapshots
        && find_duplicate(&txn, &product.name, product.inventory_level, None)
            .await?
            .is_some()
    {
        warn!(
            "Rejecting duplicate product {} {}",
            product.name, product.inventory_level
        );
        return Err(Error::Conflict {
            name: product.name,
            inventory_level: product.inventory_level,
        });
    }

    let id = match product.id {
        Some(id) => id,
        None => next_product_id(&txn).await?,
    };

    let created = product
        .into_active_model(id, now_timestamp())
        .insert(&txn)
        .await?;
    txn.commit().await?;

    info!(
        "Created product '{}' (id: {}, row_id: {}) with inventory level {}",
        created.name, created.id, created.row_id, created.inventory_level
    );
    Ok(created)
}

/// Replaces the newest snapshot of `product_id` with the payload's values.
///
/// The payload's `id`, if any, is ignored: the row keeps `product_id`.
/// The returned model is the state after the update.
///
/// # Errors
/// Returns an error if:
/// - `name` or `inventory_level` is missing
/// - no row carries `product_id`
/// - a product with a different id already has the new name and inventory level
/// - the database update fails
#[instrument(skip(db))]
pub async fn update(
    db: &DatabaseConnection,
    product_id: i64,
    payload: ProductPayload,
) -> Result<product::Model> {
    let product = payload.validate()?;

    let txn = db.begin().await?;

    let target = find_latest(&txn, product_id)
        .await?
        .ok_or(Error::NotFound { product_id })?;

    if let Some(existing) = find_duplicate(
        &txn,
        &product.name,
        product.inventory_level,
        Some(product_id),
    )
    .await?
    {
        warn!(
            "Update of product {} collides with product {}",
            product_id, existing.id
        );
        return Err(Error::Conflict {
            name: product.name,
            inventory_level: product.inventory_level,
        });
    }

    let mut active: product::ActiveModel = target.into();
    active.id = Set(product_id);
    active.name = Set(product.name);
    active.inventory_level = Set(product.inventory_level);
    active.timestamp = Set(now_timestamp());

    let updated = active.update(&txn).await?;
    txn.commit().await?;

    info!(
        "Updated product {} (row_id: {}) to '{}' with inventory level {}",
        updated.id, updated.row_id, updated.name, updated.inventory_level
    );
    Ok(updated)
}

/// Deletes every snapshot of `product_id`, returning how many rows were removed.
///
/// # Errors
/// Returns `Error::NotFound` if no row carries that id.
#[instrument(skip(db))]
pub async fn delete(db: &DatabaseConnection, product_id: i64) -> Result<u64> {
    let txn = db.begin().await?;

    let removed = Product::delete_many()
        .filter(product::Column::Id.eq(product_id))
        .exec(&txn)
        .await?
        .rows_affected;

    if removed == 0 {
        return Err(Error::NotFound { product_id });
    }

    txn.commit().await?;
    info!("Deleted product {} ({} snapshots)", product_id, removed);
    Ok(removed)
}

async fn find_latest<C: ConnectionTrait>(
    conn: &C,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Id.eq(product_id))
        .order_by_desc(product::Column::Timestamp)
        .order_by_desc(product::Column::RowId)
        .one(conn)
        .await
        .map_err(Into::into)
}

async fn find_duplicate<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    inventory_level: i32,
    excluding_id: Option<i64>,
) -> Result<Option<product::Model>> {
    let mut query = Product::find()
        .filter(product::Column::Name.eq(name))
        .filter(product::Column::InventoryLevel.eq(inventory_level));
    if let Some(id) = excluding_id {
        query = query.filter(product::Column::Id.ne(id));
    }
    query.one(conn).await.map_err(Into::into)
}

async fn next_product_id<C: ConnectionTrait>(conn: &C) -> Result<i64> {
    let max_id: Option<i64> = Product::find()
        .select_only()
        .column_as(Expr::col(product::Column::Id).max(), "max_id")
        .into_tuple::<Option<i64>>()
        .one(conn)
        .await?
        .flatten();

    let next = match max_id {
        None => FIRST_PRODUCT_ID,
        Some(max) => max.checked_add(1).ok_or(Error::IdExhausted { max_id: max })?,
    };
    debug!("Allocated product id {} (previous max: {:?})", next, max_id);
    Ok(next)
}
