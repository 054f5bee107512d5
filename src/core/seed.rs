//! Sample data for a fresh product database.
//!
//! Seeding writes [`SEED_ROUNDS`] snapshots for each of [`PRODUCT_NAMES`].
//! Each name's logical id is its position in the list, and every snapshot
//! gets a random inventory level in [`INVENTORY_RANGE`]. Everything is
//! committed in one transaction.

use crate::{
    core::schema::{ProductPayload, now_timestamp},
    errors::Result,
};
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait, prelude::*};
use std::ops::RangeInclusive;
use tracing::info;

/// Product names written by the seed, in logical id order
pub const PRODUCT_NAMES: [&str; 7] = ["foo", "bar", "baz", "foobar", "green eggs", "ham", "spam"];

/// Number of snapshots written per product
pub const SEED_ROUNDS: usize = 9;

/// Inclusive range of random inventory levels
pub const INVENTORY_RANGE: RangeInclusive<i32> = 1..=101;

/// Inserts the sample snapshots, returning how many rows were written.
pub async fn seed_products<R: Rng>(db: &DatabaseConnection, rng: &mut R) -> Result<usize> {
    let txn = db.begin().await?;
    let mut written = 0;

    for _ in 0..SEED_ROUNDS {
        for (id, name) in (0_i64..).zip(PRODUCT_NAMES) {
            let inventory_level = rng.gen_range(INVENTORY_RANGE);
            ProductPayload::with_id(id, name, inventory_level)
                .validate()?
                .into_active_model(id, now_timestamp())
                .insert(&txn)
                .await?;
            written += 1;
        }
    }

    txn.commit().await?;
    info!(
        "Seeded {} snapshots for {} products.",
        written,
        PRODUCT_NAMES.len()
    );
    Ok(written)
}
