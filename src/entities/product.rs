//! Product entity - One inventory snapshot of a logical product.
//!
//! Several rows may share the same logical `id`; each one records the
//! inventory level at the time it was written. `row_id` is the physical key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    /// Storage-assigned row identifier
    #[sea_orm(primary_key)]
    pub row_id: i64,
    /// Logical product identifier, shared by every snapshot of the product
    pub id: i64,
    /// Short product label (e.g., "green eggs")
    #[sea_orm(column_type = "String(StringLen::N(32))")]
    pub name: String,
    /// Units on hand when this snapshot was written
    pub inventory_level: i32,
    /// Seconds since the Unix epoch at which the row was last written
    pub timestamp: i64,
}

/// `Product` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
