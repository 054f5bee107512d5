//! Wire representation of a product and its mapping onto the entity.
//!
//! Outbound rows are serialized straight from [`product::Model`]. Inbound
//! bodies arrive as [`ProductPayload`], where every field is optional so that
//! presence can be checked explicitly and reported as `InvalidInput`.

use crate::{
    entities::product,
    errors::{Error, Result},
};
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

/// Incoming product body for create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Logical id; create allocates one when absent, update ignores it
    #[serde(default)]
    pub id: Option<i64>,
    /// Product label, required
    #[serde(default)]
    pub name: Option<String>,
    /// Units on hand, required
    #[serde(default)]
    pub inventory_level: Option<i32>,
}

/// A payload whose required fields have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    /// Logical id, if the caller supplied one
    pub id: Option<i64>,
    /// Product label
    pub name: String,
    /// Units on hand
    pub inventory_level: i32,
}

impl ProductPayload {
    /// Builds a payload carrying an explicit logical id.
    #[must_use]
    pub fn with_id(id: i64, name: &str, inventory_level: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, inventory_level)
        }
    }

    /// Builds a payload without a logical id.
    #[must_use]
    pub fn new(name: &str, inventory_level: i32) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            inventory_level: Some(inventory_level),
        }
    }

    /// Checks that `name` and `inventory_level` are present.
    pub fn validate(self) -> Result<ValidProduct> {
        let name = self.name.ok_or(Error::InvalidInput { field: "name" })?;
        let inventory_level = self.inventory_level.ok_or(Error::InvalidInput {
            field: "inventory_level",
        })?;
        Ok(ValidProduct {
            id: self.id,
            name,
            inventory_level,
        })
    }
}

impl ValidProduct {
    /// Converts into a new row under logical id `id`, stamped with `timestamp`.
    #[must_use]
    pub fn into_active_model(self, id: i64, timestamp: i64) -> product::ActiveModel {
        product::ActiveModel {
            row_id: NotSet,
            id: Set(id),
            name: Set(self.name),
            inventory_level: Set(self.inventory_level),
            timestamp: Set(timestamp),
        }
    }
}

/// Current time in whole seconds since the Unix epoch.
#[must_use]
pub fn now_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_deserialize_without_id() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name": "foo", "inventory_level": 5}"#).unwrap();
        assert_eq!(payload, ProductPayload::new("foo", 5));
    }

    #[test]
    fn test_validate_reports_missing_name() {
        let payload: ProductPayload = serde_json::from_str(r#"{"inventory_level": 5}"#).unwrap();
        assert!(matches!(
            payload.validate(),
            Err(Error::InvalidInput { field: "name" })
        ));
    }

    #[test]
    fn test_validate_reports_missing_inventory_level() {
        let payload: ProductPayload = serde_json::from_str(r#"{"name": "ham"}"#).unwrap();
        assert!(matches!(
            payload.validate(),
            Err(Error::InvalidInput {
                field: "inventory_level"
            })
        ));
    }

    #[test]
    fn test_into_active_model_sets_fields() {
        let valid = ProductPayload::with_id(3, "spam", 12).validate().unwrap();
        let model = valid.into_active_model(7, 1_700_000_000);
        assert!(model.row_id.is_not_set());
        assert_eq!(model.id, Set(7));
        assert_eq!(model.name, Set("spam".to_string()));
        assert_eq!(model.inventory_level, Set(12));
        assert_eq!(model.timestamp, Set(1_700_000_000));
    }

    #[test]
    fn test_model_serializes_all_columns() {
        let model = product::Model {
            row_id: 1,
            id: 2,
            name: "bar".to_string(),
            inventory_level: 40,
            timestamp: 1_700_000_000,
        };
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "row_id": 1,
                "id": 2,
                "name": "bar",
                "inventory_level": 40,
                "timestamp": 1_700_000_000
            })
        );
    }
}
