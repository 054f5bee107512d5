//! HTTP layer - axum router, handlers, and error responses
//!
//! This module exposes the product operations as a REST resource under `/api`.

/// Request handlers for the product resource
pub mod handlers;
/// Conversion of service errors into HTTP responses
pub mod response;
/// Route table
pub mod router;

use crate::core::CreatePolicy;
use sea_orm::DatabaseConnection;

pub use router::create_router;

/// Shared state available to every handler.
/// Holds the connection pool each request draws its storage context from.
#[derive(Clone, Debug)]
pub struct ApiState {
    /// Database connection pool
    pub database: DatabaseConnection,
    /// Duplicate handling for create
    pub create_policy: CreatePolicy,
}

impl ApiState {
    /// Creates a new `ApiState` from a connection and create policy.
    #[must_use]
    pub const fn new(database: DatabaseConnection, create_policy: CreatePolicy) -> Self {
        Self {
            database,
            create_policy,
        }
    }
}
