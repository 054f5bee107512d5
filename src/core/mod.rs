//! Core business logic - framework-agnostic product operations.

/// Product CRUD operations with conflict checks and id allocation
pub mod product;
/// Wire payloads and their mapping onto the product entity
pub mod schema;
/// Sample data for a fresh database
pub mod seed;

pub use product::CreatePolicy;
pub use schema::ProductPayload;
