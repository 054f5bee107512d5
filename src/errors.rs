//! Unified error type for the product service.
//!
//! Every failure a request can hit is one variant here. The HTTP layer maps
//! variants to status codes through [`Error::status_code`].

use axum::http::StatusCode;
use thiserror::Error;

/// Errors raised by the service, configuration, and storage layers.
#[derive(Debug, Error)]
pub enum Error {
    /// No row carries the requested logical id
    #[error("Product not found for Id: {product_id}")]
    NotFound {
        /// The logical id that was looked up
        product_id: i64,
    },

    /// Another product already holds this name and inventory level
    #[error("Product {name} {inventory_level} exists already")]
    Conflict {
        /// Name of the duplicate
        name: String,
        /// Inventory level of the duplicate
        inventory_level: i32,
    },

    /// No logical id is left above the current maximum
    #[error("No product id available after {max_id}")]
    IdExhausted {
        /// Largest logical id in the store
        max_id: i64,
    },

    /// The request path or body could not be decoded
    #[error("{message}")]
    Rejected {
        /// Status reported by the extractor
        status: StatusCode,
        /// Extractor's description of the problem
        message: String,
    },

    /// A required payload field was absent
    #[error("Missing required field: {field}")]
    InvalidInput {
        /// Wire name of the missing field
        field: &'static str,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Storage engine failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status carried by this error when it becomes a response.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } | Self::IdExhausted { .. } => StatusCode::CONFLICT,
            Self::Rejected { status, .. } => *status,
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
