/// Database connection and table creation
pub mod database;

/// Server settings from config.toml and environment variables
pub mod settings;

pub use settings::{Settings, load_settings};
