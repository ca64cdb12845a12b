//! Shared types for the fauna workspace: animal ids, run configuration, errors.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CarnivorePowers, FaunaConfig};
pub use error::ConfigError;
pub use types::AnimalId;
