//! patfin-config
//!
//! Persistent user preferences for Pat Finances and their on-disk home.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
