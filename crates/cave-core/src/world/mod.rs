//! Game configuration and error types

mod config;
mod errors;

pub use config::GameConfig;
pub use errors::{ConfigError, MapError, SpaceError};
