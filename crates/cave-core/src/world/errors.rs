//! Error types for map loading, space editing and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning map text into a board
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Could not read map file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Map has no rows or an empty first row")]
    Empty,

    #[error("Map declares {rows}x{cols} cells but only {found} characters were given")]
    Truncated {
        rows: usize,
        cols: usize,
        found: usize,
    },
}

/// Errors raised when changing the symbol of a space
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    #[error("Symbol '{0}' identifies a fixed terrain type and cannot be placed on an empty space")]
    FixedSymbol(char),

    #[error("Symbol '{0}' is not an item")]
    UnknownItem(char),

    #[error("Only empty spaces can carry items")]
    NotEmpty,
}

/// Errors raised while reading the game configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config file '{}': {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}
