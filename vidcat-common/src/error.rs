//! Common error types for vidcat

use thiserror::Error;

/// Common result type for vidcat startup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while bootstrapping a session
///
/// Business-rule failures of the session itself are not represented here;
/// see `vidcat_player::Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error (config or catalogue file)
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalogue missing, malformed or inconsistent
    #[error("Catalogue error: {0}")]
    Catalogue(String),
}
