//! Error types for hortus-cli.

use thiserror::Error;

/// Result type alias for hortus-cli operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Core content error
    #[error(transparent)]
    Core(#[from] hortus_core::Error),

    /// Web server error
    #[error(transparent)]
    Web(#[from] hortus_web::Error),

    /// File system error while reading or writing configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Config serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// The listen address is malformed
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),
}
