//! Error types for hortus-core.

use thiserror::Error;

/// Result type alias for hortus-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across Hortus crates.
///
/// Domain crates define richer error enums of their own and convert into
/// these shared variants at the capability boundary, so callers of a
/// `dyn ContentSource` see a single taxonomy.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A requested content item does not exist
    #[error("Not found: {what}")]
    NotFound {
        /// Description of the missing item (e.g. a post slug)
        what: String,
    },

    /// Content could not be retrieved from the backing source
    #[error("Content unavailable: {message}")]
    ContentUnavailable {
        /// Human-readable description of the failure
        message: String,
    },
}

impl Error {
    /// Construct a [`Error::Config`] from any displayable message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Construct a [`Error::NotFound`] from any displayable description.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Construct a [`Error::ContentUnavailable`] from any displayable message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ContentUnavailable {
            message: message.into(),
        }
    }

    /// Returns `true` if the error means "the item does not exist" rather
    /// than "the fetch failed".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::config("missing token").to_string(),
            "Configuration error: missing token"
        );
        assert_eq!(
            Error::not_found("post 'garden'").to_string(),
            "Not found: post 'garden'"
        );
        assert_eq!(
            Error::unavailable("timeout").to_string(),
            "Content unavailable: timeout"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        assert!(!Error::config("x").is_not_found());
        assert!(!Error::unavailable("x").is_not_found());
    }
}
