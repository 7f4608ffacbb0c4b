//! Error types for hortus-notion.

use thiserror::Error;

/// Result type alias for hortus-notion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching content from Notion.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the Notion API
    #[error("Notion API error ({status} {code}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Notion error code (e.g. `object_not_found`)
        code: String,
        /// Human-readable message from the API
        message: String,
    },

    /// A database page is missing a property the transformer requires
    #[error("Page {page_id} is missing required property '{property}'")]
    MissingProperty {
        /// The property name (as authored in the database schema)
        property: String,
        /// The offending page's identifier
        page_id: String,
    },

    /// No published post matches the requested slug
    #[error("No post found for slug '{slug}'")]
    PostNotFound {
        /// The slug that was looked up
        slug: String,
    },
}

impl From<Error> for hortus_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::PostNotFound { slug } => hortus_core::Error::not_found(format!("post '{slug}'")),
            other => hortus_core::Error::unavailable(other.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_not_found_maps_to_core_not_found() {
        let core: hortus_core::Error = Error::PostNotFound {
            slug: "garden".to_string(),
        }
        .into();
        assert!(core.is_not_found());
    }

    #[test]
    fn test_api_error_maps_to_unavailable() {
        let core: hortus_core::Error = Error::Api {
            status: 502,
            code: "internal_server_error".to_string(),
            message: "upstream".to_string(),
        }
        .into();
        assert!(!core.is_not_found());
        assert!(core.to_string().contains("502"));
    }
}
