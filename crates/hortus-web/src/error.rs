//! Error types for hortus-web.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

/// Result type alias for hortus-web operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a request.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The content source failed or the content does not exist
    #[error("Content error: {0}")]
    Content(#[from] hortus_core::Error),

    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Binding or serving the listener failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

const NOT_FOUND_PAGE: &str = "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Not found</title></head>\
<body class=\"mx-auto max-w-2xl px-4 py-16\">\
<h1 class=\"text-2xl font-bold\">404</h1>\
<p class=\"mt-4\">This page does not exist. <a href=\"/\" class=\"underline\">Go home</a>.</p>\
</body></html>";

const SERVER_ERROR_PAGE: &str = "<!doctype html>\
<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Something went wrong</title></head>\
<body class=\"mx-auto max-w-2xl px-4 py-16\">\
<h1 class=\"text-2xl font-bold\">Something went wrong</h1>\
<p class=\"mt-4\">Try again in a moment, or <a href=\"/\" class=\"underline\">go home</a>.</p>\
</body></html>";

impl Error {
    /// Whether this error should surface as a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Content(err) if err.is_not_found())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            warn!(%self, "not found");
            return (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response();
        }
        error!(%self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_PAGE)).into_response()
    }
}

/// The canned 404 page, also used by the router fallback.
pub fn not_found_page() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_post_is_not_found() {
        let err = Error::Content(hortus_core::Error::not_found("post 'x'"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unavailable_content_is_not_not_found() {
        let err = Error::Content(hortus_core::Error::unavailable("api down"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_status_codes() {
        let not_found = Error::Content(hortus_core::Error::not_found("post 'x'"));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let unavailable = Error::Content(hortus_core::Error::unavailable("api down"));
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
