//! HTTP frontend for Hortus.
//!
//! Serves the blog over two routes: `/` (home page with the post list) and
//! `/post/{slug}` (a single post). Content comes from whatever
//! [`ContentSource`](hortus_core::ContentSource) the state is built with;
//! in production that is the Notion fetcher, in tests a stub.
//!
//! # Modules
//!
//! - [`server`]: Router construction and the serve loop
//! - [`routes`]: Request handlers and their view models
//! - [`render`]: Embedded tera templates
//! - [`state`]: Shared application state and site configuration
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use hortus_web::{AppState, SiteConfig};
//! # async fn run(source: Arc<dyn hortus_core::ContentSource>) -> hortus_web::Result<()> {
//! let state = AppState::new(source, SiteConfig::default())?;
//! hortus_web::serve("127.0.0.1:3000".parse().unwrap(), state).await
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use server::{router, serve};
pub use state::{AppState, SiteConfig};
