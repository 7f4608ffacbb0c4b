//! The content-source capability trait.
//!
//! [`ContentSource`] is the seam between the page assembler (hortus-web) and
//! whatever backs the content: the real implementation lives in
//! hortus-notion, tests stub it with in-memory fixtures. The trait speaks
//! only in shared [`types`](crate::types) and the shared
//! [`Error`](crate::Error) taxonomy.

use async_trait::async_trait;

use crate::types::{HomeContent, Post, PostMeta};
use crate::Result;

/// Capability: given a logical page identifier, produce content.
///
/// Implementations must be cheap to share (`Send + Sync`); the web layer
/// holds one behind an `Arc<dyn ContentSource>`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// All published posts for a locale, most recently updated first.
    async fn published_posts(&self, locale: &str) -> Result<Vec<PostMeta>>;

    /// The post whose content slug equals `slug`, with its full Markdown.
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) when no post
    /// matches.
    async fn post_by_slug(&self, slug: &str, locale: &str) -> Result<Post>;

    /// The home page's title and full Markdown, footer section included.
    async fn home_page(&self) -> Result<HomeContent>;
}
