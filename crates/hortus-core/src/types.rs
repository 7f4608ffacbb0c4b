//! Shared content types.
//!
//! These are the transport-independent shapes that flow between the content
//! fetcher (hortus-notion), the content transforms (hortus-content), and the
//! page assembler (hortus-web). They carry no Notion wire details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// PostMeta
// ============================================================================

/// Metadata for a single blog post, as authored in the content database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Source page identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown in the post index.
    pub description: String,
    /// Public URL slug (`/post/{slug}`).
    pub slug: String,
    /// Slug of the content page backing this post.
    pub content_slug: String,
    /// Slug of a related post, if any.
    pub related_slug: String,
    /// Author display name.
    pub author: String,
    /// Path to the author's avatar image.
    pub author_image: String,
    /// Free-form post kind ("Type" in the source database).
    pub kind: String,
    /// Alt text for the cover image.
    pub cover_image_alt: String,
    /// Description used in `<meta name="description">`.
    pub meta_description: String,
    /// Title used for search engines; falls back to `title` when empty.
    pub seo_title: String,
    /// When the post was first created, if recorded.
    pub created_at: Option<DateTime<Utc>>,
    /// When the post was last edited.
    pub updated_at: DateTime<Utc>,
    /// Whether the post is published.
    pub is_published: bool,
}

impl PostMeta {
    /// The title to use in `<title>` and social cards: the SEO title when
    /// present, otherwise the display title.
    pub fn display_seo_title(&self) -> &str {
        if self.seo_title.is_empty() {
            &self.title
        } else {
            &self.seo_title
        }
    }
}

// ============================================================================
// Post
// ============================================================================

/// A full post: metadata plus the page's Markdown content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post metadata.
    pub meta: PostMeta,
    /// Full Markdown text of the post body.
    pub markdown: String,
}

// ============================================================================
// HomeContent
// ============================================================================

/// Raw home page content as fetched from the source, before any footer
/// extraction is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    /// Home page title.
    pub title: String,
    /// Full Markdown text of the home page, footer section included.
    pub markdown: String,
}

// ============================================================================
// FooterLink
// ============================================================================

/// A single footer link: display name plus target URL.
///
/// Produced by the footer extractor in hortus-content and consumed by the
/// footer UI. Order is the left-to-right order of appearance in the source
/// text; duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display name of the link.
    pub name: String,
    /// Target URL.
    pub url: String,
}

impl FooterLink {
    /// Create a new footer link.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
