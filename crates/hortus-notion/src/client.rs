//! Notion REST client.
//!
//! [`NotionClient`] speaks to the Notion API over reqwest and implements the
//! [`ContentSource`] capability for the web layer. All configuration comes
//! in through [`NotionConfig`] at construction; the client never reads the
//! process environment.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;
use tracing::debug;

use hortus_core::{ContentSource, HomeContent, Post, PostMeta};

use crate::error::{Error, Result};
use crate::markdown;
use crate::types::{parse_notion_time, Block, BlockChildrenResponse, BlockNode, Page, QueryResponse};

/// API version header sent with every request.
const NOTION_VERSION: &str = "2022-06-28";

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Children are fetched 100 at a time (the API maximum).
const PAGE_SIZE: u32 = 100;

/// Cut-off for nested block recursion; deeper content is dropped.
const MAX_BLOCK_DEPTH: usize = 8;

// ============================================================================
// NotionConfig
// ============================================================================

/// Explicit configuration for the Notion fetcher.
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Integration token used as a bearer credential.
    pub api_token: String,
    /// Database holding the posts.
    pub post_database_id: String,
    /// Page holding the home content (title, body, footer section).
    pub home_page_id: String,
    /// API endpoint, overridable for tests.
    pub api_base_url: String,
    /// Author name stamped on every post (the database has no author field).
    pub author: String,
    /// Author avatar path stamped on every post.
    pub author_image: String,
}

impl NotionConfig {
    /// Configuration with the production endpoint and default author fields.
    pub fn new(
        api_token: impl Into<String>,
        post_database_id: impl Into<String>,
        home_page_id: impl Into<String>,
    ) -> Self {
        Self {
            api_token: api_token.into(),
            post_database_id: post_database_id.into(),
            home_page_id: home_page_id.into(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            author: "Montek".to_string(),
            author_image: "/images/montek.png".to_string(),
        }
    }

    /// Override the API endpoint (tests point this at a mock server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the author fields stamped on posts.
    pub fn with_author(mut self, name: impl Into<String>, image: impl Into<String>) -> Self {
        self.author = name.into();
        self.author_image = image.into();
        self
    }
}

// ============================================================================
// NotionClient
// ============================================================================

/// Client for the Notion REST API.
pub struct NotionClient {
    http: reqwest::Client,
    config: NotionConfig,
}

impl NotionClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: NotionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// All published posts for a locale, most recently updated first.
    pub async fn published_posts(&self, locale: &str) -> Result<Vec<PostMeta>> {
        let body = serde_json::json!({
            "filter": {
                "and": [
                    { "property": "Published", "checkbox": { "equals": true } },
                    { "property": "locale", "select": { "equals": locale } }
                ]
            },
            "sorts": [
                { "property": "Updated", "direction": "descending" }
            ]
        });
        let response = self.query_database(&body).await?;
        debug!(count = response.results.len(), %locale, "notion: published posts");
        response
            .results
            .iter()
            .map(|page| page_to_post_meta(page, &self.config))
            .collect()
    }

    /// The post whose "Content slug" formula equals `slug`, with its Markdown.
    pub async fn post_by_slug(&self, slug: &str, locale: &str) -> Result<Post> {
        let body = serde_json::json!({
            "filter": {
                "and": [
                    { "property": "Content slug", "formula": { "string": { "equals": slug } } },
                    { "property": "locale", "select": { "equals": locale } }
                ]
            }
        });
        let response = self.query_database(&body).await?;
        let page = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| Error::PostNotFound {
                slug: slug.to_string(),
            })?;

        let markdown = self.page_markdown(&page.id).await?;
        let meta = page_to_post_meta(&page, &self.config)?;
        Ok(Post { meta, markdown })
    }

    /// The home page's title property and full Markdown content.
    pub async fn home_page(&self) -> Result<HomeContent> {
        let url = self.url(&format!("pages/{}", self.config.home_page_id));
        let response = self.request(self.http.get(&url)).send().await?;
        let page: Page = Self::check(response).await?;

        let title = page.plain_text("title").unwrap_or("Home").to_string();
        let markdown = self.page_markdown(&page.id).await?;
        Ok(HomeContent { title, markdown })
    }

    /// Fetch a page's block tree and convert it to one Markdown document.
    pub async fn page_markdown(&self, page_id: &str) -> Result<String> {
        let nodes = self.block_tree(page_id, 0).await?;
        let markdown = markdown::blocks_to_markdown(&nodes);
        debug!(%page_id, blocks = nodes.len(), len = markdown.len(), "notion: page markdown");
        Ok(markdown)
    }

    /// Fetch all children of a block, following pagination cursors and
    /// recursing into nested blocks up to [`MAX_BLOCK_DEPTH`].
    fn block_tree<'a>(
        &'a self,
        block_id: &'a str,
        depth: usize,
    ) -> BoxFuture<'a, Result<Vec<BlockNode>>> {
        async move {
            let mut nodes = Vec::new();
            let mut cursor: Option<String> = None;

            loop {
                let url = self.url(&format!("blocks/{block_id}/children"));
                let mut request = self
                    .request(self.http.get(&url))
                    .query(&[("page_size", PAGE_SIZE.to_string())]);
                if let Some(c) = &cursor {
                    request = request.query(&[("start_cursor", c.clone())]);
                }

                let response = request.send().await?;
                let BlockChildrenResponse {
                    results,
                    has_more,
                    next_cursor,
                } = Self::check(response).await?;

                for block in results {
                    nodes.push(self.into_node(block, depth).await?);
                }

                cursor = if has_more { next_cursor } else { None };
                if cursor.is_none() {
                    break;
                }
            }

            Ok(nodes)
        }
        .boxed()
    }

    async fn into_node(&self, block: Block, depth: usize) -> Result<BlockNode> {
        let children = if block.has_children && depth < MAX_BLOCK_DEPTH {
            self.block_tree(&block.id, depth + 1).await?
        } else {
            Vec::new()
        };
        Ok(BlockNode { block, children })
    }

    async fn query_database(&self, body: &serde_json::Value) -> Result<QueryResponse> {
        let url = self.url(&format!("databases/{}/query", self.config.post_database_id));
        let response = self.request(self.http.post(&url)).json(body).send().await?;
        Self::check(response).await
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .bearer_auth(&self.config.api_token)
            .header("Notion-Version", NOTION_VERSION)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.config.api_base_url.trim_end_matches('/'))
    }

    /// Deserialize a success response or surface Notion's error body.
    async fn check<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            code: body["code"].as_str().unwrap_or("unknown").to_string(),
            message: body["message"].as_str().unwrap_or("").to_string(),
        })
    }
}

// ============================================================================
// Page → PostMeta transformation
// ============================================================================

/// Transform a database page into post metadata.
///
/// "Name", "Description", "Slug", and "Updated" are required; the remaining
/// properties default to empty when absent, matching how loosely the
/// database schema is authored.
fn page_to_post_meta(page: &Page, config: &NotionConfig) -> Result<PostMeta> {
    let missing = |property: &str| Error::MissingProperty {
        property: property.to_string(),
        page_id: page.id.clone(),
    };

    let title = page.plain_text("Name").ok_or_else(|| missing("Name"))?;
    let description = page
        .plain_text("Description")
        .ok_or_else(|| missing("Description"))?;
    let slug = page
        .formula_string("Slug")
        .ok_or_else(|| missing("Slug"))?;
    let updated_at = page
        .last_edited_time("Updated")
        .and_then(parse_notion_time)
        .ok_or_else(|| missing("Updated"))?;
    let created_at = page.date_start("Created").and_then(parse_notion_time);

    let optional = |name: &str| page.plain_text(name).unwrap_or("").to_string();

    Ok(PostMeta {
        id: page.id.clone(),
        title: title.to_string(),
        description: description.to_string(),
        slug: slug.to_string(),
        content_slug: optional("Content slug"),
        related_slug: optional("Related slug"),
        author: config.author.clone(),
        author_image: config.author_image.clone(),
        kind: optional("Type"),
        cover_image_alt: optional("Cover Image alt"),
        meta_description: optional("Meta Description"),
        seo_title: optional("SEO title"),
        created_at,
        updated_at,
        is_published: page.checkbox("Published"),
    })
}

// ============================================================================
// ContentSource implementation
// ============================================================================

#[async_trait::async_trait]
impl ContentSource for NotionClient {
    async fn published_posts(&self, locale: &str) -> hortus_core::Result<Vec<PostMeta>> {
        NotionClient::published_posts(self, locale)
            .await
            .map_err(Into::into)
    }

    async fn post_by_slug(&self, slug: &str, locale: &str) -> hortus_core::Result<Post> {
        NotionClient::post_by_slug(self, slug, locale)
            .await
            .map_err(Into::into)
    }

    async fn home_page(&self) -> hortus_core::Result<HomeContent> {
        NotionClient::home_page(self).await.map_err(Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn page_json() -> serde_json::Value {
        serde_json::json!({
            "id": "page-1",
            "properties": {
                "Name": { "type": "title", "title": [{ "plain_text": "First post" }] },
                "Description": { "type": "rich_text", "rich_text": [{ "plain_text": "About beginnings" }] },
                "Slug": { "type": "formula", "formula": { "string": "first-post" } },
                "Content slug": { "type": "rich_text", "rich_text": [{ "plain_text": "first-post-content" }] },
                "Updated": { "type": "last_edited_time", "last_edited_time": "2025-03-05T12:00:00.000Z" },
                "Created": { "type": "date", "date": { "start": "2024-11-02" } },
                "Published": { "type": "checkbox", "checkbox": true }
            }
        })
    }

    fn config() -> NotionConfig {
        NotionConfig::new("secret", "db", "home")
    }

    #[test]
    fn test_page_to_post_meta_complete() {
        let page: Page = serde_json::from_value(page_json()).unwrap();
        let meta = page_to_post_meta(&page, &config()).unwrap();

        assert_eq!(meta.title, "First post");
        assert_eq!(meta.slug, "first-post");
        assert_eq!(meta.content_slug, "first-post-content");
        assert_eq!(meta.author, "Montek");
        assert_eq!(
            meta.updated_at,
            Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap()
        );
        assert_eq!(
            meta.created_at,
            Some(Utc.with_ymd_and_hms(2024, 11, 2, 0, 0, 0).unwrap())
        );
        assert!(meta.is_published);
        // Unset optional properties come back empty, not missing.
        assert_eq!(meta.seo_title, "");
        assert_eq!(meta.kind, "");
    }

    #[test]
    fn test_page_to_post_meta_missing_required_property() {
        let mut json = page_json();
        json["properties"]
            .as_object_mut()
            .unwrap()
            .remove("Description");
        let page: Page = serde_json::from_value(json).unwrap();

        let err = page_to_post_meta(&page, &config()).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingProperty { ref property, .. } if property == "Description"
        ));
    }

    #[test]
    fn test_config_builder_overrides() {
        let config = NotionConfig::new("t", "db", "home")
            .with_base_url("http://localhost:9999")
            .with_author("A. Writer", "/a.png");
        assert_eq!(config.api_base_url, "http://localhost:9999");
        assert_eq!(config.author, "A. Writer");
    }
}
