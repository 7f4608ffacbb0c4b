//! Request handlers.
//!
//! The home page fetches its Markdown, splits off the footer section and
//! harvests its links (falling back to the configured defaults when that
//! yields none), then renders the remaining body to HTML. Post pages
//! render their Markdown in full; footer extraction does not apply to
//! them.
//!
//! The home page degrades rather than fails: if the content source is
//! unavailable it renders with fallback content and an empty post list so
//! the site stays up. A post page, by contrast, propagates errors, since
//! a broken article page has nothing sensible to show.

use axum::extract::{Path, State};
use axum::response::Html;
use serde::Serialize;
use tracing::warn;

use hortus_content::{readable_date, render_html, split_footer, FooterSplit};
use hortus_core::{FooterLink, HomeContent, PostMeta};

use crate::error::Result;
use crate::state::AppState;

// ============================================================================
// View models
// ============================================================================

/// Document head metadata shared by every page.
#[derive(Debug, Serialize)]
struct PageHead {
    title: String,
    description: String,
    url: String,
    /// OpenGraph type: `website` for the home page, `article` for posts.
    kind: String,
}

/// One entry in the home page's post list.
#[derive(Debug, Serialize)]
struct PostListItem {
    title: String,
    description: String,
    slug: String,
    updated: String,
}

impl PostListItem {
    fn from_meta(meta: &PostMeta) -> Self {
        Self {
            title: meta.title.clone(),
            description: meta.description.clone(),
            slug: meta.slug.clone(),
            updated: readable_date(&meta.updated_at),
        }
    }
}

/// Post header fields for the article template.
#[derive(Debug, Serialize)]
struct PostView {
    title: String,
    description: String,
    author: String,
    author_image: String,
    updated: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /` — home content plus the published post list.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let site = &state.site;

    let home = match state.source.home_page().await {
        Ok(home) => home,
        Err(err) => {
            warn!(%err, "home content unavailable, serving fallback");
            HomeContent {
                title: site.site_name.clone(),
                markdown: "Content is temporarily unavailable.".to_string(),
            }
        }
    };

    let posts = match state.source.published_posts(&site.locale).await {
        Ok(posts) => posts,
        Err(err) => {
            warn!(%err, "post list unavailable, serving empty list");
            Vec::new()
        }
    };

    let FooterSplit { body, links } = split_footer(&home.markdown);
    let items: Vec<PostListItem> = posts.iter().map(PostListItem::from_meta).collect();

    let mut ctx = tera::Context::new();
    ctx.insert(
        "page",
        &PageHead {
            title: home.title.clone(),
            description: site.site_description.clone(),
            url: format!("{}/", site.base_url),
            kind: "website".to_string(),
        },
    );
    insert_site(&mut ctx, &state, links);
    ctx.insert("title", &home.title);
    ctx.insert("body_html", &render_html(&body));
    ctx.insert("posts", &items);

    Ok(Html(state.templates.render("home.html", &ctx)?))
}

/// `GET /post/{slug}` — a single post page.
pub async fn post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>> {
    let site = &state.site;
    let post = state.source.post_by_slug(&slug, &site.locale).await?;
    let meta = &post.meta;

    let description = if meta.meta_description.is_empty() {
        meta.description.clone()
    } else {
        meta.meta_description.clone()
    };

    let mut ctx = tera::Context::new();
    ctx.insert(
        "page",
        &PageHead {
            title: meta.display_seo_title().to_string(),
            description,
            url: format!("{}/post/{}", site.base_url, meta.slug),
            kind: "article".to_string(),
        },
    );
    // Footer extraction is a home-page concern; posts render in full and
    // always carry the configured footer links.
    insert_site(&mut ctx, &state, Vec::new());
    ctx.insert(
        "post",
        &PostView {
            title: meta.title.clone(),
            description: meta.description.clone(),
            author: meta.author.clone(),
            author_image: meta.author_image.clone(),
            updated: readable_date(&meta.updated_at),
        },
    );
    ctx.insert("body_html", &render_html(&post.markdown));

    Ok(Html(state.templates.render("post.html", &ctx)?))
}

/// Fallback for every unrouted path.
pub async fn not_found() -> impl axum::response::IntoResponse {
    crate::error::not_found_page()
}

/// Insert the layout's shared context, substituting the configured footer
/// links when the page's footer section yielded none.
fn insert_site(ctx: &mut tera::Context, state: &AppState, links: Vec<FooterLink>) {
    let site = &state.site;
    let links = if links.is_empty() {
        site.default_footer_links.clone()
    } else {
        links
    };
    ctx.insert("site_name", &site.site_name);
    ctx.insert("twitter_site", &site.twitter_site);
    ctx.insert("locale", &site.locale);
    ctx.insert("footer_links", &links);
}
