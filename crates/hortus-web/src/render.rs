//! Embedded templates.
//!
//! Templates are compiled into the binary with `include_str!` so the server
//! ships as a single executable. `home.html` and `post.html` both extend
//! `layout.html`, which carries the document head (SEO, OpenGraph and
//! Twitter card metadata) and the shared footer.

use tera::Tera;

/// Compile the embedded template set.
pub fn templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("layout.html", include_str!("../templates/layout.html")),
        ("home.html", include_str!("../templates/home.html")),
        ("post.html", include_str!("../templates/post.html")),
    ])?;
    Ok(tera)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    fn page_context() -> Context {
        let mut ctx = Context::new();
        ctx.insert(
            "page",
            &serde_json::json!({
                "title": "Hello",
                "description": "A page",
                "url": "https://montek.dev/",
                "kind": "website"
            }),
        );
        ctx.insert("site_name", "Montek");
        ctx.insert("twitter_site", "@montekkundan");
        ctx.insert("locale", "en");
        ctx.insert("footer_links", &Vec::<hortus_core::FooterLink>::new());
        ctx
    }

    #[test]
    fn test_templates_compile() {
        templates().unwrap();
    }

    #[test]
    fn test_home_extends_layout() {
        let tera = templates().unwrap();
        let mut ctx = page_context();
        ctx.insert("title", "Hello");
        ctx.insert("body_html", "<p>hi</p>");
        ctx.insert("posts", &Vec::<serde_json::Value>::new());

        let html = tera.render("home.html", &ctx).unwrap();
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_layout_escapes_metadata() {
        let tera = templates().unwrap();
        let mut ctx = page_context();
        ctx.insert(
            "page",
            &serde_json::json!({
                "title": "a <script> title",
                "description": "d",
                "url": "https://montek.dev/",
                "kind": "website"
            }),
        );
        ctx.insert("title", "t");
        ctx.insert("body_html", "");
        ctx.insert("posts", &Vec::<serde_json::Value>::new());

        let html = tera.render("home.html", &ctx).unwrap();
        assert!(!html.contains("a <script> title"));
        assert!(html.contains("a &lt;script&gt; title"));
    }
}
