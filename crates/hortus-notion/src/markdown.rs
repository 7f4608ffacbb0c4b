//! Block tree → Markdown conversion.
//!
//! Turns a fetched [`BlockNode`] tree into one Markdown document. Top-level
//! blocks become paragraphs separated by blank lines; nested children are
//! indented two spaces per level so list structure survives. Block types
//! outside the supported set are skipped rather than failing the page.

use crate::types::{Block, BlockNode, RichText};

/// Convert a block tree to a single Markdown document.
pub fn blocks_to_markdown(nodes: &[BlockNode]) -> String {
    render_nodes(nodes).join("\n\n")
}

/// Render one sibling level, one chunk per surviving block.
fn render_nodes(nodes: &[BlockNode]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut ordinal = 0u32;

    for node in nodes {
        // Consecutive numbered items count up; anything else resets the run.
        if node.block.kind == "numbered_list_item" {
            ordinal += 1;
        } else {
            ordinal = 0;
        }

        let Some(mut chunk) = render_block(&node.block, ordinal) else {
            continue;
        };

        if !node.children.is_empty() {
            let nested = indent(&render_nodes(&node.children).join("\n"));
            if !nested.is_empty() {
                chunk.push('\n');
                chunk.push_str(&nested);
            }
        }

        chunks.push(chunk);
    }

    chunks
}

/// Render a single block, without its children.
fn render_block(block: &Block, ordinal: u32) -> Option<String> {
    match block.kind.as_str() {
        "paragraph" => {
            let text = rich_text_to_markdown(&block.paragraph.as_ref()?.rich_text);
            if text.is_empty() { None } else { Some(text) }
        }
        "heading_1" => Some(format!(
            "# {}",
            rich_text_to_markdown(&block.heading_1.as_ref()?.rich_text)
        )),
        "heading_2" => Some(format!(
            "## {}",
            rich_text_to_markdown(&block.heading_2.as_ref()?.rich_text)
        )),
        "heading_3" => Some(format!(
            "### {}",
            rich_text_to_markdown(&block.heading_3.as_ref()?.rich_text)
        )),
        "bulleted_list_item" => Some(format!(
            "- {}",
            rich_text_to_markdown(&block.bulleted_list_item.as_ref()?.rich_text)
        )),
        "numbered_list_item" => Some(format!(
            "{ordinal}. {}",
            rich_text_to_markdown(&block.numbered_list_item.as_ref()?.rich_text)
        )),
        "to_do" => {
            let todo = block.to_do.as_ref()?;
            let marker = if todo.checked { "x" } else { " " };
            Some(format!(
                "- [{marker}] {}",
                rich_text_to_markdown(&todo.rich_text)
            ))
        }
        "quote" | "callout" => {
            let payload = if block.kind == "quote" {
                block.quote.as_ref()?
            } else {
                block.callout.as_ref()?
            };
            Some(format!("> {}", rich_text_to_markdown(&payload.rich_text)))
        }
        "code" => {
            let code = block.code.as_ref()?;
            let lang = match code.language.as_str() {
                "plain text" => "",
                other => other,
            };
            let text: String = code.rich_text.iter().map(|s| s.plain_text.as_str()).collect();
            Some(format!("```{lang}\n{text}\n```"))
        }
        "divider" => Some("---".to_string()),
        "image" => {
            let image = block.image.as_ref()?;
            let url = image.url()?;
            let alt = plain_text(&image.caption);
            Some(format!("![{alt}]({url})"))
        }
        "bookmark" => {
            let bookmark = block.bookmark.as_ref()?;
            let caption = plain_text(&bookmark.caption);
            let label = if caption.is_empty() {
                bookmark.url.as_str()
            } else {
                caption.as_str()
            };
            Some(format!("[{label}]({})", bookmark.url))
        }
        _ => None,
    }
}

/// Render rich text spans to inline Markdown.
///
/// Annotations nest code innermost, then strikethrough, italic, bold; a
/// link wraps the fully annotated text.
pub fn rich_text_to_markdown(spans: &[RichText]) -> String {
    let mut out = String::new();
    for span in spans {
        out.push_str(&span_to_markdown(span));
    }
    out
}

fn span_to_markdown(span: &RichText) -> String {
    if span.plain_text.is_empty() {
        return String::new();
    }

    let mut text = span.plain_text.clone();
    let a = &span.annotations;
    if a.code {
        text = format!("`{text}`");
    }
    if a.strikethrough {
        text = format!("~~{text}~~");
    }
    if a.italic {
        text = format!("*{text}*");
    }
    if a.bold {
        text = format!("**{text}**");
    }
    if let Some(href) = &span.href {
        text = format!("[{text}]({href})");
    }
    text
}

fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|s| s.plain_text.as_str()).collect()
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================
