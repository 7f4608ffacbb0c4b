//! Markdown → HTML rendering with the site's styled tag set.
//!
//! The renderer parses with `pulldown-cmark` (tables, strikethrough, and
//! task lists enabled) and rewrites the tags the site styles into HTML
//! carrying the site's fixed utility-class strings. Anything outside that
//! set falls through to the stock HTML writer.
//!
//! Link handling mirrors the site's anchor rules: hrefs starting with `/`
//! (internal) or `#` (in-page) open in the same tab, everything else gets
//! `target="_blank" rel="noopener noreferrer"`.
//!
//! # Example
//!
//! ```rust
//! use hortus_content::html::render_html;
//!
//! let html = render_html("# Hello\n\nSome *text*.");
//! assert!(html.contains("<h1 class=\"font-medium text-xl mt-8 mb-2\">"));
//! assert!(html.contains("<em class=\"italic\">"));
//! ```

use pulldown_cmark::{html, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

// ============================================================================
// Styled tag classes
// ============================================================================

const H1_CLASS: &str = "font-medium text-xl mt-8 mb-2";
const H2_CLASS: &str = "text-gray-800 dark:text-zinc-200 font-medium text-lg mt-6 mb-2";
const H3_CLASS: &str = "text-gray-800 dark:text-zinc-200 font-medium mt-5 mb-2";
const H4_CLASS: &str = "font-medium text-sm mt-4 mb-1";
const H5_CLASS: &str = "font-medium text-xs mt-3 mb-1";
const H6_CLASS: &str = "font-medium text-xs text-gray-600 dark:text-zinc-400 mt-3 mb-1";
const P_CLASS: &str = "text-gray-800 dark:text-zinc-300 text-sm leading-relaxed my-3";
const OL_CLASS: &str = "text-gray-800 dark:text-zinc-300 list-decimal pl-5 space-y-1 my-3 text-sm";
const UL_CLASS: &str = "text-gray-800 dark:text-zinc-300 list-disc pl-5 space-y-1 my-3 text-sm";
const LI_CLASS: &str = "pl-1";
const EM_CLASS: &str = "italic";
const STRONG_CLASS: &str = "font-medium";
const A_CLASS: &str = "text-blue-500 hover:text-blue-700 dark:text-gray-400 \
                       hover:dark:text-gray-300 dark:underline dark:underline-offset-2 \
                       dark:decoration-gray-800";
const PRE_CLASS: &str = "bg-gray-100 dark:bg-zinc-800 p-3 rounded-md overflow-x-auto my-4 text-sm";
const CODE_CLASS: &str = "bg-gray-100 dark:bg-zinc-800 px-1.5 py-0.5 rounded text-xs font-mono";
const BLOCKQUOTE_CLASS: &str = "border-l-2 border-gray-300 pl-4 py-1 text-gray-700 \
                                dark:border-zinc-600 dark:text-zinc-300 my-4 text-sm italic";
const HR_CLASS: &str = "border-t border-gray-200 dark:border-zinc-700 my-6";
const DEL_CLASS: &str = "line-through text-gray-500 dark:text-zinc-500";
const TABLE_WRAP_CLASS: &str = "overflow-x-auto my-6";
const TABLE_CLASS: &str = "min-w-full divide-y divide-gray-200 dark:divide-zinc-700 text-sm";
const THEAD_CLASS: &str = "bg-gray-50 dark:bg-zinc-800";
const TBODY_CLASS: &str = "divide-y divide-gray-200 dark:divide-zinc-800";
const TR_CLASS: &str = "hover:bg-gray-50 dark:hover:bg-zinc-800/50";
const TH_CLASS: &str = "px-3 py-2 text-left text-xs font-medium text-gray-500 \
                        dark:text-zinc-400 uppercase tracking-wider";
const TD_CLASS: &str = "px-3 py-2 whitespace-nowrap";
const IMG_CLASS: &str = "max-w-full h-auto rounded-md my-4";

// ============================================================================
// Rendering
// ============================================================================

/// Render a Markdown document to HTML with the site's styled tag set.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let events: Vec<Event> = Parser::new_ext(markdown, options).collect();
    let styled = restyle(events);

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, styled.into_iter());
    out
}

/// Rewrite the styled subset of events, passing everything else through.
fn restyle(events: Vec<Event<'_>>) -> Vec<Event<'_>> {
    let mut out = Vec::with_capacity(events.len());
    let mut in_table_head = false;

    let mut iter = events.into_iter();
    while let Some(event) = iter.next() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let (tag, class) = heading_style(level);
                out.push(block(format!("<{tag} class=\"{class}\">")));
            }
            Event::Start(Tag::Paragraph) => {
                out.push(block(format!("<p class=\"{P_CLASS}\">")));
            }
            Event::Start(Tag::List(Some(start))) => {
                if start == 1 {
                    out.push(block(format!("<ol class=\"{OL_CLASS}\">")));
                } else {
                    out.push(block(format!("<ol start=\"{start}\" class=\"{OL_CLASS}\">")));
                }
            }
            Event::Start(Tag::List(None)) => {
                out.push(block(format!("<ul class=\"{UL_CLASS}\">")));
            }
            Event::Start(Tag::Item) => {
                out.push(block(format!("<li class=\"{LI_CLASS}\">")));
            }
            Event::Start(Tag::Emphasis) => {
                out.push(inline(format!("<em class=\"{EM_CLASS}\">")));
            }
            Event::Start(Tag::Strong) => {
                out.push(inline(format!("<strong class=\"{STRONG_CLASS}\">")));
            }
            Event::Start(Tag::Strikethrough) => {
                out.push(inline(format!("<del class=\"{DEL_CLASS}\">")));
            }
            Event::End(TagEnd::Strikethrough) => {
                out.push(inline("</del>".to_string()));
            }
            Event::Start(Tag::BlockQuote(_)) => {
                out.push(block(format!("<blockquote class=\"{BLOCKQUOTE_CLASS}\">")));
            }
            Event::Start(Tag::Link { dest_url, title, .. }) => {
                out.push(inline(anchor_open(&dest_url, &title)));
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let open = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let lang = info.split_whitespace().next().unwrap_or("");
                        if lang.is_empty() {
                            format!("<pre class=\"{PRE_CLASS}\"><code>")
                        } else {
                            format!(
                                "<pre class=\"{PRE_CLASS}\"><code class=\"language-{}\">",
                                escape_html(lang)
                            )
                        }
                    }
                    CodeBlockKind::Indented => format!("<pre class=\"{PRE_CLASS}\"><code>"),
                };
                out.push(block(open));
            }
            Event::Start(Tag::Table(_)) => {
                out.push(block(format!(
                    "<div class=\"{TABLE_WRAP_CLASS}\"><table class=\"{TABLE_CLASS}\">"
                )));
            }
            Event::End(TagEnd::Table) => {
                out.push(block("</tbody></table></div>\n".to_string()));
            }
            Event::Start(Tag::TableHead) => {
                in_table_head = true;
                out.push(block(format!(
                    "<thead class=\"{THEAD_CLASS}\"><tr class=\"{TR_CLASS}\">"
                )));
            }
            Event::End(TagEnd::TableHead) => {
                in_table_head = false;
                out.push(block(format!("</tr></thead><tbody class=\"{TBODY_CLASS}\">")));
            }
            Event::Start(Tag::TableRow) => {
                out.push(block(format!("<tr class=\"{TR_CLASS}\">")));
            }
            Event::Start(Tag::TableCell) => {
                if in_table_head {
                    out.push(block(format!("<th class=\"{TH_CLASS}\">")));
                } else {
                    out.push(block(format!("<td class=\"{TD_CLASS}\">")));
                }
            }
            Event::End(TagEnd::TableCell) => {
                if in_table_head {
                    out.push(block("</th>".to_string()));
                } else {
                    out.push(block("</td>".to_string()));
                }
            }
            Event::Start(Tag::Image { dest_url, title, .. }) => {
                // The image's alt text arrives as child events; collect them
                // and emit a single self-contained tag.
                let alt = collect_alt_text(&mut iter);
                out.push(block(image_tag(&dest_url, &title, &alt)));
            }
            Event::Rule => {
                out.push(block(format!("<hr class=\"{HR_CLASS}\" />\n")));
            }
            Event::Code(text) => {
                out.push(inline(format!(
                    "<code class=\"{CODE_CLASS}\">{}</code>",
                    escape_html(&text)
                )));
            }
            other => out.push(other),
        }
    }

    out
}

/// Drain events up to the matching image end, keeping only their text.
fn collect_alt_text<'a>(iter: &mut impl Iterator<Item = Event<'a>>) -> String {
    let mut alt = String::new();
    for event in iter.by_ref() {
        match event {
            Event::End(TagEnd::Image) => break,
            Event::Text(text) | Event::Code(text) => alt.push_str(&text),
            Event::SoftBreak | Event::HardBreak => alt.push(' '),
            _ => {}
        }
    }
    alt
}

fn heading_style(level: HeadingLevel) -> (&'static str, &'static str) {
    match level {
        HeadingLevel::H1 => ("h1", H1_CLASS),
        HeadingLevel::H2 => ("h2", H2_CLASS),
        HeadingLevel::H3 => ("h3", H3_CLASS),
        HeadingLevel::H4 => ("h4", H4_CLASS),
        HeadingLevel::H5 => ("h5", H5_CLASS),
        HeadingLevel::H6 => ("h6", H6_CLASS),
    }
}

/// Build the opening anchor tag for a link destination.
fn anchor_open(dest: &str, title: &str) -> String {
    let mut tag = format!("<a href=\"{}\" class=\"{A_CLASS}\"", escape_html(dest));
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_html(title)));
    }
    // Internal and in-page links stay in the same tab.
    if !(dest.starts_with('/') || dest.starts_with('#')) {
        tag.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    tag.push('>');
    tag
}

fn image_tag(dest: &str, title: &str, alt: &str) -> String {
    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\" class=\"{IMG_CLASS}\"",
        escape_html(dest),
        escape_html(alt)
    );
    if !title.is_empty() {
        tag.push_str(&format!(" title=\"{}\"", escape_html(title)));
    }
    tag.push_str(" />");
    tag
}

fn block(s: String) -> Event<'static> {
    Event::Html(s.into())
}

fn inline(s: String) -> Event<'static> {
    Event::InlineHtml(s.into())
}

/// Minimal HTML escaping for text and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================
