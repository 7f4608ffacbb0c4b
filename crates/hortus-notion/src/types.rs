//! Notion wire types.
//!
//! Partial deserialization targets for the handful of Notion API objects the
//! fetcher touches: query results, pages with their property bag, rich text
//! spans, and content blocks. Fields we never read are simply not modeled;
//! unknown JSON keys are ignored.
//!
//! Property values arrive shaped by their type (`{"type": "checkbox",
//! "checkbox": true}`). Rather than an enum per property type, [`Property`]
//! carries every payload we care about as an `Option`, which keeps
//! deserialization total over schema drift in the authored database.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;

// ============================================================================
// Pages and properties
// ============================================================================

/// Response shape of `POST /v1/databases/{id}/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    /// Matching pages.
    pub results: Vec<Page>,
    /// Whether more pages exist past this response.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next request when `has_more` is set.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A Notion page object: an identifier plus a bag of named properties.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Page identifier.
    pub id: String,
    /// Properties keyed by their authored name (e.g. "Name", "Published").
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

/// One property value, with the payload for whichever type it carries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Property {
    /// Title payload (`title` properties).
    pub title: Option<Vec<RichText>>,
    /// Rich text payload (`rich_text` properties).
    pub rich_text: Option<Vec<RichText>>,
    /// Checkbox payload.
    pub checkbox: Option<bool>,
    /// Select payload.
    pub select: Option<SelectValue>,
    /// Formula payload.
    pub formula: Option<FormulaValue>,
    /// Date payload.
    pub date: Option<DateValue>,
    /// Last-edited timestamp payload (RFC 3339).
    pub last_edited_time: Option<String>,
    /// Created timestamp payload (RFC 3339).
    pub created_time: Option<String>,
}

/// A select property's chosen option.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectValue {
    /// Option name.
    pub name: String,
}

/// A formula property's computed value (string formulas only).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormulaValue {
    /// The computed string, if the formula is string-typed.
    pub string: Option<String>,
}

/// A date property's value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateValue {
    /// Start of the date or date range (`2023-05-01` or RFC 3339).
    pub start: Option<String>,
}

impl Page {
    fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// First plain-text fragment of a title or rich text property.
    pub fn plain_text(&self, name: &str) -> Option<&str> {
        let prop = self.property(name)?;
        let spans = prop.title.as_deref().or(prop.rich_text.as_deref())?;
        spans.first().map(|s| s.plain_text.as_str())
    }

    /// Checkbox value, defaulting to `false` when absent.
    pub fn checkbox(&self, name: &str) -> bool {
        self.property(name)
            .and_then(|p| p.checkbox)
            .unwrap_or(false)
    }

    /// String value of a formula property.
    pub fn formula_string(&self, name: &str) -> Option<&str> {
        self.property(name)?.formula.as_ref()?.string.as_deref()
    }

    /// Start of a date property.
    pub fn date_start(&self, name: &str) -> Option<&str> {
        self.property(name)?.date.as_ref()?.start.as_deref()
    }

    /// Last-edited timestamp of a property (RFC 3339).
    pub fn last_edited_time(&self, name: &str) -> Option<&str> {
        self.property(name)?.last_edited_time.as_deref()
    }
}

// ============================================================================
// Rich text
// ============================================================================

/// One rich text span: text content plus inline annotations.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RichText {
    /// The span's text with no formatting applied.
    pub plain_text: String,
    /// Link target, if the span is a link.
    pub href: Option<String>,
    /// Inline style annotations.
    pub annotations: Annotations,
}

/// Inline style flags on a rich text span.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Annotations {
    /// Bold text.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Struck-through text.
    pub strikethrough: bool,
    /// Underlined text (no Markdown equivalent; ignored by conversion).
    pub underline: bool,
    /// Inline code.
    pub code: bool,
}

// ============================================================================
// Blocks
// ============================================================================

/// Response shape of `GET /v1/blocks/{id}/children`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockChildrenResponse {
    /// Blocks at this level.
    pub results: Vec<Block>,
    /// Whether more children exist past this response.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next request when `has_more` is set.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// One content block. The payload field matching `kind` is populated; all
/// others stay `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Block identifier.
    pub id: String,
    /// Block type tag (`paragraph`, `heading_1`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the block has nested children.
    pub has_children: bool,
    /// Paragraph payload.
    pub paragraph: Option<RichTextPayload>,
    /// Level-1 heading payload.
    pub heading_1: Option<RichTextPayload>,
    /// Level-2 heading payload.
    pub heading_2: Option<RichTextPayload>,
    /// Level-3 heading payload.
    pub heading_3: Option<RichTextPayload>,
    /// Bulleted list item payload.
    pub bulleted_list_item: Option<RichTextPayload>,
    /// Numbered list item payload.
    pub numbered_list_item: Option<RichTextPayload>,
    /// Quote payload.
    pub quote: Option<RichTextPayload>,
    /// Callout payload.
    pub callout: Option<RichTextPayload>,
    /// To-do payload.
    pub to_do: Option<TodoPayload>,
    /// Code payload.
    pub code: Option<CodePayload>,
    /// Image payload.
    pub image: Option<FilePayload>,
    /// Bookmark payload.
    pub bookmark: Option<BookmarkPayload>,
}

/// Payload for blocks that are just rich text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RichTextPayload {
    /// The block's rich text spans.
    pub rich_text: Vec<RichText>,
}

/// Payload of a to-do block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TodoPayload {
    /// The item's rich text spans.
    pub rich_text: Vec<RichText>,
    /// Whether the item is checked off.
    pub checked: bool,
}

/// Payload of a code block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodePayload {
    /// The code text.
    pub rich_text: Vec<RichText>,
    /// Language tag (e.g. `rust`, `plain text`).
    pub language: String,
}

/// Payload of an image block (externally linked or Notion-hosted).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilePayload {
    /// External file reference.
    pub external: Option<FileUrl>,
    /// Notion-hosted file reference.
    pub file: Option<FileUrl>,
    /// Caption spans (used as alt text).
    pub caption: Vec<RichText>,
}

/// A file reference carrying just its URL.
#[derive(Debug, Clone, Deserialize)]
pub struct FileUrl {
    /// The file URL.
    pub url: String,
}

impl FilePayload {
    /// The usable URL: external link first, then the hosted file.
    pub fn url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .or(self.file.as_ref())
            .map(|f| f.url.as_str())
    }
}

/// Payload of a bookmark block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookmarkPayload {
    /// Bookmarked URL.
    pub url: String,
    /// Caption spans.
    pub caption: Vec<RichText>,
}

/// A block together with its fetched children.
#[derive(Debug, Clone, Default)]
pub struct BlockNode {
    /// The block itself.
    pub block: Block,
    /// Nested children, in document order.
    pub children: Vec<BlockNode>,
}

// ============================================================================
// Timestamps
// ============================================================================

/// Parse a Notion timestamp, which is RFC 3339 for edit times but may be a
/// bare `YYYY-MM-DD` for authored date properties (treated as midnight UTC).
pub fn parse_notion_time(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ============================================================================
// Tests
// ============================================================================
