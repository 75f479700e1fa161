// src/api/responses.rs
//! Raw wire shapes of the Notion API responses this crate touches.
//!
//! These types deserialize the API's JSON as-is; turning them into view
//! records is the adapter's job. Every field a record may legitimately
//! lack is optional here, so a sparse page deserializes without error
//! and defaulting happens in one place downstream.

use serde::Deserialize;
use std::collections::HashMap;

/// Generic paginated response from the Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Database query response.
pub type QueryDatabaseResponse = PaginatedResponse<PageObject>;

/// Block children response.
pub type BlockChildrenResponse = PaginatedResponse<BlockObject>;

/// A page record as returned inside database query results.
#[derive(Debug, Clone, Deserialize)]
pub struct PageObject {
    pub id: String,
    /// Present only on fully resolved pages. Partial objects (the API's
    /// reference stubs) omit it, which is how completeness is detected.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub cover: Option<FileObject>,
    #[serde(default)]
    pub properties: HashMap<String, Property>,
}

impl PageObject {
    /// Whether the API fully resolved this record.
    pub fn is_full(&self) -> bool {
        self.url.is_some()
    }
}

/// A property value with every payload the site's databases use.
///
/// Notion tags property values by type; modelling the payloads as
/// optional fields lets one struct cover all of them and leaves
/// unknown property types harmlessly empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    #[serde(default)]
    pub title: Option<Vec<RichTextItem>>,
    #[serde(default)]
    pub rich_text: Option<Vec<RichTextItem>>,
    #[serde(default)]
    pub multi_select: Option<Vec<SelectOption>>,
    #[serde(default)]
    pub number: Option<f64>,
    #[serde(default)]
    pub checkbox: Option<bool>,
    #[serde(default)]
    pub date: Option<DateValue>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// One span of rich text; only the resolved plain text matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextItem {
    #[serde(default)]
    pub plain_text: String,
}

/// A select/multi-select option.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// A date property payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
}

/// A file attachment: either an external URL or a Notion-hosted file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileObject {
    #[serde(default)]
    pub external: Option<ExternalFile>,
    #[serde(default)]
    pub file: Option<HostedFile>,
    #[serde(default)]
    pub caption: Option<Vec<RichTextItem>>,
}

impl FileObject {
    /// Resolution order: external URL first, hosted file second.
    pub fn resolve_url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .map(|f| f.url.as_str())
            .or_else(|| self.file.as_ref().map(|f| f.url.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostedFile {
    pub url: String,
}

/// Error envelope the API returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorEnvelope {
    pub code: String,
    pub message: String,
}

// --- Blocks (page content) ---

/// A content block, with payloads for the block types the markdown
/// renderer understands. Unrecognized types keep their tag and nothing
/// else, and render as nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockObject {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub paragraph: Option<TextBlock>,
    #[serde(default)]
    pub heading_1: Option<TextBlock>,
    #[serde(default)]
    pub heading_2: Option<TextBlock>,
    #[serde(default)]
    pub heading_3: Option<TextBlock>,
    #[serde(default)]
    pub bulleted_list_item: Option<TextBlock>,
    #[serde(default)]
    pub numbered_list_item: Option<TextBlock>,
    #[serde(default)]
    pub quote: Option<TextBlock>,
    #[serde(default)]
    pub to_do: Option<ToDoBlock>,
    #[serde(default)]
    pub code: Option<CodeBlock>,
    #[serde(default)]
    pub image: Option<FileObject>,
    #[serde(default)]
    pub bookmark: Option<BookmarkBlock>,
}

/// The common rich-text payload shared by paragraphs, headings, list
/// items, and quotes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextItem>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookmarkBlock {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: Option<Vec<RichTextItem>>,
}

/// Concatenates the plain text of a rich-text run.
pub fn plain_text(items: &[RichTextItem]) -> String {
    items.iter().map(|item| item.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn sparse_page_deserializes_with_empty_payloads() {
        let page: PageObject = serde_json::from_value(json!({
            "id": "1",
            "properties": {}
        }))
        .unwrap();
        assert!(!page.is_full());
        assert!(page.cover.is_none());
        assert!(page.properties.is_empty());
    }

    #[test]
    fn unknown_property_types_deserialize_to_empty_property() {
        let prop: Property = serde_json::from_value(json!({
            "id": "abc",
            "type": "status",
            "status": {"name": "Done"}
        }))
        .unwrap();
        assert!(prop.title.is_none());
        assert!(prop.rich_text.is_none());
        assert!(prop.multi_select.is_none());
    }

    #[test]
    fn cover_resolution_prefers_external_over_hosted() {
        let cover: FileObject = serde_json::from_value(json!({
            "type": "external",
            "external": {"url": "https://example.com/a.png"},
            "file": {"url": "https://files.notion.so/b.png"}
        }))
        .unwrap();
        assert_eq!(cover.resolve_url(), Some("https://example.com/a.png"));
    }

    #[test]
    fn plain_text_concatenates_runs() {
        let items = vec![
            RichTextItem {
                plain_text: "Hello ".into(),
            },
            RichTextItem {
                plain_text: "world".into(),
            },
        ];
        assert_eq!(plain_text(&items), "Hello world");
    }
}
