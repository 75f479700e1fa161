// src/model/record.rs
//! Flat view records, one shape per content type.
//!
//! These are what rendering layers consume: immutable, fully defaulted,
//! reconstructed on every request. Optional source fields never survive
//! as options here — the adapter resolves them to `""`, `[]`, `0`, or
//! `false` at the boundary.

use crate::types::ContentKind;
use serde::Serialize;

/// A blog post listing entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// Creation date, RFC 3339 as the source reports it.
    pub date: String,
    /// Space-joined tag names.
    pub category: String,
    pub description: String,
    /// Cover URL, falling back to the placeholder constant.
    pub image: String,
    pub read_time: u32,
    /// URL-escaped slug.
    pub slug: String,
    /// Unescaped slug, `<title>#<id>`.
    pub decoded_slug: String,
}

/// A timeline activity entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    /// Comma-joined tag names.
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
}

/// A shared bookmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bookmark {
    pub id: String,
    pub name: String,
    /// Comma-joined tag names.
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
    pub description: String,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    pub description: String,
    pub year: u32,
    pub image: String,
    /// Technology tags, kept as a list rather than joined.
    pub stack: Vec<String>,
    pub github_link: String,
    pub preview_link: String,
    pub is_completed: bool,
    pub slug: String,
    pub decoded_slug: String,
}

/// A gallery image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    pub id: String,
    pub alt: String,
    pub src: String,
    pub date: String,
}

/// One normalized record, tagged by content type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    Blog(Blog),
    Activity(Activity),
    Bookmark(Bookmark),
    Project(Project),
    Image(Image),
}

impl ContentItem {
    /// The content type this record belongs to.
    pub fn content_kind(&self) -> ContentKind {
        match self {
            ContentItem::Blog(_) => ContentKind::Blog,
            ContentItem::Activity(_) => ContentKind::Activity,
            ContentItem::Bookmark(_) => ContentKind::Bookmark,
            ContentItem::Project(_) => ContentKind::Project,
            ContentItem::Image(_) => ContentKind::Image,
        }
    }

    /// The source-assigned identifier.
    pub fn id(&self) -> &str {
        match self {
            ContentItem::Blog(b) => &b.id,
            ContentItem::Activity(a) => &a.id,
            ContentItem::Bookmark(b) => &b.id,
            ContentItem::Project(p) => &p.id,
            ContentItem::Image(i) => &i.id,
        }
    }
}

/// One adapted page of results plus forward-navigation state.
///
/// Produced fresh per request, never cached or mutated after
/// construction. `results` preserve source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBundle {
    pub results: Vec<ContentItem>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}
