// src/types/kind.rs
//! The closed set of content types the site publishes.
//!
//! Every dispatch over content types goes through `ContentKind`, so adding
//! a type means the compiler points at every place that must handle it.

use super::ValidationError;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// A content type served by the site, one per Notion database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Blog,
    Activity,
    Bookmark,
    Project,
    Image,
}

impl ContentKind {
    /// All content kinds, for iteration.
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Blog,
        ContentKind::Activity,
        ContentKind::Bookmark,
        ContentKind::Project,
        ContentKind::Image,
    ];

    /// The plural page key this kind is addressed by in routes and
    /// rendered bundles.
    pub fn page_key(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blogs",
            ContentKind::Activity => "activities",
            ContentKind::Bookmark => "bookmarks",
            ContentKind::Project => "projects",
            ContentKind::Image => "images",
        }
    }

    /// The query parameter carrying this kind's continuation cursor.
    pub fn cursor_key(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blogs_cursor",
            ContentKind::Activity => "activities_cursor",
            ContentKind::Bookmark => "bookmarks_cursor",
            ContentKind::Project => "projects_cursor",
            ContentKind::Image => "images_cursor",
        }
    }

    /// Environment variable naming this kind's Notion database ID.
    pub fn database_env_var(&self) -> &'static str {
        match self {
            ContentKind::Blog => "NOTION_BLOG_DATABASE_ID",
            ContentKind::Activity => "NOTION_ACTIVITY_DATABASE_ID",
            ContentKind::Bookmark => "NOTION_BOOKMARK_DATABASE_ID",
            ContentKind::Project => "NOTION_PROJECT_DATABASE_ID",
            ContentKind::Image => "NOTION_IMAGE_DATABASE_ID",
        }
    }

    /// The natural date-like field first-page queries sort by.
    ///
    /// Activities carry an explicit `date` property; every other kind
    /// sorts by creation time.
    pub fn sort_field(&self) -> SortField {
        match self {
            ContentKind::Activity => SortField::Property("date"),
            _ => SortField::Timestamp("created_time"),
        }
    }

    /// Builds the sort descriptor for a first-page query.
    pub fn sort(&self, order: SortOrder) -> QuerySort {
        QuerySort {
            field: self.sort_field(),
            order,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.page_key())
    }
}

impl FromStr for ContentKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blog" | "blogs" => Ok(ContentKind::Blog),
            "activity" | "activities" => Ok(ContentKind::Activity),
            "bookmark" | "bookmarks" => Ok(ContentKind::Bookmark),
            "project" | "projects" => Ok(ContentKind::Project),
            "image" | "images" => Ok(ContentKind::Image),
            other => Err(ValidationError::UnknownContentKind(other.to_string())),
        }
    }
}

/// Direction applied to the kind's natural date-like field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn direction(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(ValidationError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// What a query sorts on: a page timestamp or a named property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Timestamp(&'static str),
    Property(&'static str),
}

/// A single sort descriptor for a database query body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySort {
    pub field: SortField,
    pub order: SortOrder,
}

impl QuerySort {
    /// Renders the descriptor in the Notion query wire format.
    pub fn to_value(&self) -> Value {
        match self.field {
            SortField::Timestamp(name) => json!({
                "timestamp": name,
                "direction": self.order.direction(),
            }),
            SortField::Property(name) => json!({
                "property": name,
                "direction": self.order.direction(),
            }),
        }
    }
}
