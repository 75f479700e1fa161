// src/lib.rs
//! notionfolio library — fetches and normalizes personal-site content
//! from Notion databases.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `SiteConfig`, `DatabaseDirectory`
//! - **Domain model** — `ContentItem`, `PageBundle`, `Slug`, per-type records
//! - **Domain types** — `ContentKind`, `ApiKey`, `PageId`, `DatabaseId`
//! - **API client** — `ContentSource`, `NotionHttpClient`, wire types
//! - **Adapter** — `adapt`, `adapt_record`
//! - **Pagination** — `Pagination`, `QueryParams`, `PageData`
//! - **Markdown** — `render_blocks`, `page_markdown_by_slug`

mod adapter;
mod api;
mod config;
mod constants;
mod error;
mod markdown;
mod model;
mod pagination;
mod types;

#[cfg(test)]
mod testing;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, DatabaseDirectory, SiteConfig};

// --- Domain Model ---
pub use crate::model::{
    page_id_from_slug, Activity, Blog, Bookmark, ContentItem, Image, PageBundle, Project, Slug,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, ContentKind, DatabaseId, PageId, QuerySort, SortField, SortOrder};

// --- API Client ---
pub use crate::api::{responses, ContentSource, NotionHttpClient};

// --- Adapter ---
pub use crate::adapter::{adapt, adapt_record};

// --- Pagination ---
pub use crate::pagination::{PageData, Pagination, QueryParams};

// --- Markdown ---
pub use crate::markdown::{page_markdown_by_slug, render_blocks};

// --- Constants rendering layers rely on ---
pub use crate::constants::{PAGINATION_DISPLAY_THRESHOLD, PLACEHOLDER_COVER_URL};
