// src/model/slug.rs
//! Slug derivation for slug-bearing content (blogs, projects).
//!
//! A slug is the lowercased title with spaces replaced by hyphens,
//! followed by `#` and the page id, URL-escaped as a whole. The page id
//! is recoverable from the unescaped form, which makes the slug the sole
//! lookup key for single-item fetches — there is no separate slug index.

use crate::error::AppError;
use crate::types::PageId;
use std::borrow::Cow;

/// Both forms of a derived slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug {
    /// URL-escaped form, safe to embed in a path segment.
    pub encoded: String,
    /// Human-readable form, `<title-with-hyphens>#<page id>`.
    pub decoded: String,
}

impl Slug {
    /// Derives a slug from a record's title and source-assigned id.
    pub fn derive(title: &str, id: &str) -> Self {
        let decoded = format!("{}#{}", title.to_lowercase().replace(' ', "-"), id);
        let encoded = urlencoding::encode(&decoded).into_owned();
        Slug { encoded, decoded }
    }
}

/// Extracts the page id from a slug, accepting either form.
pub fn page_id_from_slug(slug: &str) -> Result<PageId, AppError> {
    let decoded: Cow<'_, str> =
        urlencoding::decode(slug).map_err(|_| AppError::InvalidSlug(slug.to_string()))?;

    let raw_id = decoded
        .split('#')
        .nth(1)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidSlug(slug.to_string()))?;

    PageId::parse(raw_id).map_err(|_| AppError::InvalidSlug(slug.to_string()))
}
