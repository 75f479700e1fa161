// src/api/mod.rs
//! Notion API interaction — the ability to retrieve content from a workspace.
//!
//! Clear separation between I/O operations, parsing, and business logic:
//! `client` does HTTP, `parser` decodes, `responses` holds the wire shapes.

pub mod client;
pub mod parser;
pub mod responses;

use crate::error::AppError;
use crate::types::{DatabaseId, PageId, QuerySort};
use responses::{BlockObject, PageObject, QueryDatabaseResponse};

/// The ability to retrieve content from a Notion workspace.
///
/// This is the fundamental algebra for API interaction. Business logic
/// depends on this trait, never on HTTP details, and tests implement it
/// with canned fixtures.
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// One page of a database query. First-page queries pass a sort and
    /// no cursor; continuation queries pass the cursor alone.
    async fn query(
        &self,
        database: &DatabaseId,
        cursor: Option<&str>,
        sort: Option<QuerySort>,
    ) -> Result<QueryDatabaseResponse, AppError>;

    /// A single fully resolved page.
    async fn retrieve_page(&self, id: &PageId) -> Result<PageObject, AppError>;

    /// All content blocks of a page, following internal pagination.
    async fn block_children(&self, id: &PageId) -> Result<Vec<BlockObject>, AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
