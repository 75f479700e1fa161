// src/testing.rs
//! Shared fixtures for unit tests: a canned `ContentSource` and a filled
//! database directory.

use crate::api::responses::{BlockObject, PageObject, QueryDatabaseResponse};
use crate::api::ContentSource;
use crate::config::DatabaseDirectory;
use crate::error::AppError;
use crate::types::{DatabaseId, PageId, QuerySort};
use std::sync::Mutex;

/// A `ContentSource` that replays canned responses and records the
/// arguments of every query it receives.
#[derive(Default)]
pub struct MockSource {
    /// Responses served in order; empty means "serve an empty page".
    pub responses: Mutex<Vec<QueryDatabaseResponse>>,
    /// `(cursor, had_sort)` per query call, in order.
    pub queries: Mutex<Vec<(Option<String>, bool)>>,
}

fn empty_response() -> QueryDatabaseResponse {
    serde_json::from_str(r#"{"object":"list","results":[],"next_cursor":null,"has_more":false}"#)
        .expect("static fixture parses")
}

#[async_trait::async_trait]
impl ContentSource for MockSource {
    async fn query(
        &self,
        _database: &DatabaseId,
        cursor: Option<&str>,
        sort: Option<QuerySort>,
    ) -> Result<QueryDatabaseResponse, AppError> {
        self.queries
            .lock()
            .expect("mock lock")
            .push((cursor.map(String::from), sort.is_some()));

        let mut responses = self.responses.lock().expect("mock lock");
        if responses.is_empty() {
            Ok(empty_response())
        } else {
            Ok(responses.remove(0))
        }
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<PageObject, AppError> {
        Ok(serde_json::from_value(serde_json::json!({
            "id": id.as_str(),
            "url": format!("https://www.notion.so/{}", id.as_str()),
            "properties": {},
        }))
        .expect("static fixture parses"))
    }

    async fn block_children(&self, _id: &PageId) -> Result<Vec<BlockObject>, AppError> {
        Ok(Vec::new())
    }
}

/// A directory with five distinct, valid database IDs.
pub fn database_directory() -> DatabaseDirectory {
    let id = |n: u128| DatabaseId::parse(&format!("{:032x}", n)).expect("valid test id");
    DatabaseDirectory::new(id(1), id(2), id(3), id(4), id(5))
}
