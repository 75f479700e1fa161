// tests/pagination_flow.rs
//! End-to-end pagination flow against a canned content source: query
//! parameter resolution, adaptation, and next-page URL construction.

use async_trait::async_trait;
use notionfolio::responses::{BlockObject, PageObject, QueryDatabaseResponse};
use notionfolio::{
    AppError, ContentKind, ContentSource, DatabaseDirectory, DatabaseId, PageId, Pagination,
    QueryParams, QuerySort, SortOrder,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Mutex;

struct ReplaySource {
    responses: Mutex<Vec<QueryDatabaseResponse>>,
    queries: Mutex<Vec<(Option<String>, bool)>>,
}

impl ReplaySource {
    fn new(responses: Vec<QueryDatabaseResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn recorded_queries(&self) -> Vec<(Option<String>, bool)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for ReplaySource {
    async fn query(
        &self,
        _database: &DatabaseId,
        cursor: Option<&str>,
        sort: Option<QuerySort>,
    ) -> Result<QueryDatabaseResponse, AppError> {
        self.queries
            .lock()
            .unwrap()
            .push((cursor.map(String::from), sort.is_some()));
        Ok(self.responses.lock().unwrap().remove(0))
    }

    async fn retrieve_page(&self, _id: &PageId) -> Result<PageObject, AppError> {
        unimplemented!("not used by pagination")
    }

    async fn block_children(&self, _id: &PageId) -> Result<Vec<BlockObject>, AppError> {
        unimplemented!("not used by pagination")
    }
}

fn directory() -> DatabaseDirectory {
    let id = |n: u128| DatabaseId::parse(&format!("{:032x}", n)).unwrap();
    DatabaseDirectory::new(id(1), id(2), id(3), id(4), id(5))
}

fn image_page(id: &str, alt: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("https://www.notion.so/{}", id),
        "cover": {"external": {"url": format!("https://img.example/{}.jpg", id)}},
        "properties": {
            "name": {"id": "title", "type": "title", "title": [{"plain_text": alt}]},
            "createdAt": {"id": "ct", "type": "created_time", "created_time": "2024-06-01T08:00:00.000Z"},
        }
    })
}

fn response(results: Vec<serde_json::Value>, next_cursor: Option<&str>) -> QueryDatabaseResponse {
    serde_json::from_value(json!({
        "object": "list",
        "results": results,
        "next_cursor": next_cursor,
        "has_more": next_cursor.is_some(),
    }))
    .unwrap()
}

#[tokio::test]
async fn first_page_applies_sort_and_no_cursor() {
    let source = ReplaySource::new(vec![response(vec![image_page("i1", "Sunrise")], None)]);
    let databases = directory();
    let pagination = Pagination::new(
        &source,
        &databases,
        QueryParams::parse("category=Nature"),
        ContentKind::Image,
    );

    let data = pagination
        .current_page_data(SortOrder::Descending)
        .await
        .unwrap();

    assert_eq!(source.recorded_queries(), vec![(None, true)]);

    let bundle = data.bundle(ContentKind::Image).unwrap();
    assert_eq!(bundle.results.len(), 1);
    assert!(!bundle.has_more);
    assert_eq!(pagination.next_page_url(&data), None);
}

#[tokio::test]
async fn cursor_parameter_continues_without_sort() {
    let source = ReplaySource::new(vec![response(vec![image_page("i2", "Dusk")], None)]);
    let databases = directory();
    let pagination = Pagination::new(
        &source,
        &databases,
        QueryParams::parse("images_cursor=cur_abc&category=City"),
        ContentKind::Image,
    );

    pagination
        .current_page_data(SortOrder::Descending)
        .await
        .unwrap();

    assert_eq!(
        source.recorded_queries(),
        vec![(Some("cur_abc".to_string()), false)]
    );
}

#[tokio::test]
async fn next_page_url_carries_cursor_and_existing_params() {
    let source = ReplaySource::new(vec![response(
        vec![image_page("i3", "Noon")],
        Some("cur_next_7"),
    )]);
    let databases = directory();
    let pagination = Pagination::new(
        &source,
        &databases,
        QueryParams::parse("page=3&category=Village"),
        ContentKind::Image,
    );

    let data = pagination
        .current_page_data(SortOrder::Ascending)
        .await
        .unwrap();

    let url = pagination.next_page_url(&data).unwrap();
    assert_eq!(url, "?page=3&category=Village&images_cursor=cur_next_7");
}

#[tokio::test]
async fn each_call_requeries_the_source() {
    let source = ReplaySource::new(vec![
        response(vec![image_page("i4", "One")], None),
        response(vec![image_page("i5", "Two")], None),
    ]);
    let databases = directory();
    let pagination = Pagination::new(
        &source,
        &databases,
        QueryParams::new(),
        ContentKind::Image,
    );

    pagination
        .current_page_data(SortOrder::Descending)
        .await
        .unwrap();
    pagination
        .current_page_data(SortOrder::Descending)
        .await
        .unwrap();

    assert_eq!(source.recorded_queries().len(), 2);
}

#[tokio::test]
async fn incomplete_record_aborts_the_page() {
    let source = ReplaySource::new(vec![response(
        vec![
            image_page("i6", "Kept"),
            json!({"id": "stub", "properties": {}}),
        ],
        None,
    )]);
    let databases = directory();
    let pagination = Pagination::new(
        &source,
        &databases,
        QueryParams::new(),
        ContentKind::Image,
    );

    let err = pagination
        .current_page_data(SortOrder::Descending)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
}
