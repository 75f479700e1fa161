// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest that handles authentication and the
//! three endpoints this crate uses. No retry, no backoff: a failed call
//! propagates to the caller as-is.

use super::responses::{BlockObject, PageObject, QueryDatabaseResponse};
use super::{parser, ContentSource};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use crate::types::{ApiKey, DatabaseId, PageId, QuerySort};
use reqwest::{header, Client, Response, StatusCode};
use serde_json::{json, Map, Value};

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A raw API response: status plus body text, kept together so parsing
/// can route errors through the Notion error envelope.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub data: String,
    pub url: String,
}

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    async fn get(&self, endpoint: &str) -> Result<ApiResponse, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::collect_response(url, response).await
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    async fn post(&self, endpoint: &str, body: &Value) -> Result<ApiResponse, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::collect_response(url, response).await
    }

    async fn collect_response(url: String, response: Response) -> Result<ApiResponse, AppError> {
        let status = response.status();
        let data = response.text().await?;
        Ok(ApiResponse { status, data, url })
    }

    /// Builds the query body: page size, optional cursor, optional sort.
    fn query_body(cursor: Option<&str>, sort: Option<QuerySort>) -> Value {
        let mut body = Map::new();
        body.insert("page_size".to_string(), json!(NOTION_API_PAGE_SIZE));
        if let Some(cursor) = cursor {
            body.insert("start_cursor".to_string(), json!(cursor));
        }
        if let Some(sort) = sort {
            body.insert("sorts".to_string(), json!([sort.to_value()]));
        }
        Value::Object(body)
    }
}

#[async_trait::async_trait]
impl ContentSource for NotionHttpClient {
    async fn query(
        &self,
        database: &DatabaseId,
        cursor: Option<&str>,
        sort: Option<QuerySort>,
    ) -> Result<QueryDatabaseResponse, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let body = Self::query_body(cursor, sort);
        let response = self.post(&endpoint, &body).await?;
        parser::parse_query_response(response)
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<PageObject, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        parser::parse_page_response(response)
    }

    async fn block_children(&self, id: &PageId) -> Result<Vec<BlockObject>, AppError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let endpoint = match &cursor {
                Some(c) => format!(
                    "blocks/{}/children?page_size={}&start_cursor={}",
                    id.to_hyphenated(),
                    NOTION_API_PAGE_SIZE,
                    urlencoding::encode(c)
                ),
                None => format!(
                    "blocks/{}/children?page_size={}",
                    id.to_hyphenated(),
                    NOTION_API_PAGE_SIZE
                ),
            };

            let response = self.get(&endpoint).await?;
            let page = parser::parse_blocks_response(response)?;

            let has_more = page.has_more;
            cursor = page.next_cursor.clone();
            blocks.extend(page.results);

            if !has_more || cursor.is_none() {
                break;
            }
        }

        Ok(blocks)
    }
}
