// src/api/parser.rs
//! Turns raw HTTP responses into typed wire objects or typed errors.

use super::client::ApiResponse;
use super::responses::{BlockChildrenResponse, NotionErrorEnvelope, PageObject, QueryDatabaseResponse};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use reqwest::StatusCode;

/// Parse any Notion API response body, routing non-2xx statuses through
/// the error envelope.
pub fn parse_api_response<T>(result: ApiResponse) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_body(&result.data, &result.url)
    } else {
        Err(parse_error_body(&result.data, result.status, &result.url))
    }
}

fn parse_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(body)))
    })
}

fn parse_error_body(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(envelope) = serde_json::from_str::<NotionErrorEnvelope>(body) {
        return AppError::NotionService {
            code: NotionErrorCode::from_api_response(&envelope.code),
            message: envelope.message,
            status,
        };
    }

    // Fallback to a generic error with the HTTP status code
    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Parse a database query response.
pub fn parse_query_response(result: ApiResponse) -> Result<QueryDatabaseResponse, AppError> {
    parse_api_response(result)
}

/// Parse a single-page retrieve response.
pub fn parse_page_response(result: ApiResponse) -> Result<PageObject, AppError> {
    parse_api_response(result)
}

/// Parse a block-children listing response.
pub fn parse_blocks_response(result: ApiResponse) -> Result<BlockChildrenResponse, AppError> {
    parse_api_response(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            data: body.to_string(),
            url: "https://api.notion.com/v1/test".to_string(),
        }
    }

    #[test]
    fn error_envelope_becomes_typed_service_error() {
        let body = r#"{"object":"error","status":404,"code":"object_not_found","message":"Could not find database"}"#;
        let err = parse_query_response(response(404, body)).unwrap_err();
        match err {
            AppError::NotionService { code, message, .. } => {
                assert_eq!(code, NotionErrorCode::ObjectNotFound);
                assert!(message.contains("Could not find database"));
            }
            other => panic!("expected NotionService, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_error_body_falls_back_to_http_status() {
        let err = parse_query_response(response(502, "<html>bad gateway</html>")).unwrap_err();
        match err {
            AppError::NotionService { code, .. } => {
                assert_eq!(code, NotionErrorCode::HttpStatus(502));
            }
            other => panic!("expected NotionService, got {:?}", other),
        }
    }

    #[test]
    fn malformed_success_body_is_reported_with_a_preview() {
        let err = parse_query_response(response(200, "{not json")).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn success_body_parses_into_wire_types() {
        let body = r#"{"object":"list","results":[],"next_cursor":null,"has_more":false}"#;
        let parsed = parse_query_response(response(200, body)).unwrap();
        assert!(parsed.results.is_empty());
        assert!(!parsed.has_more);
    }
}
