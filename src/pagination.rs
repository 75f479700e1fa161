// src/pagination.rs
//! The pagination helper — resolves "which page of which content type to
//! fetch right now" from request query parameters.
//!
//! Two states only, re-derived on every call: if the query parameters
//! carry this kind's cursor key, continue from that cursor; otherwise
//! fetch the first page with the requested sort. No caching, no retry —
//! every call re-queries the source and failures propagate as-is.

use crate::adapter;
use crate::api::ContentSource;
use crate::config::DatabaseDirectory;
use crate::error::AppError;
use crate::model::PageBundle;
use crate::types::{ContentKind, SortOrder};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A request's query parameters: string keys to one-or-many values,
/// insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(IndexMap<String, Vec<String>>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (`a=1&b=2`, leading `?` tolerated).
    /// Repeated keys accumulate into a multi-valued entry.
    pub fn parse(query: &str) -> Self {
        let mut params = Self::new();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = urlencoding::decode(key).map(|k| k.into_owned());
            let value = urlencoding::decode(value).map(|v| v.into_owned());
            if let (Ok(key), Ok(value)) = (key, value) {
                params.append(key, value);
            }
        }
        params
    }

    /// Appends a value, widening an existing entry to multi-valued.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Sets a key to a single value, replacing any existing values but
    /// keeping the entry's position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let values = self.0.entry(key.into()).or_default();
        values.clear();
        values.push(value.into());
    }

    /// First value for a key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders back to a query string, percent-encoding keys and values,
    /// preserving entry order and repeating multi-valued keys.
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, values) in &self.0 {
            let key = urlencoding::encode(key);
            for value in values {
                pairs.push(format!("{}={}", key, urlencoding::encode(value)));
            }
        }
        pairs.join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

/// Adapted bundles keyed by content type.
///
/// Only the requested kind is populated per call today; the shape leaves
/// room for bundling several types into one render pass.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    bundles: HashMap<ContentKind, PageBundle>,
}

impl PageData {
    fn single(kind: ContentKind, bundle: PageBundle) -> Self {
        let mut bundles = HashMap::new();
        bundles.insert(kind, bundle);
        Self { bundles }
    }

    /// The bundle for a content type, if this data carries one.
    pub fn bundle(&self, kind: ContentKind) -> Option<&PageBundle> {
        self.bundles.get(&kind)
    }
}

/// Resolves and fetches the current page of one content type.
///
/// Holds no state between calls beyond its construction inputs; the
/// first-page/continuation decision is re-derived from the query
/// parameters every time.
pub struct Pagination<'a> {
    source: &'a dyn ContentSource,
    databases: &'a DatabaseDirectory,
    query: QueryParams,
    kind: ContentKind,
}

impl<'a> Pagination<'a> {
    pub fn new(
        source: &'a dyn ContentSource,
        databases: &'a DatabaseDirectory,
        query: QueryParams,
        kind: ContentKind,
    ) -> Self {
        Self {
            source,
            databases,
            query,
            kind,
        }
    }

    /// Fetches and adapts the page the query parameters point at.
    ///
    /// A cursor parameter for this kind means "continue from there";
    /// otherwise the first page is queried with `sort` applied to the
    /// kind's natural date-like field.
    pub async fn current_page_data(&self, sort: SortOrder) -> Result<PageData, AppError> {
        let database = self.databases.id_of(self.kind);

        let response = match self.query.get(self.kind.cursor_key()) {
            Some(cursor) => {
                log::debug!("{}: continuing from cursor {}", self.kind, cursor);
                self.source.query(database, Some(cursor), None).await?
            }
            None => {
                log::debug!("{}: fetching first page", self.kind);
                self.source
                    .query(database, None, Some(self.kind.sort(sort)))
                    .await?
            }
        };

        let bundle = adapter::adapt(&response, self.kind)?;
        Ok(PageData::single(self.kind, bundle))
    }

    /// Builds the relative URL of the next page, or `None` when the
    /// source reports no more data.
    ///
    /// Every existing query parameter is carried over unchanged; only
    /// this kind's cursor key is set to the new cursor.
    pub fn next_page_url(&self, data: &PageData) -> Option<String> {
        let bundle = data.bundle(self.kind)?;
        if !bundle.has_more {
            return None;
        }
        let cursor = bundle.next_cursor.as_deref()?;

        let mut params = self.query.clone();
        params.set(self.kind.cursor_key(), cursor);
        Some(format!("?{}", params.to_query_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentItem;
    use pretty_assertions::assert_eq;

    fn bundle(has_more: bool, next_cursor: Option<&str>) -> PageBundle {
        PageBundle {
            results: Vec::<ContentItem>::new(),
            has_more,
            next_cursor: next_cursor.map(String::from),
        }
    }

    #[test]
    fn query_string_round_trips_preserving_order() {
        let params = QueryParams::parse("?page=2&category=Nature&tag=a&tag=b");
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("category"), Some("Nature"));
        assert_eq!(params.get("tag"), Some("a"));
        assert_eq!(
            params.to_query_string(),
            "page=2&category=Nature&tag=a&tag=b"
        );
    }

    #[test]
    fn parse_decodes_and_render_re_encodes() {
        let params = QueryParams::parse("q=two%20words");
        assert_eq!(params.get("q"), Some("two words"));
        assert_eq!(params.to_query_string(), "q=two%20words");
    }

    #[test]
    fn next_page_url_is_none_without_more_data() {
        let fixture = crate::testing::MockSource::default();
        let databases = crate::testing::database_directory();
        let pagination = Pagination::new(
            &fixture,
            &databases,
            QueryParams::parse("category=All"),
            ContentKind::Image,
        );

        let data = PageData::single(ContentKind::Image, bundle(false, Some("cur_9")));
        assert_eq!(pagination.next_page_url(&data), None);
    }

    #[test]
    fn next_page_url_keeps_params_and_carries_the_cursor() {
        let fixture = crate::testing::MockSource::default();
        let databases = crate::testing::database_directory();
        let pagination = Pagination::new(
            &fixture,
            &databases,
            QueryParams::parse("page=1&category=Nature"),
            ContentKind::Image,
        );

        let data = PageData::single(ContentKind::Image, bundle(true, Some("cur_42")));
        let url = pagination.next_page_url(&data).unwrap();
        assert_eq!(url, "?page=1&category=Nature&images_cursor=cur_42");
    }

    #[test]
    fn next_page_url_replaces_a_previous_cursor_in_place() {
        let fixture = crate::testing::MockSource::default();
        let databases = crate::testing::database_directory();
        let pagination = Pagination::new(
            &fixture,
            &databases,
            QueryParams::parse("images_cursor=cur_old&category=City"),
            ContentKind::Image,
        );

        let data = PageData::single(ContentKind::Image, bundle(true, Some("cur_new")));
        let url = pagination.next_page_url(&data).unwrap();
        assert_eq!(url, "?images_cursor=cur_new&category=City");
    }
}
