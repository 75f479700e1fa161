// src/adapter.rs
//! The record adapter — one raw query page in, one `PageBundle` out.
//!
//! This is a pure transform. Completeness is the only thing validated:
//! a record the API did not fully resolve fails the whole batch, with no
//! partial results. Everything else degrades silently — every optional
//! field reads defensively and substitutes a type-appropriate default
//! rather than failing.
//!
//! Join separators differ per content type: activities and bookmarks
//! comma-join their tags, blog categories space-join, project stacks stay
//! a list. Rendering layers depend on each form.

use crate::api::responses::{PageObject, Property, QueryDatabaseResponse};
use crate::constants::PLACEHOLDER_COVER_URL;
use crate::model::{Activity, Blog, Bookmark, ContentItem, Image, PageBundle, Project, Slug};
use crate::types::{ContentKind, ValidationError};

/// Adapts one raw page of query results into a normalized bundle.
///
/// Results preserve source order. Fails with
/// [`ValidationError::IncompleteRecord`] if any record is a partial
/// reference stub.
pub fn adapt(
    response: &QueryDatabaseResponse,
    kind: ContentKind,
) -> Result<PageBundle, ValidationError> {
    let results = response
        .results
        .iter()
        .map(|page| adapt_record(page, kind))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PageBundle {
        results,
        has_more: response.has_more,
        next_cursor: response.next_cursor.clone(),
    })
}

/// Adapts a single record after checking completeness.
pub fn adapt_record(page: &PageObject, kind: ContentKind) -> Result<ContentItem, ValidationError> {
    if !page.is_full() {
        return Err(ValidationError::IncompleteRecord {
            id: page.id.clone(),
        });
    }

    Ok(match kind {
        ContentKind::Blog => ContentItem::Blog(adapt_blog(page)),
        ContentKind::Activity => ContentItem::Activity(adapt_activity(page)),
        ContentKind::Bookmark => ContentItem::Bookmark(adapt_bookmark(page)),
        ContentKind::Project => ContentItem::Project(adapt_project(page)),
        ContentKind::Image => ContentItem::Image(adapt_image(page)),
    })
}

fn adapt_blog(page: &PageObject) -> Blog {
    let title = title_text(page, "title");
    let slug = Slug::derive(&title, &page.id);

    Blog {
        id: page.id.clone(),
        date: created_time(page, "createdAt"),
        category: tag_names(page, "category").join(" "),
        description: rich_text(page, "description"),
        image: cover_url(page),
        read_time: number(page, "readTime") as u32,
        slug: slug.encoded,
        decoded_slug: slug.decoded,
        title,
    }
}

fn adapt_activity(page: &PageObject) -> Activity {
    Activity {
        id: page.id.clone(),
        kind: tag_names(page, "type").join(","),
        name: title_text(page, "name"),
        date: date_start(page, "date"),
    }
}

fn adapt_bookmark(page: &PageObject) -> Bookmark {
    Bookmark {
        id: page.id.clone(),
        kind: tag_names(page, "type").join(","),
        name: title_text(page, "name"),
        link: rich_text(page, "link"),
        description: rich_text(page, "description"),
    }
}

fn adapt_project(page: &PageObject) -> Project {
    let name = title_text(page, "name");
    let slug = Slug::derive(&name, &page.id);

    Project {
        id: page.id.clone(),
        date: created_time(page, "createdAt"),
        // Project type is a rich_text property upstream, not a tag list
        kind: rich_text(page, "type"),
        description: rich_text(page, "description"),
        year: number(page, "year") as u32,
        image: cover_url(page),
        stack: tag_names(page, "stack"),
        github_link: rich_text(page, "githubLink"),
        preview_link: rich_text(page, "previewLink"),
        is_completed: checkbox(page, "isCompleted"),
        slug: slug.encoded,
        decoded_slug: slug.decoded,
        name,
    }
}

fn adapt_image(page: &PageObject) -> Image {
    Image {
        id: page.id.clone(),
        alt: title_text(page, "name"),
        src: cover_url(page),
        date: created_time(page, "createdAt"),
    }
}

// --- Defensive field extraction ---
//
// Each helper reads one property shape and resolves absence (of the
// property, its payload, or its first element) to the type's default.

fn property<'a>(page: &'a PageObject, name: &str) -> Option<&'a Property> {
    page.properties.get(name)
}

fn title_text(page: &PageObject, name: &str) -> String {
    property(page, name)
        .and_then(|p| p.title.as_ref())
        .and_then(|runs| runs.first())
        .map(|run| run.plain_text.clone())
        .unwrap_or_default()
}

fn rich_text(page: &PageObject, name: &str) -> String {
    property(page, name)
        .and_then(|p| p.rich_text.as_ref())
        .and_then(|runs| runs.first())
        .map(|run| run.plain_text.clone())
        .unwrap_or_default()
}

fn tag_names(page: &PageObject, name: &str) -> Vec<String> {
    property(page, name)
        .and_then(|p| p.multi_select.as_ref())
        .map(|tags| tags.iter().map(|tag| tag.name.clone()).collect())
        .unwrap_or_default()
}

fn number(page: &PageObject, name: &str) -> f64 {
    property(page, name).and_then(|p| p.number).unwrap_or(0.0)
}

fn checkbox(page: &PageObject, name: &str) -> bool {
    property(page, name)
        .and_then(|p| p.checkbox)
        .unwrap_or(false)
}

fn date_start(page: &PageObject, name: &str) -> String {
    property(page, name)
        .and_then(|p| p.date.as_ref())
        .and_then(|d| d.start.clone())
        .unwrap_or_default()
}

fn created_time(page: &PageObject, name: &str) -> String {
    property(page, name)
        .and_then(|p| p.created_time.clone())
        .unwrap_or_default()
}

fn cover_url(page: &PageObject) -> String {
    page.cover
        .as_ref()
        .and_then(|cover| cover.resolve_url())
        .unwrap_or(PLACEHOLDER_COVER_URL)
        .to_string()
}
