// src/model/mod.rs
//! Domain model — normalized view records and slug derivation.

mod record;
mod slug;

pub use record::{Activity, Blog, Bookmark, ContentItem, Image, PageBundle, Project};
pub use slug::{page_id_from_slug, Slug};
