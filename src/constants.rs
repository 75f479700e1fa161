// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips when listing content.
pub const NOTION_API_PAGE_SIZE: usize = 100;

// ---------------------------------------------------------------------------
// Content presentation
// ---------------------------------------------------------------------------

/// Cover image used when a record carries neither an external nor a
/// hosted cover file.
pub const PLACEHOLDER_COVER_URL: &str =
    "https://source.unsplash.com/a-person-standing-on-top-of-a-mountain-nMzbnMzMjYU";

/// Item count above which callers render a next-page affordance.
///
/// This is a presentation policy for rendering layers, not something the
/// pagination helper enforces.
pub const PAGINATION_DISPLAY_THRESHOLD: usize = 24;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
