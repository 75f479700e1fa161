// src/config.rs
//! Process-wide configuration: API credential and one database per
//! content type, read once from the environment at startup. Absence of
//! any of them is an early startup failure, not a per-request one.

use crate::error::AppError;
use crate::types::{ApiKey, ContentKind, DatabaseId, SortOrder};
use clap::Parser;

const TOKEN_ENV_VAR: &str = "NOTION_TOKEN";

/// Parsed command-line input for the CLI binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Content type to list (blogs, activities, bookmarks, projects, images)
    #[arg(default_value = "blogs")]
    pub content: String,

    /// Continuation cursor from a previous page's next-page URL
    #[arg(short, long)]
    pub cursor: Option<String>,

    /// Sort order for first-page queries (asc or desc)
    #[arg(short, long, default_value = "desc")]
    pub sort: String,

    /// Render one page as markdown by its slug instead of listing
    #[arg(long)]
    pub slug: Option<String>,

    /// Emit the page bundle as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CommandLineInput {
    /// The content kind this invocation addresses.
    pub fn content_kind(&self) -> Result<ContentKind, AppError> {
        Ok(self.content.parse()?)
    }

    /// The requested sort order.
    pub fn sort_order(&self) -> Result<SortOrder, AppError> {
        Ok(self.sort.parse()?)
    }
}

/// One Notion database ID per content type. Lookup is total: the kind
/// enum is closed, so every kind always has a database.
#[derive(Debug, Clone)]
pub struct DatabaseDirectory {
    blogs: DatabaseId,
    activities: DatabaseId,
    bookmarks: DatabaseId,
    projects: DatabaseId,
    images: DatabaseId,
}

impl DatabaseDirectory {
    pub fn new(
        blogs: DatabaseId,
        activities: DatabaseId,
        bookmarks: DatabaseId,
        projects: DatabaseId,
        images: DatabaseId,
    ) -> Self {
        Self {
            blogs,
            activities,
            bookmarks,
            projects,
            images,
        }
    }

    /// The database holding a content kind's records.
    pub fn id_of(&self, kind: ContentKind) -> &DatabaseId {
        match kind {
            ContentKind::Blog => &self.blogs,
            ContentKind::Activity => &self.activities,
            ContentKind::Bookmark => &self.bookmarks,
            ContentKind::Project => &self.projects,
            ContentKind::Image => &self.images,
        }
    }
}

/// Resolved site configuration — validated and immutable for the life of
/// the process.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_key: ApiKey,
    pub databases: DatabaseDirectory,
}

impl SiteConfig {
    /// Resolves the configuration from the environment.
    ///
    /// Reads `NOTION_TOKEN` plus one `NOTION_*_DATABASE_ID` variable per
    /// content type; the first missing or malformed one fails startup.
    pub fn from_env() -> Result<Self, AppError> {
        let token = require_env(TOKEN_ENV_VAR)?;
        let api_key = ApiKey::new(token)?;

        let database = |kind: ContentKind| -> Result<DatabaseId, AppError> {
            let raw = require_env(kind.database_env_var())?;
            Ok(DatabaseId::parse(&raw)?)
        };

        Ok(Self {
            api_key,
            databases: DatabaseDirectory::new(
                database(ContentKind::Blog)?,
                database(ContentKind::Activity)?,
                database(ContentKind::Bookmark)?,
                database(ContentKind::Project)?,
                database(ContentKind::Image)?,
            ),
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name)
        .map_err(|_| AppError::MissingConfiguration(format!("{} environment variable not set", name)))
}
