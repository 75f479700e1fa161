// src/types/mod.rs
use thiserror::Error;

mod domain_types;
mod ids;
mod kind;

pub use domain_types::*;
pub use ids::*;
pub use kind::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid API token format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Record {id} is not fully resolved")]
    IncompleteRecord { id: String },

    #[error("Unknown content type: {0}")]
    UnknownContentKind(String),

    #[error("Unknown sort order: {0} (expected 'asc' or 'desc')")]
    UnknownSortOrder(String),
}
