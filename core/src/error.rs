//! Error types for loading and querying the record set.
//!
//! # Design
//! Two families with different lifetimes. `LoadError` only happens at
//! startup and is fatal: the service must not serve without data.
//! `QueryError` is per request and always recoverable; the HTTP layer turns
//! it into a 400 or 404 response. The messages here are the exact messages
//! returned to callers.

use std::path::PathBuf;

use thiserror::Error;

/// The data source could not be turned into a record set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file is missing or unreadable.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data is not a JSON array of complete todo objects.
    #[error("malformed todo data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same `_id`.
    #[error("duplicate todo id {0}")]
    DuplicateId(String),
}

/// A request against the record set could not be answered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// `limit` is not a non-negative integer. Carries the raw value.
    #[error("Specified limit '{0}' can't be parsed to an integer")]
    InvalidLimit(String),

    /// `contains` is empty once surrounding whitespace is trimmed. Carries
    /// the raw value.
    #[error("Specified String '{0}' is not a valid input")]
    EmptyContains(String),

    /// No record has the requested id.
    #[error("No todo with id {0} was found.")]
    NotFound(String),
}

impl QueryError {
    /// True for malformed caller input, false for a missing record.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidLimit(_) | Self::EmptyContains(_))
    }
}
