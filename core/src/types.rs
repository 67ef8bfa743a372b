//! Domain record served by the todo API.
//!
//! # Design
//! `Todo` is an immutable value: it is built once when the data file is
//! loaded and never modified afterwards. The identifier is stored as `id` but
//! travels as `_id` on the wire, matching the layout of the bundled data file.

use serde::{Deserialize, Serialize};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: String,
    pub owner: String,
    /// `true` when the task is complete.
    pub status: bool,
    pub body: String,
    pub category: String,
}
