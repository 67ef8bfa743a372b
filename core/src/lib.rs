//! Read-only todo record set and its query pipeline.
//!
//! # Overview
//! The record set is loaded once from a JSON array and never changes.
//! Listing runs a filter → order → limit pipeline driven by query parameters;
//! lookup fetches a single record by id.
//!
//! # Design
//! - `RecordStore` owns the records and is shared read-only across workers.
//! - `QueryParams` is the raw parameter bag; `resolve` validates it into a
//!   `TodoQuery` before any record is touched.
//! - `pipeline::run` is a pure function and borrows the records it returns.
//! - Nothing here knows about HTTP; the server crate maps `QueryError` to
//!   status codes.

pub mod error;
pub mod order;
pub mod pipeline;
pub mod query;
pub mod store;
pub mod types;

pub use error::{LoadError, QueryError};
pub use order::SortKey;
pub use query::{QueryParams, TodoQuery};
pub use store::RecordStore;
pub use types::Todo;
