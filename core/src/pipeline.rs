//! Filter → order → limit over the record set.
//!
//! # Design
//! `run` is a pure function of the records and a validated `TodoQuery`. It
//! borrows the records instead of cloning them, so callers that only
//! serialize the result pay nothing per request beyond the `Vec` of
//! references.
//!
//! Filters run in a fixed order (`owner`, `contains`, `category`, `status`)
//! and each narrows the previous output. Ordering sees only the filtered
//! records and the limit always keeps a prefix of the ordered result.

use tracing::debug;

use crate::query::TodoQuery;
use crate::types::Todo;

/// Apply `query` to `todos` and return the matching records.
pub fn run<'a>(todos: &'a [Todo], query: &TodoQuery) -> Vec<&'a Todo> {
    let mut matched: Vec<&Todo> = todos.iter().collect();

    if let Some(owner) = &query.owner {
        matched.retain(|todo| todo.owner == *owner);
    }
    if let Some(term) = &query.contains {
        matched.retain(|todo| todo.body.contains(term.as_str()));
    }
    if let Some(category) = &query.category {
        matched.retain(|todo| todo.category == *category);
    }
    if let Some(status) = query.status {
        matched.retain(|todo| todo.status == status);
    }
    let filtered = matched.len();

    if let Some(key) = query.order_by {
        let compare = key.comparator();
        matched.sort_by(|a, b| compare(a, b));
    }

    if let Some(limit) = query.limit {
        matched.truncate(limit);
    }

    debug!(
        total = todos.len(),
        filtered,
        returned = matched.len(),
        "ran todo query"
    );
    matched
}
