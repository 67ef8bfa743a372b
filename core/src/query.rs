//! Query parameters for listing todos.
//!
//! # Design
//! `QueryParams` is the raw bag handed over by the HTTP layer: one optional
//! string per recognized name, first occurrence wins. `resolve` validates it
//! into a `TodoQuery`, which is what the pipeline consumes. Keeping the two
//! apart means the pipeline never sees unparsed input and the error carries
//! exactly what the caller sent.

use crate::error::QueryError;
use crate::order::SortKey;

/// Raw, unvalidated list parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub owner: Option<String>,
    pub category: Option<String>,
    pub contains: Option<String>,
    pub status: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
}

impl QueryParams {
    /// Collect recognized parameters from query-string pairs. Unknown names
    /// are ignored; a repeated name keeps its first value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "owner" => &mut params.owner,
                "category" => &mut params.category,
                "contains" => &mut params.contains,
                "status" => &mut params.status,
                "orderBy" => &mut params.order_by,
                "limit" => &mut params.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_contains(mut self, term: impl Into<String>) -> Self {
        self.contains = Some(term.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_order_by(mut self, key: impl Into<String>) -> Self {
        self.order_by = Some(key.into());
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Validate into a `TodoQuery`.
    ///
    /// `contains` is checked before `limit`, the order the pipeline applies
    /// them in.
    pub fn resolve(&self) -> Result<TodoQuery, QueryError> {
        let contains = match &self.contains {
            Some(raw) => {
                let term = raw.trim();
                if term.is_empty() {
                    return Err(QueryError::EmptyContains(raw.clone()));
                }
                Some(term.to_string())
            }
            None => None,
        };

        let limit = self
            .limit
            .as_deref()
            .map(|raw| {
                raw.parse::<usize>()
                    .map_err(|_| QueryError::InvalidLimit(raw.to_string()))
            })
            .transpose()?;

        Ok(TodoQuery {
            owner: self.owner.clone(),
            contains,
            category: self.category.clone(),
            status: self.status.as_deref().map(|s| s == "complete"),
            order_by: self.order_by.as_deref().and_then(SortKey::parse),
            limit,
        })
    }
}

/// Validated list query. `None` fields are inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub owner: Option<String>,
    /// Already trimmed and non-empty.
    pub contains: Option<String>,
    pub category: Option<String>,
    pub status: Option<bool>,
    pub order_by: Option<SortKey>,
    pub limit: Option<usize>,
}
