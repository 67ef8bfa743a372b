//! Ordering selector for `orderBy`.

use std::cmp::Ordering;

use crate::types::Todo;

/// Field a result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Owner,
    Category,
    Body,
    Status,
}

impl SortKey {
    /// Map an `orderBy` value to a key. Names are case-sensitive; anything
    /// else yields `None` and the result stays in its current order.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(Self::Owner),
            "category" => Some(Self::Category),
            "body" => Some(Self::Body),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Ascending comparison on this key. `status` sorts incomplete (`false`)
    /// before complete (`true`).
    pub fn comparator(self) -> fn(&Todo, &Todo) -> Ordering {
        match self {
            Self::Owner => by_owner,
            Self::Category => by_category,
            Self::Body => by_body,
            Self::Status => by_status,
        }
    }
}

fn by_owner(a: &Todo, b: &Todo) -> Ordering {
    a.owner.cmp(&b.owner)
}

fn by_category(a: &Todo, b: &Todo) -> Ordering {
    a.category.cmp(&b.category)
}

fn by_body(a: &Todo, b: &Todo) -> Ordering {
    a.body.cmp(&b.body)
}

fn by_status(a: &Todo, b: &Todo) -> Ordering {
    a.status.cmp(&b.status)
}
