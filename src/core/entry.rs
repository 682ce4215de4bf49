//! Changelog entry value types.
//!
//! # Public API
//! - [`Entry`]: One note filed under a category
//! - [`EntryId`]: Millisecond creation timestamp used as the file name

use crate::core::category::Category;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of an entry; also its file name inside the category folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    /// Identifier for the current instant
    pub fn now() -> Self {
        Self::from_millis(chrono::Utc::now().timestamp_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Next identifier in sequence, used when the current one is taken
    pub fn next(&self) -> Option<Self> {
        self.millis().map(|millis| Self::from_millis(millis + 1))
    }

    pub fn millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creation order: numeric identifiers ascending, then any other names lexically.
impl Ord for EntryId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.millis(), other.millis()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for EntryId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub category: Category,
    pub identifier: EntryId,
    pub content: String,
}
