//! Type-safe changelog category enumeration.
//!
//! This module defines [`Category`], the fixed set of change kinds every entry is
//! filed under. The declaration order is the canonical order used when rendering
//! release notes and when walking a bucket.
//!
//! # Public API
//! - [`Category`]: The six change kinds
//! - [`Category::ALL`]: Canonical ordering

use crate::core::error::ChangelogError;
use crate::core::format::title_case;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Added,
    Changed,
    Deprecated,
    Removed,
    Fixed,
    Security,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 6] = [
        Category::Added,
        Category::Changed,
        Category::Deprecated,
        Category::Removed,
        Category::Fixed,
        Category::Security,
    ];

    /// Folder name and command-line spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Added => "added",
            Category::Changed => "changed",
            Category::Deprecated => "deprecated",
            Category::Removed => "removed",
            Category::Fixed => "fixed",
            Category::Security => "security",
        }
    }

    /// Section heading used in rendered notes
    pub fn title(&self) -> String {
        title_case(self.as_str())
    }

    /// `added|changed|...` for usage text
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChangelogError::unknown_category(s))
    }
}
