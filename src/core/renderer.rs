//! Release notes rendering.
//!
//! Rendering is split in two steps: [`collect`] reads a bucket into
//! [`Section`]s through the store, and [`format_notes`] turns sections into
//! Markdown text. Neither step writes to disk.
//!
//! # Output Format
//! ```text
//! ## [1.0.0] - 2021-01-01
//!
//! ### Added
//!
//! - Did X
//!
//! ### Fixed
//!
//! - Fixed Y
//! ```
//! Categories always appear in canonical order and empty ones are omitted.
//! Entries inside a category appear oldest first.

use crate::core::{category::Category, entry::Entry, error::Result, store::ChangelogStore};
use std::fmt::Write;
use std::path::Path;

/// One rendered category with its entries
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: Category,
    pub entries: Vec<Entry>,
}

/// Read every non-empty category of `bucket` in canonical order
pub fn collect(store: &ChangelogStore, bucket: &Path) -> Result<Vec<Section>> {
    let mut sections = Vec::new();
    for category in Category::ALL {
        let entries = store.read_entries(bucket, category)?;
        if !entries.is_empty() {
            sections.push(Section { category, entries });
        }
    }

    log::debug!(
        "Collected {} sections from {}",
        sections.len(),
        bucket.display()
    );
    Ok(sections)
}

/// Format sections under a `## {header}` line
pub fn format_notes(header: &str, sections: &[Section]) -> String {
    let mut notes = format!("## {header}\n");

    for (index, section) in sections
        .iter()
        .filter(|s| !s.entries.is_empty())
        .enumerate()
    {
        // Blank line between the previous section's last bullet and this heading
        if index > 0 {
            notes.push('\n');
        }
        let _ = write!(notes, "\n### {}\n", section.category.title());
        for entry in &section.entries {
            let _ = write!(notes, "\n- {}", entry.content);
        }
    }

    notes
}

/// Render a whole bucket
pub fn render(store: &ChangelogStore, bucket: &Path, header: &str) -> Result<String> {
    let sections = collect(store, bucket)?;
    Ok(format_notes(header, &sections))
}
