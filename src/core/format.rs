//! Pure text helpers used for folder names and rendered headings.
//!
//! # Public API
//! - [`title_case`]: Capitalize every whitespace-delimited word
//! - [`pad_number`]: Zero-pad a version component to three digits
//! - [`version_to_folder_name`]: Sortable folder name for a `major.minor.patch` version
//! - [`date_to_string`] / [`today`]: `YYYY-MM-DD` dates for release headers
//!
//! # Folder Encoding
//! Version folders are `MMM-mmm-ppp`, so a plain lexicographic listing of the
//! `released` bucket is also numeric version order. Components above 999 would
//! break that property and are rejected.

use crate::core::error::{ChangelogError, Result};
use chrono::Datelike;

/// Largest version component that still fits the fixed-width folder encoding
pub const MAX_VERSION_COMPONENT: u64 = 999;

/// Capitalize the first letter or digit of every whitespace-delimited word and
/// lower-case the rest. Leading symbols such as `(` and all whitespace are kept.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            result.push(ch);
        } else if at_word_start && !is_word_char(ch) {
            result.push(ch);
        } else if at_word_start {
            at_word_start = false;
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
    }

    result
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Zero-pad a numeric component to three digits.
///
/// Values above 999 and non-numeric input come back unchanged.
pub fn pad_number(num: &str) -> String {
    match num.parse::<u64>() {
        Ok(n) if n <= MAX_VERSION_COMPONENT => format!("{n:03}"),
        _ => num.to_string(),
    }
}

/// Convert `major.minor.patch` to its sortable folder name, e.g. `1.10.100` -> `001-010-100`.
pub fn version_to_folder_name(version: &str) -> Result<String> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(ChangelogError::MissingVersion);
    }

    let components: Vec<&str> = trimmed.split('.').collect();
    if components.len() != 3 {
        return Err(ChangelogError::malformed_version(
            version,
            format!("expected 3 components, found {}", components.len()),
        ));
    }

    let mut padded = Vec::with_capacity(3);
    for component in components {
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ChangelogError::malformed_version(
                version,
                format!("'{component}' is not a non-negative integer"),
            ));
        }

        let value: u64 = component.parse().map_err(|_| {
            ChangelogError::malformed_version(version, format!("'{component}' is out of range"))
        })?;
        if value > MAX_VERSION_COMPONENT {
            return Err(ChangelogError::malformed_version(
                version,
                format!("component {value} exceeds {MAX_VERSION_COMPONENT}"),
            ));
        }

        padded.push(pad_number(component));
    }

    Ok(padded.join("-"))
}

/// Format a date as `YYYY-MM-DD` from its calendar fields.
pub fn date_to_string<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Today's local date as `YYYY-MM-DD`
pub fn today() -> String {
    date_to_string(&chrono::Local::now().date_naive())
}
