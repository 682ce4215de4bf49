//! Common assertion helpers for test output validation
//!
//! Provides predicates for the messages the `changelog` binary prints.

#![allow(dead_code)]

use predicates::prelude::*;

/// Checks for the usage block printed on invalid input
pub fn has_usage() -> impl Predicate<str> {
    predicates::str::contains("Usage")
        .and(predicates::str::contains("changelog release <version>"))
}

/// Checks for the uninitialized-layout error
pub fn not_initialized() -> impl Predicate<str> {
    predicates::str::contains("not initialized").and(predicates::str::contains("changelog init"))
}

/// Checks for an unknown category error naming `category`
pub fn unknown_category(category: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Unknown category '{category}'"))
}

/// Checks for a rendered section heading
pub fn has_section(title: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("### {title}"))
}

/// Checks for a rendered bullet
pub fn has_bullet(content: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("- {content}"))
}
