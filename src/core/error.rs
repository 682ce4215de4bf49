//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ChangelogError`] which covers every failure the changelog
//! engine can report. It uses `thiserror` for ergonomic error definitions and
//! includes constructors for the path-carrying variants.
//!
//! # Public API
//! - [`ChangelogError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ChangelogError>`
//!
//! # Error Categories
//! - **Input validation**: Unknown category, empty content, malformed or missing version
//! - **Filesystem**: Directory creation, entry writes, reads and moves (all carry the path)
//! - **Layout**: Operations on a changelog root that was never initialized
//! - **Configuration and prompts**: Malformed `.changelog.json`, failed interactive input

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for the changelog tool
#[derive(Error, Debug)]
pub enum ChangelogError {
    // Input validation errors
    #[error("Unknown category '{category}'. Expected one of: added, changed, deprecated, removed, fixed, security")]
    UnknownCategory { category: String },

    #[error("Entry content must not be empty")]
    EmptyContent,

    #[error("Malformed version '{version}': {reason}")]
    MalformedVersion { version: String, reason: String },

    #[error("No version provided. Usage: changelog release <major.minor.patch>")]
    MissingVersion,

    #[error("No command provided")]
    MissingCommand,

    // Layout errors
    #[error("Changelog is not initialized at '{path}'. Run 'changelog init' first.")]
    NotInitialized { path: PathBuf },

    #[error("Entry already exists: {path}")]
    EntryExists { path: PathBuf },

    // Filesystem errors
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to move '{from}' to '{to}': {source}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration and interaction errors
    #[error("Failed to parse config file '{path}': {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Interactive input failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Convenience type alias for Results using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create an unknown category error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create a malformed version error with the reason it was rejected
    pub fn malformed_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    pub fn not_initialized(path: impl Into<PathBuf>) -> Self {
        Self::NotInitialized { path: path.into() }
    }

    pub fn entry_exists(path: impl Into<PathBuf>) -> Self {
        Self::EntryExists { path: path.into() }
    }

    /// Create a directory creation failed error
    pub fn create_dir_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDirFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a read failed error
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a move failed error
    pub fn move_failed(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::MoveFailed {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }

    /// Whether the CLI should follow this error with the usage block
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. }
                | Self::EmptyContent
                | Self::MissingVersion
                | Self::MissingCommand
        )
    }
}
