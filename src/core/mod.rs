//! Core functionality for the changelog tool.
//!
//! This module provides the changelog engine (store, renderer, release
//! orchestration) and the supporting pieces: categories, text helpers,
//! configuration, errors, prompts and terminal output.

pub mod category;
pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod output;
pub mod prompt;
pub mod release;
pub mod renderer;
pub mod store;

// === Error handling ===
pub use error::{ChangelogError, Result};

// === Domain types ===
pub use category::Category;
pub use entry::{Entry, EntryId};

// === Configuration ===
pub use config::{Config, ProjectConfig};

// === Engine ===
// Store owns the folder layout, the renderer reads it, the orchestrator sequences a release
pub use release::{ReleaseOrchestrator, ReleaseOutcome, ReleaseStage};
pub use renderer::{format_notes, render, Section};
pub use store::{ChangelogStore, InitReport, MoveReport};

// === Text helpers ===
pub use format::{date_to_string, pad_number, title_case, today, version_to_folder_name};

// === Interaction ===
pub use prompt::{prompter_for, MenuAction, NonInteractive, Prompter, TerminalPrompter};

// === Output formatting ===
pub use output::{print_error, print_info, print_notes, print_status, print_success, print_usage, usage_text};
