//! Changelog CLI - keep changelog entries as separate files and render them into release notes.
//!
//! Entries live one file per note under `changelog/unreleased/<category>/`, which
//! avoids merge conflicts on a shared CHANGELOG file. Cutting a release moves them
//! into `changelog/released/<MMM-mmm-ppp>/` and renders Markdown notes.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`ChangelogStore`]: folder layout, entry creation, listing and moves
//! - [`render`]: release notes for a bucket
//! - [`ReleaseOrchestrator`]: the release sequence
//! - Text helpers, configuration and error types

pub mod commands;
pub mod core;

pub use core::{
    // Text helpers
    date_to_string,
    format_notes,
    pad_number,
    render,
    title_case,
    version_to_folder_name,

    Category,
    // Error handling
    ChangelogError,
    // Engine
    ChangelogStore,
    Config,
    Entry,
    EntryId,
    InitReport,
    MoveReport,
    ReleaseOrchestrator,
    ReleaseOutcome,
    ReleaseStage,
    Result,
    Section,
};
