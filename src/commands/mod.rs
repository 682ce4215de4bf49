pub mod init;
pub mod menu;
pub mod new;
pub mod release;
pub mod unreleased;

pub use init::*;
pub use menu::*;
pub use new::*;
pub use release::*;
pub use unreleased::*;

use crate::core::{
    error::{ChangelogError, Result},
    print_notes, print_success,
};
use std::path::Path;

/// Print notes, or write them to `output` when given
pub(crate) fn emit_notes(notes: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{notes}\n")).map_err(|e| {
                log::error!("Failed to write notes to '{}': {}", path.display(), e);
                ChangelogError::write_failed(path, e)
            })?;
            print_success(&format!("Release notes written to {}", path.display()));
        }
        None => print_notes(notes),
    }
    Ok(())
}
