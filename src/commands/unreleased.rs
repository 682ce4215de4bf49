use crate::commands::emit_notes;
use crate::core::{
    config::Config, error::Result, release::ReleaseOrchestrator, store::ChangelogStore,
};
use std::path::Path;

pub fn execute_unreleased(config: &Config, output: Option<&Path>) -> Result<String> {
    let store = ChangelogStore::new(config.clone());
    let notes = ReleaseOrchestrator::new(&store).show_unreleased()?;
    emit_notes(&notes, output)?;
    Ok(notes)
}
