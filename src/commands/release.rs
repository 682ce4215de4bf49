use crate::commands::emit_notes;
use crate::core::{
    config::Config,
    error::Result,
    print_status,
    prompt::Prompter,
    release::{ReleaseOrchestrator, ReleaseOutcome},
    store::ChangelogStore,
};
use std::path::Path;

pub fn execute_release(
    config: &Config,
    prompter: &dyn Prompter,
    version: Option<String>,
    output: Option<&Path>,
) -> Result<ReleaseOutcome> {
    let store = ChangelogStore::new(config.clone());
    store.ensure_initialized()?;

    let version = match version.filter(|v| !v.trim().is_empty()) {
        Some(version) => version,
        None => prompter.input_version()?,
    };

    let mut orchestrator = ReleaseOrchestrator::new(&store);
    let outcome = orchestrator.release(Some(&version))?;

    print_status(&format!(
        "Released {} ({} entries moved to {})",
        outcome.version,
        outcome.moved.total(),
        outcome.folder.display()
    ));
    emit_notes(&outcome.notes, output)?;

    Ok(outcome)
}
