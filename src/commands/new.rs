use crate::core::{
    category::Category,
    config::Config,
    entry::Entry,
    error::{ChangelogError, Result},
    print_success,
    prompt::Prompter,
    store::ChangelogStore,
};

/// Create one unreleased entry.
///
/// Content words are joined with single spaces, so quoting is optional on the
/// command line. A missing category or empty content is asked for through
/// `prompter`.
pub fn execute_new(
    config: &Config,
    prompter: &dyn Prompter,
    category: Option<String>,
    content: Vec<String>,
) -> Result<Entry> {
    let store = ChangelogStore::new(config.clone());
    store.ensure_initialized()?;

    let category: Category = match category {
        Some(category) => category.parse()?,
        None => prompter.select_category()?,
    };

    let mut content = content.join(" ");
    if content.trim().is_empty() {
        content = prompter.input_content(category)?;
    }
    if content.trim().is_empty() {
        return Err(ChangelogError::EmptyContent);
    }

    let entry = store.create_entry(category.as_str(), &content)?;
    let path = store
        .unreleased_bucket()
        .join(category.as_str())
        .join(entry.identifier.as_str());
    print_success(&format!("Added {} entry: {}", category, path.display()));

    Ok(entry)
}
