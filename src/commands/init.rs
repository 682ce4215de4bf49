use crate::core::{
    config::{Config, CONFIG_FILE_NAME},
    error::Result,
    print_info, print_success,
    store::{ChangelogStore, InitReport},
};

pub fn execute_init(config: &Config, write_config: bool) -> Result<InitReport> {
    let store = ChangelogStore::new(config.clone());
    let report = store.initialize()?;

    if write_config {
        let config_file = config.root().join(CONFIG_FILE_NAME);
        if config_file.exists() {
            log::info!("Keeping existing {}", config_file.display());
        } else {
            config.save()?;
            log::info!("Wrote {}", config_file.display());
        }
    }

    if report.is_noop() {
        print_info(&format!(
            "Changelog already initialized at {}",
            config.changelog_path().display()
        ));
    } else {
        print_success(&format!(
            "Init Success: {}",
            config.changelog_path().display()
        ));
    }

    Ok(report)
}
