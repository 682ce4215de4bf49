//! Release orchestration.
//!
//! A release moves everything from the unreleased bucket into a version bucket
//! and renders the result. The sequence is
//! `AwaitingVersion -> Resolving -> Moving -> Rendering -> Done`. Nothing about
//! the stage is persisted; an interrupted release is finished by running it
//! again, which only renders what reached the version bucket.
//!
//! Releasing a version that already has a bucket merges the new entries into it.

use crate::core::{
    error::{ChangelogError, Result},
    format::{date_to_string, version_to_folder_name},
    renderer,
    store::{ChangelogStore, MoveReport},
};
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

pub const UNRELEASED_HEADER: &str = "Unreleased";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStage {
    AwaitingVersion,
    Resolving,
    Moving,
    Rendering,
    Done,
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseStage::AwaitingVersion => "awaiting version",
            ReleaseStage::Resolving => "resolving",
            ReleaseStage::Moving => "moving",
            ReleaseStage::Rendering => "rendering",
            ReleaseStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of a completed release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    pub version: String,
    pub folder: PathBuf,
    pub header: String,
    pub notes: String,
    pub moved: MoveReport,
}

pub struct ReleaseOrchestrator<'a> {
    store: &'a ChangelogStore,
    stage: ReleaseStage,
}

impl<'a> ReleaseOrchestrator<'a> {
    pub fn new(store: &'a ChangelogStore) -> Self {
        Self {
            store,
            stage: ReleaseStage::AwaitingVersion,
        }
    }

    pub fn stage(&self) -> ReleaseStage {
        self.stage
    }

    fn advance(&mut self, next: ReleaseStage) {
        log::debug!("Release stage: {} -> {}", self.stage, next);
        self.stage = next;
    }

    /// Cut a release dated today
    pub fn release(&mut self, version: Option<&str>) -> Result<ReleaseOutcome> {
        self.release_on(version, chrono::Local::now().date_naive())
    }

    /// Cut a release with an explicit date in the header
    pub fn release_on(&mut self, version: Option<&str>, date: NaiveDate) -> Result<ReleaseOutcome> {
        self.stage = ReleaseStage::AwaitingVersion;
        let version = version
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ChangelogError::MissingVersion)?;

        self.advance(ReleaseStage::Resolving);
        let folder_name = version_to_folder_name(version)?;
        self.store.ensure_initialized()?;
        let folder = self.store.released_bucket(&folder_name);
        if folder.exists() {
            log::warn!(
                "Version folder {} already exists, merging entries into it",
                folder.display()
            );
        }

        self.advance(ReleaseStage::Moving);
        let moved = self
            .store
            .move_entries(&self.store.unreleased_bucket(), &folder)?;

        self.advance(ReleaseStage::Rendering);
        let header = format!("[{}] - {}", version, date_to_string(&date));
        let notes = renderer::render(self.store, &folder, &header)?;

        self.advance(ReleaseStage::Done);
        log::info!(
            "Released {} with {} entries into {}",
            version,
            moved.total(),
            folder.display()
        );

        Ok(ReleaseOutcome {
            version: version.to_string(),
            folder,
            header,
            notes,
            moved,
        })
    }

    /// Render pending entries without touching them
    pub fn show_unreleased(&self) -> Result<String> {
        self.store.ensure_initialized()?;
        renderer::render(
            self.store,
            &self.store.unreleased_bucket(),
            UNRELEASED_HEADER,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{category::Category, config::Config};
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ChangelogStore) {
        let dir = TempDir::new().unwrap();
        let store = ChangelogStore::new(Config::new(dir.path()));
        store.initialize().unwrap();
        (dir, store)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_release_moves_and_renders() {
        let (_dir, store) = setup();
        store.create_entry("added", "Did X").unwrap();
        store.create_entry("fixed", "Fixed Y").unwrap();

        let mut orchestrator = ReleaseOrchestrator::new(&store);
        let outcome = orchestrator
            .release_on(Some("1.0.0"), date(2021, 1, 1))
            .unwrap();

        assert_eq!(orchestrator.stage(), ReleaseStage::Done);
        assert_eq!(outcome.header, "[1.0.0] - 2021-01-01");
        assert_eq!(
            outcome.notes,
            "## [1.0.0] - 2021-01-01\n\n### Added\n\n- Did X\n\n### Fixed\n\n- Fixed Y"
        );
        assert_eq!(outcome.folder, store.released_bucket("001-000-000"));
        assert_eq!(outcome.moved.total(), 2);

        let pending = orchestrator.show_unreleased().unwrap();
        assert_eq!(pending, "## Unreleased\n");
    }

    #[test]
    fn test_release_without_version() {
        let (_dir, store) = setup();
        let mut orchestrator = ReleaseOrchestrator::new(&store);

        assert!(matches!(
            orchestrator.release(None),
            Err(ChangelogError::MissingVersion)
        ));
        assert!(matches!(
            orchestrator.release(Some("  ")),
            Err(ChangelogError::MissingVersion)
        ));
        assert_eq!(orchestrator.stage(), ReleaseStage::AwaitingVersion);
    }

    #[test]
    fn test_malformed_version_moves_nothing() {
        let (_dir, store) = setup();
        store.create_entry("added", "Did X").unwrap();

        let mut orchestrator = ReleaseOrchestrator::new(&store);
        let err = orchestrator.release(Some("1.0")).unwrap_err();
        assert!(matches!(err, ChangelogError::MalformedVersion { .. }));
        assert_eq!(orchestrator.stage(), ReleaseStage::Resolving);

        assert_eq!(
            store
                .list_entries(&store.unreleased_bucket(), Category::Added)
                .unwrap()
                .len(),
            1
        );
        assert!(store.released_versions().unwrap().is_empty());
    }

    #[test]
    fn test_release_same_version_twice_merges() {
        let (_dir, store) = setup();
        let mut orchestrator = ReleaseOrchestrator::new(&store);

        store.create_entry("added", "First").unwrap();
        orchestrator
            .release_on(Some("1.0.0"), date(2021, 1, 1))
            .unwrap();

        // Keep the second identifier distinct from the first one already released.
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.create_entry("added", "Second").unwrap();
        let outcome = orchestrator
            .release_on(Some("1.0.0"), date(2021, 1, 2))
            .unwrap();

        assert_eq!(store.released_versions().unwrap(), vec!["001-000-000"]);
        assert_eq!(
            outcome.notes,
            "## [1.0.0] - 2021-01-02\n\n### Added\n\n- First\n- Second"
        );
    }

    #[test]
    fn test_release_with_nothing_pending() {
        let (_dir, store) = setup();
        let mut orchestrator = ReleaseOrchestrator::new(&store);
        let outcome = orchestrator
            .release_on(Some("0.1.0"), date(2021, 10, 10))
            .unwrap();

        assert_eq!(outcome.notes, "## [0.1.0] - 2021-10-10\n");
        assert_eq!(outcome.moved.total(), 0);
        assert!(outcome.folder.is_dir());
    }

    #[test]
    fn test_release_requires_init() {
        let dir = TempDir::new().unwrap();
        let store = ChangelogStore::new(Config::new(dir.path()));
        let mut orchestrator = ReleaseOrchestrator::new(&store);

        let err = orchestrator.release(Some("1.0.0")).unwrap_err();
        assert!(matches!(err, ChangelogError::NotInitialized { .. }));
        assert!(matches!(
            orchestrator.show_unreleased(),
            Err(ChangelogError::NotInitialized { .. })
        ));
    }

    #[test]
    fn test_rerun_after_partial_move_renders_only_moved_entries() {
        let (_dir, store) = setup();
        store.create_entry("added", "Did X").unwrap();
        store.create_entry("fixed", "Fixed Y").unwrap();

        let folder = store.released_bucket("001-000-000");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("fixed"), "").unwrap();

        let mut orchestrator = ReleaseOrchestrator::new(&store);
        assert!(orchestrator.release(Some("1.0.0")).is_err());
        assert_eq!(orchestrator.stage(), ReleaseStage::Moving);

        fs::remove_file(folder.join("fixed")).unwrap();
        let outcome = orchestrator
            .release_on(Some("1.0.0"), date(2021, 1, 1))
            .unwrap();
        assert_eq!(
            outcome.notes,
            "## [1.0.0] - 2021-01-01\n\n### Added\n\n- Did X\n\n### Fixed\n\n- Fixed Y"
        );
    }

    #[test]
    fn test_show_unreleased_does_not_mutate() {
        let (_dir, store) = setup();
        store.create_entry("security", "Patched Z").unwrap();

        let orchestrator = ReleaseOrchestrator::new(&store);
        let first = orchestrator.show_unreleased().unwrap();
        let second = orchestrator.show_unreleased().unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "## Unreleased\n\n### Security\n\n- Patched Z");
    }
}
