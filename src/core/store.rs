//! On-disk changelog layout and entry operations.
//!
//! [`ChangelogStore`] owns everything under the changelog folder. No other module
//! writes there directly.
//!
//! # Layout
//! ```text
//! changelog/
//!   released/
//!     001-002-003/
//!       added/1700000000000
//!   unreleased/
//!     added/.gitkeep
//!     added/1700000000001
//!     ...
//! ```
//!
//! # Failure Model
//! Every write is a blocking call whose error is logged and returned. Moving a
//! bucket is one rename per file and stops at the first failure, so an
//! interrupted move can leave a bucket split between source and destination.

use crate::core::{
    category::Category,
    config::Config,
    entry::{Entry, EntryId},
    error::{ChangelogError, Result},
};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Upper bound on identifier bumps when several entries land in the same millisecond
const MAX_ID_ATTEMPTS: usize = 1000;

/// Paths created by [`ChangelogStore::initialize`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InitReport {
    pub created: Vec<PathBuf>,
}

impl InitReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Number of entries relocated per category, in canonical order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MoveReport {
    pub moved: Vec<(Category, usize)>,
}

impl MoveReport {
    pub fn total(&self) -> usize {
        self.moved.iter().map(|(_, count)| count).sum()
    }

    pub fn count(&self, category: Category) -> usize {
        self.moved
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, count)| *count)
    }
}

#[derive(Debug, Clone)]
pub struct ChangelogStore {
    config: Config,
}

impl ChangelogStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn unreleased_bucket(&self) -> PathBuf {
        self.config.unreleased_path()
    }

    /// Path of the released bucket for an encoded version folder name
    pub fn released_bucket(&self, folder_name: &str) -> PathBuf {
        self.config.released_path().join(folder_name)
    }

    pub fn is_initialized(&self) -> bool {
        self.unreleased_bucket().is_dir()
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(ChangelogError::not_initialized(self.unreleased_bucket()))
        }
    }

    /// Create the folder layout. Existing folders and entries are left alone.
    pub fn initialize(&self) -> Result<InitReport> {
        let mut report = InitReport::default();

        self.ensure_dir(&self.config.changelog_path(), false, &mut report)?;
        self.ensure_dir(&self.config.released_path(), true, &mut report)?;

        let unreleased = self.unreleased_bucket();
        self.ensure_dir(&unreleased, false, &mut report)?;
        for category in Category::ALL {
            self.ensure_dir(&unreleased.join(category.as_str()), true, &mut report)?;
        }

        log::info!(
            "Initialized changelog at {} ({} paths created)",
            self.config.changelog_path().display(),
            report.created.len()
        );
        Ok(report)
    }

    fn ensure_dir(&self, path: &Path, with_marker: bool, report: &mut InitReport) -> Result<()> {
        if path.is_dir() {
            log::debug!("Directory already exists: {}", path.display());
            return Ok(());
        }

        fs::create_dir_all(path).map_err(|e| {
            log::error!("Failed to create directory '{}': {}", path.display(), e);
            ChangelogError::create_dir_failed(path, e)
        })?;
        report.created.push(path.to_path_buf());

        if with_marker {
            let marker = path.join(self.config.marker_file());
            write_new_file(&marker, "")?;
            report.created.push(marker);
        }

        Ok(())
    }

    /// Write a new entry into the unreleased bucket.
    ///
    /// Validation happens before anything touches the disk.
    pub fn create_entry(&self, category: &str, content: &str) -> Result<Entry> {
        let category: Category = category.parse()?;
        if content.trim().is_empty() {
            return Err(ChangelogError::EmptyContent);
        }
        self.ensure_initialized()?;

        let folder = self.unreleased_bucket().join(category.as_str());
        if !folder.is_dir() {
            fs::create_dir_all(&folder).map_err(|e| {
                log::error!("Failed to create directory '{}': {}", folder.display(), e);
                ChangelogError::create_dir_failed(&folder, e)
            })?;
        }

        let mut identifier = EntryId::now();
        for _ in 0..MAX_ID_ATTEMPTS {
            let path = folder.join(identifier.as_str());
            match write_new_file(&path, content) {
                Ok(()) => {
                    log::info!("Created {} entry {}", category, identifier);
                    return Ok(Entry {
                        category,
                        identifier,
                        content: content.to_string(),
                    });
                }
                Err(ChangelogError::EntryExists { .. }) => {
                    log::debug!("Identifier {identifier} taken in {category}, trying next");
                    identifier = match identifier.next() {
                        Some(next) => next,
                        None => break,
                    };
                }
                Err(e) => return Err(e),
            }
        }

        Err(ChangelogError::entry_exists(folder.join(identifier.as_str())))
    }

    /// Entry identifiers in `bucket/category`, oldest first.
    ///
    /// A missing category folder reads as empty. The marker, other hidden files
    /// and sub-directories are not entries.
    pub fn list_entries(&self, bucket: &Path, category: Category) -> Result<Vec<EntryId>> {
        let folder = bucket.join(category.as_str());
        if !folder.is_dir() {
            return Ok(Vec::new());
        }

        let read_dir =
            fs::read_dir(&folder).map_err(|e| ChangelogError::read_failed(&folder, e))?;

        let mut ids = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| ChangelogError::read_failed(&folder, e))?;
            let file_type = dir_entry
                .file_type()
                .map_err(|e| ChangelogError::read_failed(dir_entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }

            let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
                log::warn!("Skipping non UTF-8 file name in {}", folder.display());
                continue;
            };
            if name.starts_with('.') || name == self.config.marker_file() {
                continue;
            }
            ids.push(EntryId::from(name));
        }

        ids.sort();
        Ok(ids)
    }

    /// Full entries in `bucket/category`, oldest first
    pub fn read_entries(&self, bucket: &Path, category: Category) -> Result<Vec<Entry>> {
        let folder = bucket.join(category.as_str());
        self.list_entries(bucket, category)?
            .into_iter()
            .map(|identifier| {
                let path = folder.join(identifier.as_str());
                let bytes = fs::read(&path).map_err(|e| ChangelogError::read_failed(&path, e))?;
                let content = String::from_utf8_lossy(&bytes).into_owned();
                Ok(Entry {
                    category,
                    identifier,
                    content,
                })
            })
            .collect()
    }

    /// Relocate every entry from one bucket to another.
    ///
    /// Only categories that hold entries get a folder at the destination; empty
    /// source categories are not touched. Stops at the first failure without
    /// undoing moves already made.
    pub fn move_entries(&self, from: &Path, to: &Path) -> Result<MoveReport> {
        if !from.is_dir() {
            return Err(ChangelogError::not_initialized(from));
        }
        self.warn_unknown_folders(from);

        fs::create_dir_all(to).map_err(|e| {
            log::error!("Failed to create directory '{}': {}", to.display(), e);
            ChangelogError::create_dir_failed(to, e)
        })?;

        let mut report = MoveReport::default();
        for category in Category::ALL {
            let ids = self.list_entries(from, category)?;
            if ids.is_empty() {
                continue;
            }

            let source_folder = from.join(category.as_str());
            let target_folder = to.join(category.as_str());
            fs::create_dir_all(&target_folder).map_err(|e| {
                log::error!(
                    "Failed to create directory '{}': {}",
                    target_folder.display(),
                    e
                );
                ChangelogError::create_dir_failed(&target_folder, e)
            })?;

            for id in &ids {
                let source = source_folder.join(id.as_str());
                let target = target_folder.join(id.as_str());
                if target.exists() {
                    log::error!("Refusing to overwrite {}", target.display());
                    return Err(ChangelogError::entry_exists(target));
                }

                fs::rename(&source, &target).map_err(|e| {
                    log::error!(
                        "Failed to move '{}' to '{}': {}",
                        source.display(),
                        target.display(),
                        e
                    );
                    ChangelogError::move_failed(&source, &target, e)
                })?;
                log::debug!("Moved {} -> {}", source.display(), target.display());
            }

            report.moved.push((category, ids.len()));
        }

        log::info!(
            "Moved {} entries from {} to {}",
            report.total(),
            from.display(),
            to.display()
        );
        Ok(report)
    }

    /// Released version folder names, oldest first
    pub fn released_versions(&self) -> Result<Vec<String>> {
        let released = self.config.released_path();
        if !released.is_dir() {
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for dir_entry in
            fs::read_dir(&released).map_err(|e| ChangelogError::read_failed(&released, e))?
        {
            let dir_entry = dir_entry.map_err(|e| ChangelogError::read_failed(&released, e))?;
            if dir_entry.path().is_dir() {
                versions.push(dir_entry.file_name().to_string_lossy().into_owned());
            }
        }

        versions.sort();
        Ok(versions)
    }

    fn warn_unknown_folders(&self, bucket: &Path) {
        let Ok(read_dir) = fs::read_dir(bucket) else {
            return;
        };
        for dir_entry in read_dir.flatten() {
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if dir_entry.path().is_dir() && name.parse::<Category>().is_err() {
                log::warn!(
                    "Ignoring folder '{}' in {}: not a changelog category",
                    name,
                    bucket.display()
                );
            }
        }
    }
}

/// Create `path` with `content`, never replacing an existing file
fn write_new_file(path: &Path, content: &str) -> Result<()> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ChangelogError::entry_exists(path));
        }
        Err(e) => {
            log::error!("Failed to create file '{}': {}", path.display(), e);
            return Err(ChangelogError::write_failed(path, e));
        }
    };

    file.write_all(content.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            log::error!("Failed to write file '{}': {}", path.display(), e);
            ChangelogError::write_failed(path, e)
        })
}
