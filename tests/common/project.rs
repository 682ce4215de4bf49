//! Temporary project setup and changelog folder inspection
//!
//! Provides a throwaway project root plus helpers to run the binary against it
//! and to look at the resulting folder layout.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary project root. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestProject {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn changelog(&self) -> PathBuf {
        self.path.join("changelog")
    }

    pub fn unreleased(&self) -> PathBuf {
        self.changelog().join("unreleased")
    }

    pub fn released(&self) -> PathBuf {
        self.changelog().join("released")
    }

    /// `changelog` command rooted at this project, never prompting
    pub fn cmd(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("changelog")?;
        cmd.current_dir(&self.path)
            .env_remove("CHANGELOG_ROOT")
            .env_remove("RUST_LOG")
            .arg("--no-input");
        Ok(cmd)
    }
}

/// Empty project root without a changelog folder
pub fn setup_project() -> anyhow::Result<TestProject> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestProject { temp_dir, path })
}

/// Project root after `changelog init`
pub fn setup_initialized_project() -> anyhow::Result<TestProject> {
    let project = setup_project()?;
    project.cmd()?.arg("init").assert().success();
    Ok(project)
}

/// Add an entry through the binary
pub fn add_entry(project: &TestProject, category: &str, content: &str) -> anyhow::Result<()> {
    project
        .cmd()?
        .args(["new", category, content])
        .assert()
        .success();
    Ok(())
}

/// Names of entry files in a category folder, without hidden files, sorted
pub fn entry_files(folder: &Path) -> anyhow::Result<Vec<String>> {
    if !folder.is_dir() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Sorted names of the sub-directories of `folder`
pub fn sub_dirs(folder: &Path) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
