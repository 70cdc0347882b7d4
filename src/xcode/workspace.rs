//! Locating Xcode workspace and project bundles.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::AckError;

/// Suffix of workspace bundles.
pub const WORKSPACE_SUFFIX: &str = ".xcworkspace";

/// Suffix of project bundles.
pub const PROJECT_SUFFIX: &str = ".xcodeproj";

/// Location of the lock file inside a workspace bundle.
const RESOLVED_SUBPATH: [&str; 3] = ["xcshareddata", "swiftpm", "Package.resolved"];

/// Returns the first entry of `dir` whose name ends with `suffix`, by name.
pub fn find_root_entry(dir: &Path, suffix: &str) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| name.ends_with(suffix))
        .collect();
    names.sort();

    Ok(names.into_iter().next().map(|name| dir.join(name)))
}

/// Finds the workspace bundle in `dir`.
pub fn find_workspace(dir: &Path) -> Result<PathBuf> {
    find_root_entry(dir, WORKSPACE_SUFFIX)?
        .ok_or_else(|| AckError::WorkspaceNotFound(dir.to_path_buf()).into())
}

/// Finds the project bundle in `dir`.
pub fn find_project(dir: &Path) -> Result<PathBuf> {
    find_root_entry(dir, PROJECT_SUFFIX)?
        .ok_or_else(|| AckError::ProjectNotFound(dir.to_path_buf()).into())
}

/// Path of the `Package.resolved` belonging to the workspace in `dir`.
pub fn resolved_file_path(dir: &Path) -> Result<PathBuf> {
    let workspace = find_workspace(dir)?;
    Ok(RESOLVED_SUBPATH
        .iter()
        .fold(workspace, |path, segment| path.join(segment)))
}
