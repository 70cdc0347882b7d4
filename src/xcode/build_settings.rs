//! Package checkout location from `xcodebuild -showBuildSettings`.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info};

use crate::error::AckError;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BUILD_DIR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*BUILD_DIR = (?P<dir>.+?)\s*$").unwrap());

/// Derives the package checkout directory from build settings output.
///
/// `BUILD_DIR` points at `.../Build/Products`; checkouts live beside it in
/// `.../SourcePackages/checkouts`.
pub fn checkouts_dir_from_settings(output: &str) -> Result<PathBuf, AckError> {
    let build_dir = BUILD_DIR_LINE
        .captures(output)
        .and_then(|caps| caps.name("dir"))
        .map(|m| m.as_str())
        .ok_or(AckError::BuildDirNotFound)?;

    debug!(build_dir, "Found BUILD_DIR");
    Ok(PathBuf::from(
        build_dir.replace("Build/Products", "SourcePackages/checkouts"),
    ))
}

/// Runs `xcodebuild -showBuildSettings` for a scheme and returns its stdout.
pub fn query_build_settings(project: &Path, scheme: &str) -> Result<String> {
    info!(project = %project.display(), scheme, "Querying build settings");

    let output = Command::new("xcodebuild")
        .arg("-project")
        .arg(project)
        .args(["-target", scheme, "-showBuildSettings"])
        .output()
        .map_err(|e| AckError::BuildSettingsFailed(e.to_string()))
        .context("Failed to run xcodebuild")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AckError::BuildSettingsFailed(stderr.trim().to_string()).into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Resolves the package checkout directory for `scheme` of `project`.
pub fn checkouts_dir(project: &Path, scheme: &str) -> Result<PathBuf> {
    let settings = query_build_settings(project, scheme)?;
    Ok(checkouts_dir_from_settings(&settings)?)
}
