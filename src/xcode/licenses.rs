//! License discovery in package checkouts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};

use crate::error::AckError;
use crate::packages::LicenseMap;

/// Compiles license file name patterns into a matcher.
pub fn license_matcher<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet, AckError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| AckError::InvalidLicensePattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| AckError::InvalidLicensePattern {
        pattern: patterns
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", "),
        reason: e.to_string(),
    })
}

/// Walks `root` and records license texts keyed by the containing
/// directory's name.
///
/// Directories are visited in name order and the first matching file in a
/// directory wins, so the result is stable across runs.
pub fn scan_licenses<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<LicenseMap> {
    let matcher = license_matcher(patterns)?;
    let mut licenses = LicenseMap::new();

    if !root.is_dir() {
        warn!(dir = %root.display(), "Package checkout directory does not exist");
        return Ok(licenses);
    }

    scan_dir(root, &matcher, &mut licenses)?;
    debug!(count = licenses.len(), "Collected package licenses");
    Ok(licenses)
}

fn scan_dir(dir: &Path, matcher: &GlobSet, licenses: &mut LicenseMap) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .flatten()
        .collect();
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut found = false;
    for entry in &entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            scan_dir(&entry.path(), matcher, licenses)?;
        } else if !found && file_type.is_file() && matcher.is_match(entry.file_name()) {
            let path = entry.path();
            match fs::read_to_string(&path) {
                Ok(text) => {
                    if let Some(package) = dir.file_name().and_then(|n| n.to_str()) {
                        debug!(package, path = %path.display(), "Found license");
                        licenses.insert(package.to_string(), text);
                        found = true;
                    }
                }
                Err(e) => warn!("Skipping unreadable license {}: {e}", path.display()),
            }
        }
    }

    Ok(())
}
