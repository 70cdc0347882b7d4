//! `Package.resolved` lock file schemas.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AckError;

/// A parsed `Package.resolved`, in either schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageResolved {
    /// Schema version 1, pins nested under `object`.
    Legacy(LegacyResolved),
    /// Schema version 2 and later, pins at the top level.
    Current(CurrentResolved),
}

/// Version 1 lock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyResolved {
    /// Pin container.
    pub object: LegacyObject,
    /// Schema version.
    pub version: u32,
}

/// Wrapper object of a version 1 lock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyObject {
    /// Resolved dependencies.
    pub pins: Vec<LegacyPin>,
}

/// Version 1 pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPin {
    /// Package name.
    pub package: String,
    /// Source repository.
    #[serde(rename = "repositoryURL")]
    pub repository_url: String,
    /// Resolved revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PinState>,
}

/// Version 2+ lock file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentResolved {
    /// Hash of the manifest the pins were resolved from (version 3).
    #[serde(
        default,
        rename = "originHash",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_hash: Option<String>,
    /// Resolved dependencies.
    pub pins: Vec<CurrentPin>,
    /// Schema version.
    pub version: u32,
}

/// Version 2+ pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPin {
    /// Lower-cased package identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Pin kind, e.g. `remoteSourceControl`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Source location, a URL or a local path.
    pub location: String,
    /// Resolved revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PinState>,
}

/// Resolved revision of a pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinState {
    /// Branch, when pinned to one.
    #[serde(default)]
    pub branch: Option<String>,
    /// Commit hash.
    #[serde(default)]
    pub revision: Option<String>,
    /// Semantic version, when pinned to one.
    #[serde(default)]
    pub version: Option<String>,
}

/// Schema-independent view of a pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// Package name.
    pub name: String,
    /// Source URL with any `.git` suffix removed.
    pub url: String,
}

impl PackageResolved {
    /// Parses lock file content.
    pub fn from_json(content: &str) -> Result<Self, AckError> {
        serde_json::from_str(content).map_err(|e| AckError::InvalidLockFile(e.to_string()))
    }

    /// Reads and parses a lock file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lock file: {}", path.display()))?;

        let resolved = Self::from_json(&content)
            .with_context(|| format!("Failed to parse lock file: {}", path.display()))?;
        debug!(
            path = %path.display(),
            version = resolved.version(),
            "Parsed lock file"
        );
        Ok(resolved)
    }

    /// Schema version recorded in the file.
    pub fn version(&self) -> u32 {
        match self {
            Self::Legacy(resolved) => resolved.version,
            Self::Current(resolved) => resolved.version,
        }
    }

    /// Pins in file order.
    pub fn pins(&self) -> Vec<Pin> {
        match self {
            Self::Legacy(resolved) => resolved
                .object
                .pins
                .iter()
                .map(|pin| Pin {
                    name: pin.package.clone(),
                    url: strip_git_suffix(&pin.repository_url).to_string(),
                })
                .collect(),
            Self::Current(resolved) => resolved
                .pins
                .iter()
                .map(|pin| {
                    let url = strip_git_suffix(&pin.location);
                    Pin {
                        name: last_segment(url).to_string(),
                        url: url.to_string(),
                    }
                })
                .collect(),
        }
    }
}

/// Removes a trailing `.git` from a repository URL.
pub fn strip_git_suffix(url: &str) -> &str {
    url.strip_suffix(".git").unwrap_or(url)
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').find(|s| !s.is_empty()).unwrap_or(url)
}
