//! Configuration for acknowledgement generation.
//!
//! Settings come from an optional user file (`~/.acknowledger/config.yaml`)
//! overlaid by an optional project file (`.acknowledger.yaml` in the project
//! directory, or a path given on the command line).

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contributors::IdentityAliases;
use crate::data::read_yaml_file;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = ".acknowledger.yaml";

/// License file name matched when nothing else is configured.
pub const DEFAULT_LICENSE_FILE: &str = "LICENSE";

/// One configuration layer as written on disk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Raw identity (display name or email) to canonical name.
    #[serde(default)]
    pub aliases: Option<IdentityAliases>,

    /// Glob patterns for license file names.
    #[serde(default)]
    pub license_files: Option<Vec<String>>,
}

/// Effective configuration after layering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckConfig {
    /// Identity substitutions applied before grouping contributors.
    pub aliases: IdentityAliases,
    /// Glob patterns for license file names.
    pub license_files: Vec<String>,
}

impl Default for AckConfig {
    fn default() -> Self {
        Self {
            aliases: IdentityAliases::new(),
            license_files: vec![DEFAULT_LICENSE_FILE.to_string()],
        }
    }
}

impl AckConfig {
    /// Loads the user config and the project config for `project_dir`.
    ///
    /// An explicit config path must exist; implicit locations are optional.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let project_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => project_dir.join(PROJECT_CONFIG_FILE),
        };

        Self::load_from_paths(user_config_path().as_deref(), Some(project_path.as_path()))
    }

    /// Layers the given files over the defaults; missing files are skipped.
    pub fn load_from_paths(user: Option<&Path>, project: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();
        for path in [user, project].into_iter().flatten() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "Loading config layer");
            let layer: ConfigFile = read_yaml_file(path)?;
            config.apply(layer);
        }
        Ok(config)
    }

    /// Overlays a layer; aliases merge key by key, license patterns replace.
    pub fn apply(&mut self, layer: ConfigFile) {
        if let Some(aliases) = layer.aliases {
            self.aliases.extend(aliases);
        }
        if let Some(license_files) = layer.license_files {
            self.license_files = license_files;
        }
    }
}

/// Returns the user config path (~/.acknowledger/config.yaml).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".acknowledger").join("config.yaml"))
}
