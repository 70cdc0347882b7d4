//! The acknowledgements document and its serialization.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::contributors::Contributor;
use crate::error::AckError;
use crate::packages::AcknowledgementPackage;

pub mod yaml;

pub use yaml::{from_yaml, read_yaml_file, to_yaml};

/// File name of the generated document.
pub const OUTPUT_FILE_NAME: &str = "Acknowledgements.json";

/// Complete acknowledgements output.
///
/// Field order is part of the output format: `packages` precede
/// `contributors`, and absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgements {
    /// Third-party dependencies.
    pub packages: Vec<AcknowledgementPackage>,
    /// People who contributed to the project.
    pub contributors: Vec<Contributor>,
}

impl Acknowledgements {
    /// Assembles a document from fully built lists.
    pub fn new(packages: Vec<AcknowledgementPackage>, contributors: Vec<Contributor>) -> Self {
        Self {
            packages,
            contributors,
        }
    }

    /// Serializes to pretty-printed JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize acknowledgements")
    }

    /// Serializes to YAML for previews.
    pub fn to_yaml(&self) -> Result<String> {
        to_yaml(self)
    }

    /// Writes `Acknowledgements.json` into `dir`, replacing any previous file.
    ///
    /// The document is serialized before anything touches the disk and lands
    /// through a rename, so readers never observe a partial file.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(AckError::OutputDirMissing(dir.to_path_buf()).into());
        }

        let json = self.to_json()?;
        let target = dir.join(OUTPUT_FILE_NAME);

        let mut staged = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        staged
            .write_all(json.as_bytes())
            .context("Failed to write acknowledgements")?;
        staged
            .persist(&target)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;

        info!(
            path = %target.display(),
            packages = self.packages.len(),
            contributors = self.contributors.len(),
            "Wrote acknowledgements"
        );
        Ok(target)
    }

    /// Reads a previously written document.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse acknowledgements: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Acknowledgements {
        Acknowledgements::new(
            vec![AcknowledgementPackage {
                name: "Foo".to_string(),
                url: "https://github.com/acme/Foo".to_string(),
                author: Some("acme".to_string()),
                license: None,
            }],
            vec![
                Contributor {
                    name: "John Smith".to_string(),
                    email: None,
                    contributions: 2,
                },
                Contributor {
                    name: "Kent Clark".to_string(),
                    email: Some("k@e.com".to_string()),
                    contributions: 1,
                },
            ],
        )
    }

    #[test]
    fn json_shape() {
        insta::assert_snapshot!(sample().to_json().unwrap(), @r#"
        {
          "packages": [
            {
              "name": "Foo",
              "url": "https://github.com/acme/Foo",
              "author": "acme",
              "license": null
            }
          ],
          "contributors": [
            {
              "name": "John Smith",
              "email": null,
              "contributions": 2
            },
            {
              "name": "Kent Clark",
              "email": "k@e.com",
              "contributions": 1
            }
          ]
        }
        "#);
    }

    #[test]
    fn empty_document() {
        let json = Acknowledgements::new(Vec::new(), Vec::new())
            .to_json()
            .unwrap();
        assert_eq!(json, "{\n  \"packages\": [],\n  \"contributors\": []\n}");
    }

    #[test]
    fn serialization_is_stable() {
        assert_eq!(sample().to_json().unwrap(), sample().to_json().unwrap());
    }

    #[test]
    fn write_to_dir_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = sample().write_to_dir(dir.path()).unwrap();

        assert_eq!(path, dir.path().join(OUTPUT_FILE_NAME));
        assert_eq!(Acknowledgements::read_from_file(&path).unwrap(), sample());

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().flatten().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn write_to_dir_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OUTPUT_FILE_NAME), "stale").unwrap();

        let path = sample().write_to_dir(dir.path()).unwrap();
        assert!(fs::read_to_string(path).unwrap().starts_with("{\n"));
    }

    #[test]
    fn write_to_missing_dir_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = sample().write_to_dir(&missing).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AckError>(),
            Some(AckError::OutputDirMissing(_))
        ));
        assert!(!missing.exists());
    }
}
