//! Generate command — writes Acknowledgements.json.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::AckConfig;
use crate::data::Acknowledgements;
use crate::packages::{self, PackageResolved};
use crate::{contributors, git, xcode};

/// Generate command options.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Xcode target whose build settings locate the package checkouts.
    #[arg(long, required_unless_present = "checkouts")]
    pub scheme: Option<String>,

    /// Directory that receives Acknowledgements.json.
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,

    /// Directory holding the .xcworkspace, .xcodeproj and git repository.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Package.resolved to read instead of the workspace's.
    #[arg(long, value_name = "FILE")]
    pub resolved: Option<PathBuf>,

    /// Package checkout directory to scan instead of asking xcodebuild.
    #[arg(long, value_name = "DIR")]
    pub checkouts: Option<PathBuf>,

    /// Config file to use instead of <project-dir>/.acknowledger.yaml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    /// Executes the generate command.
    pub fn execute(self) -> Result<()> {
        let path = self.run()?;
        info!(path = %path.display(), "Acknowledgements generated");
        println!("done writing acknowledgements ✨");
        Ok(())
    }

    /// Builds the document and writes it, returning the written path.
    ///
    /// Every input is gathered before the output directory is touched.
    pub fn run(&self) -> Result<PathBuf> {
        let config = AckConfig::load(&self.project_dir, self.config.as_deref())?;

        let checkouts = self.checkouts_dir()?;
        let licenses = xcode::scan_licenses(&checkouts, &config.license_files)?;

        let resolved_path = match &self.resolved {
            Some(path) => path.clone(),
            None => xcode::resolved_file_path(&self.project_dir)?,
        };
        let resolved = PackageResolved::load(&resolved_path)?;
        let packages = packages::build(&resolved, &licenses);

        let entries = git::collect_author_entries(&self.project_dir)
            .context("Failed to read contributor history")?;
        let contributors = contributors::resolve(&entries, &config.aliases);

        Acknowledgements::new(packages, contributors).write_to_dir(&self.output)
    }

    fn checkouts_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.checkouts {
            return Ok(dir.clone());
        }

        let scheme = self
            .scheme
            .as_deref()
            .context("Please provide a scheme with the --scheme flag")?;
        let project = xcode::find_project(&self.project_dir)?;
        xcode::checkouts_dir(&project, scheme)
    }
}
