//! Packages command — previews package acknowledgement records.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::OutputFormat;
use crate::config::AckConfig;
use crate::packages::{self, LicenseMap, PackageResolved};
use crate::xcode;

/// Packages command options.
#[derive(Parser)]
pub struct PackagesCommand {
    /// Package.resolved to read; defaults to the workspace's in --project-dir.
    #[arg(long, value_name = "FILE")]
    pub resolved: Option<PathBuf>,

    /// Directory holding the .xcworkspace.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Package checkout directory to scan for licenses.
    #[arg(long, value_name = "DIR")]
    pub checkouts: Option<PathBuf>,

    /// Config file to use instead of <project-dir>/.acknowledger.yaml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl PackagesCommand {
    /// Executes the packages command.
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Builds package records and renders them in the chosen format.
    pub fn render(&self) -> Result<String> {
        let config = AckConfig::load(&self.project_dir, self.config.as_deref())?;

        let licenses = match &self.checkouts {
            Some(dir) => xcode::scan_licenses(dir, &config.license_files)?,
            None => LicenseMap::new(),
        };

        let resolved_path = match &self.resolved {
            Some(path) => path.clone(),
            None => xcode::resolved_file_path(&self.project_dir)?,
        };
        let resolved = PackageResolved::load(&resolved_path)?;

        self.format.render(&packages::build(&resolved, &licenses))
    }
}
