//! Contributors command — previews resolved contributors.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::OutputFormat;
use crate::config::AckConfig;
use crate::{contributors, git};

/// Contributors command options.
#[derive(Parser)]
pub struct ContributorsCommand {
    /// Repository to read history from.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub repo: PathBuf,

    /// Config file to use instead of <repo>/.acknowledger.yaml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl ContributorsCommand {
    /// Executes the contributors command.
    pub fn execute(self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Resolves contributors from history and renders them in the chosen format.
    pub fn render(&self) -> Result<String> {
        let config = AckConfig::load(&self.repo, self.config.as_deref())?;
        let entries = git::collect_author_entries(&self.repo)?;
        let resolved = contributors::resolve(&entries, &config.aliases);

        self.format.render(&resolved)
    }
}
