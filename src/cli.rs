//! CLI interface for acknowledger.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

pub mod contributors;
pub mod generate;
pub mod packages;

pub use contributors::ContributorsCommand;
pub use generate::GenerateCommand;
pub use packages::PackagesCommand;

/// acknowledger: credits the packages and people behind a project.
#[derive(Parser)]
#[command(name = "acknowledger")]
#[command(about = "Generates Acknowledgements.json from Swift packages and git history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Writes Acknowledgements.json for an Xcode project.
    Generate(GenerateCommand),
    /// Prints the resolved contributors of a git repository.
    Contributors(ContributorsCommand),
    /// Prints the acknowledgement records of a Package.resolved.
    Packages(PackagesCommand),
}

/// Output format for preview commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML with license texts as block scalars.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Renders a value in this format.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        match self {
            Self::Yaml => crate::data::to_yaml(value),
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(generate_cmd) => generate_cmd.execute(),
            Commands::Contributors(contributors_cmd) => contributors_cmd.execute(),
            Commands::Packages(packages_cmd) => packages_cmd.execute(),
        }
    }
}
