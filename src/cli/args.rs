//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Full project scan (ARB + JSON + Dart sources)
//! - `intl`: Targeted extraction of internationalization.dart
//! - `coverage`: Per-language coverage report
//! - `template`: CSV template with an empty column for a new language
//! - `init`: Initialize a .flowlaterc.json configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::CollisionPolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Intl(cmd)) => cmd.common.verbose,
            Some(Command::Coverage(cmd)) => cmd.common.verbose,
            Some(Command::Template(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// FlutterFlow project root
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Collision policy (overrides config file)
    #[arg(long, value_enum)]
    pub collision_policy: Option<CollisionPolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the merged table as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the merged table as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct IntlCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the extracted table as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the extracted table as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CoverageCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Language code to analyze (e.g. sg)
    #[arg(long)]
    pub lang: String,
}

#[derive(Debug, Args)]
pub struct TemplateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Language code for the new empty column
    #[arg(long)]
    pub lang: String,

    /// Output path for the template CSV
    #[arg(long, default_value = "translation_template.csv")]
    pub output: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translations from the whole project (ARB, JSON, Dart sources)
    Extract(ExtractCommand),
    /// Extract from lib/flutter_flow/internationalization.dart only
    Intl(IntlCommand),
    /// Report translation coverage for one language
    Coverage(CoverageCommand),
    /// Create a CSV template for adding a new language
    Template(TemplateCommand),
    /// Initialize a new .flowlaterc.json configuration file
    Init,
}
