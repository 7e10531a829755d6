//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all otazo
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `audit`: Dataset-wide translation statistics (exit 1 on gaps)
//! - `missing`: Canonical strings still lacking a translation in one language
//! - `resolve`: Resolve every record of the dataset for one language
//! - `draw`: Draw one random question
//! - `overlays`: Check that overlay keys are in normalized form
//! - `languages`: List supported languages
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::{dataset::Category, language::Language, project::ProjectOverrides};

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
        self.common().is_some_and(|common| common.verbose)
    }

    fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Audit(cmd)) => Some(&cmd.common),
            Some(Command::Missing(cmd)) => Some(&cmd.common),
            Some(Command::Resolve(cmd)) => Some(&cmd.common),
            Some(Command::Draw(cmd)) => Some(&cmd.common),
            Some(Command::Overlays(cmd)) => Some(&cmd.common),
            Some(Command::Languages) | Some(Command::Init(_)) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all commands that read the dataset.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Dataset JSON file (overrides config file)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Overlay dictionaries directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Reference language of the dataset (overrides config file)
    #[arg(long, value_enum)]
    pub reference_language: Option<Language>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn overrides(&self) -> ProjectOverrides {
        ProjectOverrides {
            dataset: self.dataset.clone(),
            locales_root: self.locales_root.clone(),
            reference_language: self.reference_language,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MissingCommand {
    /// Target language
    #[arg(value_enum)]
    pub language: Language,

    /// Exit with status 1 when the list is not empty
    #[arg(long)]
    pub fail_on_missing: bool,

    /// Also report every record whose value is absent or blank, and exit
    /// with status 1 when there is one
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to create the config file in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Dataset JSON file, relative to the project root
    #[arg(long)]
    pub dataset: Option<String>,

    /// Overlay dictionaries directory, relative to the project root
    #[arg(long)]
    pub locales_root: Option<String>,

    /// Reference language of the dataset
    #[arg(long, value_enum)]
    pub reference_language: Option<Language>,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Language code to resolve for (unsupported codes use the fallback chain)
    pub language: String,

    /// Only resolve records of this topic (0-based index)
    #[arg(long)]
    pub topic: Option<usize>,

    /// Only resolve records of this category
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DrawCommand {
    /// Language code to resolve the drawn question for
    pub language: String,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct OverlaysCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report translation coverage, placeholders and duplicates (JSON)
    Audit(AuditCommand),
    /// List canonical strings still missing a translation in one language (JSON)
    Missing(MissingCommand),
    /// Resolve dataset records for a language, one JSON object per line
    Resolve(ResolveCommand),
    /// Shake the jar: draw one random question
    Draw(DrawCommand),
    /// Check overlay dictionary keys against the normalized key format
    Overlays(OverlaysCommand),
    /// List supported languages
    Languages,
    /// Initialize a new .otazorc.json configuration file
    Init(InitCommand),
    /// Start MCP server for AI coding agents
    Serve,
}
