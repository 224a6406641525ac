//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract the style literal at a position into a registry entry
//! - `extract-all`: Extract every inline style literal in a file
//! - `inspect`: Show registries, entry names and extractable literals
//! - `init`: Initialize sheetlift configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{Config, InsertionPolicy};

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
            Some(Command::ExtractAll(cmd)) => cmd.common.verbose,
            Some(Command::Inspect(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all file commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to search for the config file from (default: current directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Per-run overrides of config file settings.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Sort static properties by name
    #[arg(long)]
    pub sort: bool,

    /// Drop comments instead of carrying them along
    #[arg(long)]
    pub no_comments: bool,

    /// Where to place a newly created registry
    #[arg(long, value_enum)]
    pub insert_at: Option<InsertionPolicy>,
}

impl StyleArgs {
    pub fn apply_to(&self, config: &mut Config) {
        if self.sort {
            config.sort_static_properties = true;
        }
        if self.no_comments {
            config.preserve_comments = false;
        }
        if let Some(policy) = self.insert_at {
            config.insertion_policy = policy;
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Source file holding the style literal
    pub file: PathBuf,

    /// Cursor line (1-based)
    #[arg(long, requires = "column", required_unless_present = "offset")]
    pub line: Option<usize>,

    /// Cursor column (1-based, in characters)
    #[arg(long, requires = "line")]
    pub column: Option<usize>,

    /// Cursor byte offset, instead of --line/--column
    #[arg(long, conflicts_with_all = ["line", "column"])]
    pub offset: Option<usize>,

    /// Name of the new registry entry (default: next free `<prefix><n>`)
    #[arg(long)]
    pub name: Option<String>,

    /// Write the result back to the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractAllCommand {
    /// Source file to extract from
    pub file: PathBuf,

    /// Write the result back to the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Source file to inspect
    pub file: PathBuf,

    /// Also report whether this line (1-based) looks like it holds an inline style
    #[arg(long)]
    pub line: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the inline style under the cursor into a StyleSheet entry
    Extract(ExtractCommand),
    /// Extract every inline style in a file
    ExtractAll(ExtractAllCommand),
    /// Show registries, entry names and extractable inline styles
    Inspect(InspectCommand),
    /// Initialize a new .sheetliftrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
