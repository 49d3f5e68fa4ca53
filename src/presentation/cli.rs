//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --root) are inherited by all subcommands
//! - Running without a subcommand behaves like `affected` with defaults

use std::path::PathBuf;

use clap::{Args, Command, FromArgMatches, Parser, Subcommand};

/// tfaffected - find the Terraform projects affected by a change
#[derive(Parser, Debug)]
#[command(name = "tfaffected")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Root of the infrastructure tree
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the projects affected by changed files
    Affected(AffectedArgs),

    /// Print the role of each directory (shared-module, project-module, project)
    Classify {
        /// Tree-relative directories
        #[arg(required = true)]
        dirs: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedArgs {
    /// Changed files (skips git); comma separated or repeated
    #[arg(short = 'f', long = "changed-file", value_name = "FILE", value_delimiter = ',')]
    pub changed_files: Vec<String>,

    /// Base revision of the diff range
    #[arg(long)]
    pub base_ref: Option<String>,

    /// Head revision of the diff range
    #[arg(long)]
    pub head_ref: Option<String>,

    /// Only consider changed files matching these globs
    #[arg(long = "files", value_name = "GLOB", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Drop changed files matching these globs
    #[arg(long = "files-ignore", value_name = "GLOB", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Treat a change at the tree root as affecting every project
    #[arg(long)]
    pub resolve_root: bool,

    /// Directories never expanded or reported (replaces the configured list)
    #[arg(long = "ignore-path", value_name = "DIR", value_delimiter = ',')]
    pub ignore_paths: Vec<String>,

    /// Config file (defaults to <root>/.tfaffected.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the resolution trace
    #[arg(long)]
    pub trace: bool,

    /// Explain how a directory was reached
    #[arg(long, value_name = "DIR")]
    pub explain: Option<String>,

    /// Append `changed-directories=<json>` to this file
    #[arg(long, value_name = "PATH", env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,
}

impl Cli {
    /// The subcommand to run, defaulting to `affected`.
    pub fn command_or_default(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Affected(AffectedArgs::from_env()))
    }
}

impl AffectedArgs {
    /// Arguments of a bare `affected` run, with env-backed flags filled by clap.
    pub fn from_env() -> Self {
        AffectedArgs::augment_args(Command::new("affected"))
            .try_get_matches_from(["affected"])
            .and_then(|matches| AffectedArgs::from_arg_matches(&matches))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "could not read affected defaults from the environment");
                AffectedArgs::default()
            })
    }
}
