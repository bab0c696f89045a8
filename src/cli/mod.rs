//! Command-line interface.

pub mod completions;
pub mod keys;
pub mod output;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::SECRET_DIR;
use crate::core::loader::SecretLoader;
use crate::core::options::LoadOptions;

/// Swarmed - load mounted secret files into environment variables.
#[derive(Parser)]
#[command(
    name = "swarmed",
    about = "Load mounted secret files into environment variables",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where secrets come from and how their names are rewritten.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Secrets directory
    #[arg(long, env = "SWARMED_SECRETS_DIR", default_value = SECRET_DIR)]
    pub dir: PathBuf,

    /// Strip this prefix (followed by `_` or `-`) from every key
    #[arg(short, long, env = "SWARMED_PREFIX", default_value = "")]
    pub prefix: String,

    /// Strip a trailing `_v...` / `-v...` segment from every key
    #[arg(short = 's', long, env = "SWARMED_REMOVE_VERSION_SUFFIX")]
    pub remove_version_suffix: bool,
}

impl SourceArgs {
    pub fn loader(&self) -> SecretLoader {
        SecretLoader::with_dir(&self.dir)
    }

    pub fn options(&self) -> LoadOptions {
        LoadOptions::new()
            .prefix(self.prefix.as_str())
            .remove_version_suffix(self.remove_version_suffix)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run a command with secrets loaded as env vars
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List the keys secrets would be loaded as (values are never shown)
    Keys {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Run { source, command } => run::execute(&source, &command),
        Keys { source, json } => keys::execute(&source, json),
        Completions { shell } => completions::execute(shell),
    }
}
