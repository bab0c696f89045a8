//! Run command.
//!
//! Loads secrets into this process's environment, then executes a command
//! that inherits it.

use crate::cli::SourceArgs;
use crate::core::env::ProcessEnv;
use crate::error::{Error, Result};

/// Run a command with secrets loaded as environment variables.
pub fn execute(source: &SourceArgs, command: &[String]) -> Result<()> {
    let exit_code = run_with_secrets(source, command)?;
    std::process::exit(exit_code);
}

/// Load secrets, spawn the command and wait for it.
fn run_with_secrets(source: &SourceArgs, command: &[String]) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(Error::NoCommand)?;

    // Single-threaded at this point: nothing else reads the environment yet.
    source
        .loader()
        .load_into(&mut ProcessEnv, &source.options())?;

    let status = std::process::Command::new(program).args(args).status()?;
    // Killed by a signal: no exit code, report failure
    Ok(status.code().unwrap_or(1))
}
