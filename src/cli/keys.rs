//! Keys command.
//!
//! Dry run: loads secrets into a scratch environment and prints which key
//! each file would become. Secret values are never printed.

use crate::cli::{output, SourceArgs};
use crate::core::env::MemoryEnv;
use crate::error::Result;

/// List derived keys.
pub fn execute(source: &SourceArgs, json: bool) -> Result<()> {
    let mut scratch = MemoryEnv::new();
    let report = source.loader().load_into(&mut scratch, &source.options())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.bindings)?);
        return Ok(());
    }

    if report.is_empty() {
        output::dimmed(&format!("no secrets in {}", source.dir.display()));
        return Ok(());
    }

    let dir = source.dir.display().to_string();
    output::header(&format!("Secrets in {}", output::path(&dir)));
    output::rule();
    for binding in &report.bindings {
        output::kv(&binding.file, output::key(&binding.key));
    }

    for key in &report.overridden {
        output::warn(&format!("{} is set by more than one file", output::key(key)));
    }

    Ok(())
}
