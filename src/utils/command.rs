//! Command execution utilities

use crate::error::{FetchError, Result};
use std::process::Command;

/// Runs an external program and hands back its text output.
///
/// Probes depend on this trait rather than on `std::process` so that tests can
/// substitute canned output and inspect the exact invocations.
pub trait CommandRunner: Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        run_command(program, args)
    }
}

/// Execute a command and return stdout followed by stderr as a String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        Ok(combined)
    } else {
        Err(FetchError::Detection(format!(
            "Command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}
