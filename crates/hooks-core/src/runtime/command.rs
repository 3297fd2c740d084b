//! Synchronous execution of external commands

use crate::error::{HookError, Result};
use std::process::{Command, Stdio};

/// Executes an already-tokenized command line and returns its stdout
pub trait CommandRunner {
    fn run(&self, argv: &[&str]) -> Result<Vec<u8>>;
}

/// Runs commands as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[&str]) -> Result<Vec<u8>> {
        run_command(argv)
    }
}

/// Run `argv` to completion with stdin closed.
///
/// A non-zero exit is returned as `HookError::Process` carrying the exit code
/// and both captured streams.
pub fn run_command(argv: &[&str]) -> Result<Vec<u8>> {
    let (program, args) = argv.split_first().ok_or(HookError::EmptyCommand)?;
    let command = argv.join(" ");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| HookError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(HookError::Process {
            command,
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output.stdout)
}
