//! Shared helpers for unit tests

use crate::error::{HookError, Result};
use crate::runtime::command::CommandRunner;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that change the process working directory
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Recording stand-in for pip, pre-commit and git
///
/// Keeps a fake "installed" flag for the tool, writes the files the real
/// tools would write relative to the current directory, and records every
/// command line together with the directory it ran in.
#[derive(Debug, Default)]
pub struct FakeRunner {
    tool_installed: Cell<bool>,
    fail_on: Option<&'static str>,
    calls: RefCell<Vec<(PathBuf, String)>>,
}

impl FakeRunner {
    pub fn with_tool_installed(installed: bool) -> Self {
        Self {
            tool_installed: Cell::new(installed),
            ..Self::default()
        }
    }

    /// Fail every command line containing `pattern` with exit code 1
    pub fn failing_on(mut self, pattern: &'static str) -> Self {
        self.fail_on = Some(pattern);
        self
    }

    pub fn tool_installed(&self) -> bool {
        self.tool_installed.get()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn cwds(&self) -> Vec<PathBuf> {
        self.calls.borrow().iter().map(|(d, _)| d.clone()).collect()
    }

    fn fail(command: &str, stderr: &str) -> HookError {
        HookError::Process {
            command: command.to_string(),
            code: Some(1),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, argv: &[&str]) -> Result<Vec<u8>> {
        let command = argv.join(" ");
        let cwd = std::env::current_dir().unwrap_or_default();
        self.calls.borrow_mut().push((cwd, command.clone()));

        if let Some(pattern) = self.fail_on {
            if command.contains(pattern) {
                return Err(Self::fail(&command, "simulated failure"));
            }
        }

        match argv.get(1..).unwrap_or_default() {
            ["-m", "pip", "list"] => {
                let mut listing = String::from("Package    Version\n---------- -------\npip        24.0\n");
                if self.tool_installed.get() {
                    listing.push_str("pre-commit 3.7.1\n");
                }
                Ok(listing.into_bytes())
            }
            ["-m", "pip", "install", ..] => {
                self.tool_installed.set(true);
                Ok(Vec::new())
            }
            ["-m", "pip", "uninstall", ..] => {
                self.tool_installed.set(false);
                Ok(Vec::new())
            }
            ["-m", "pre_commit", "install"] => {
                if !self.tool_installed.get() {
                    return Err(Self::fail(&command, "No module named pre_commit"));
                }
                let hooks = PathBuf::from(".git").join("hooks");
                fs::create_dir_all(&hooks).map_err(|e| Self::fail(&command, &e.to_string()))?;
                fs::write(hooks.join("pre-commit"), "#!/usr/bin/env bash\n")
                    .map_err(|e| Self::fail(&command, &e.to_string()))?;
                Ok(b"pre-commit installed at .git/hooks/pre-commit\n".to_vec())
            }
            ["init", "-b", "main"] => {
                fs::create_dir_all(PathBuf::from(".git").join("objects"))
                    .map_err(|e| Self::fail(&command, &e.to_string()))?;
                fs::write(PathBuf::from(".git").join("HEAD"), "ref: refs/heads/main\n")
                    .map_err(|e| Self::fail(&command, &e.to_string()))?;
                Ok(Vec::new())
            }
            _ => Ok(Vec::new()),
        }
    }
}
