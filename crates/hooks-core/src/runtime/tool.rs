//! Management of pip-installed Python tools
//!
//! Provides a reusable abstraction for checking, installing and removing a
//! tool that lives in the interpreter's site-packages, like pre-commit.

use crate::error::Result;
use crate::runtime::command::CommandRunner;
use crate::runtime::host::Host;

/// Configuration for a pip-managed tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Distribution name as shown by `pip list` (e.g., "pre-commit")
    pub package: &'static str,
    /// Module passed to `python -m` (e.g., "pre_commit")
    pub module: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
}

/// Whether a tool had to be installed for the current operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provision {
    /// The tool was already there and must be left in place
    AlreadyInstalled,
    /// The tool was installed just now and must be removed afterwards
    Temporary,
}

/// Manager for checking and installing a tool through `python -m pip`
pub struct ToolManager<'a, R: CommandRunner> {
    config: ToolConfig,
    host: &'a Host<R>,
}

impl<'a, R: CommandRunner> ToolManager<'a, R> {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig, host: &'a Host<R>) -> Self {
        Self { config, host }
    }

    /// Check whether the package shows up in `pip list`
    pub fn is_installed(&self) -> Result<bool> {
        let listing = self.host.run(&[self.host.python(), "-m", "pip", "list"])?;
        Ok(contains(&listing, self.config.package.as_bytes()))
    }

    /// Install the tool quietly without prompting
    pub fn install(&self) -> Result<()> {
        self.host.run(&[
            self.host.python(),
            "-m",
            "pip",
            "install",
            "--upgrade",
            "--no-input",
            "--quiet",
            self.config.package,
        ])?;
        Ok(())
    }

    /// Remove the tool quietly without prompting
    pub fn uninstall(&self) -> Result<()> {
        self.host.run(&[
            self.host.python(),
            "-m",
            "pip",
            "uninstall",
            "--yes",
            "--quiet",
            self.config.package,
        ])?;
        Ok(())
    }

    /// Run the tool's module with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let mut argv = vec![self.host.python(), "-m", self.config.module];
        argv.extend_from_slice(args);
        self.host.run(&argv)
    }

    /// Make sure the tool is installed, remembering whether it was already
    pub fn provision(&self) -> Result<Provision> {
        if self.is_installed()? {
            return Ok(Provision::AlreadyInstalled);
        }

        self.host.report().debug(format!(
            "{} not installed, installing temporarily",
            self.config.display_name
        ));
        self.install()?;
        Ok(Provision::Temporary)
    }

    /// Provision the tool, run `f`, then undo a temporary provisioning.
    ///
    /// The uninstall is attempted even when `f` fails. The error from `f`
    /// takes precedence over an uninstall error, which is then only printed.
    pub fn with_provisioned<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        let provision = self.provision()?;
        let outcome = f(self);

        if provision == Provision::AlreadyInstalled {
            return outcome;
        }

        let reverted = self.uninstall();
        match (outcome, reverted) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(revert_err)) => {
                self.host.report().warn(format!(
                    "{} was left installed: {}",
                    self.config.display_name, revert_err
                ));
                Err(e)
            }
        }
    }
}

/// Pre-configured tool config for pre-commit
pub fn pre_commit_tool() -> ToolConfig {
    ToolConfig {
        package: "pre-commit",
        module: "pre_commit",
        display_name: "pre-commit",
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}
