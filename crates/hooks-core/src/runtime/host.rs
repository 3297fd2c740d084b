//! The host environment hook commands act on

use crate::error::Result;
use crate::report::Reporter;
use crate::runtime::command::{CommandRunner, SystemRunner};

/// Default interpreter whose `pip` manages Python tooling
pub const DEFAULT_PYTHON: &str = "python3";

/// External tools plus output settings shared by all hook commands
#[derive(Debug, Clone)]
pub struct Host<R: CommandRunner = SystemRunner> {
    runner: R,
    python: String,
    report: Reporter,
}

impl Host<SystemRunner> {
    pub fn new(python: impl Into<String>, report: Reporter) -> Self {
        Self::with_runner(SystemRunner, python, report)
    }
}

impl Default for Host<SystemRunner> {
    fn default() -> Self {
        Self::new(DEFAULT_PYTHON, Reporter::default())
    }
}

impl<R: CommandRunner> Host<R> {
    pub fn with_runner(runner: R, python: impl Into<String>, report: Reporter) -> Self {
        Self {
            runner,
            python: python.into(),
            report,
        }
    }

    /// Run a command line through the configured runner
    pub fn run(&self, argv: &[&str]) -> Result<Vec<u8>> {
        self.report.debug(format!("$ {}", argv.join(" ")));
        self.runner.run(argv)
    }

    pub fn python(&self) -> &str {
        &self.python
    }

    pub fn report(&self) -> &Reporter {
        &self.report
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
