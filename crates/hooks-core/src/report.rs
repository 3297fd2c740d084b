//! Terminal progress output for hook commands

use colored::Colorize;
use std::fmt::Display;

/// How much progress output to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Prints hook progress in the scaffolder's `->` style
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Reporter that prints nothing except warnings
    pub fn quiet() -> Self {
        Self::new(Verbosity::Quiet)
    }

    /// A command is starting
    pub fn step(&self, command: &str, message: impl Display) {
        if self.verbosity >= Verbosity::Normal {
            println!("  {} {} {}", "->".blue(), command.bold(), message);
        }
    }

    /// A command decided there is nothing to do
    pub fn skip(&self, command: &str, reason: impl Display) {
        if self.verbosity >= Verbosity::Normal {
            println!("  {} {} {}", "->".blue(), command.bold(), reason.to_string().dimmed());
        }
    }

    /// A single change was made
    pub fn done(&self, message: impl Display) {
        if self.verbosity >= Verbosity::Normal {
            println!("     {} {}", "done".green(), message);
        }
    }

    pub fn warn(&self, message: impl Display) {
        eprintln!("{} {}", "Warning:".yellow(), message);
    }

    pub fn debug(&self, message: impl Display) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("     {}", message.to_string().dimmed());
        }
    }
}
