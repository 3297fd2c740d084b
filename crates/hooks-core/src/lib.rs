//! Hooks Core - Shared library for project generation hooks
//!
//! A scaffolding tool calls two hooks around template rendering:
//!
//! - **pre-generation**: rejects a package name that is not a valid Python
//!   module name before any file is written ([`validate_package_name`])
//! - **post-generation**: finishes the rendered project through three
//!   commands that can each run alone or chained by [`commands::run_all`]:
//!   - `cleanup` removes files for features the user turned off
//!   - `git-init` creates the repository unless one exists
//!   - `pre-commit-hooks` installs the git hooks, provisioning pre-commit
//!     only for the duration of the call
//!
//! Template values arrive as already-substituted text. Choice resolution
//! ([`License::resolve`], [`YesNo::unless_no`], [`YesNo::only_if_yes`])
//! never fails, so nothing after generation aborts on an odd value.
//!
//! # Example Usage
//!
//! ```ignore
//! use hooks_core::{commands, GenerationContext, Host, License, YesNo};
//!
//! let ctx = GenerationContext::new(
//!     "/tmp/my-project",
//!     "my_pkg",
//!     "my-project",
//!     YesNo::No,
//!     License::resolve("apache-2.0"),
//!     YesNo::Yes,
//! )?;
//! commands::run_all(&ctx, &Host::default())?;
//! ```

pub mod choices;
pub mod cleanup;
pub mod commands;
pub mod context;
pub mod error;
pub mod report;
pub mod runtime;
pub mod validate;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use choices::{License, YesNo};
pub use cleanup::clear;
pub use context::{GenerationContext, Overrides, TemplateValues};
pub use error::{HookError, Result};
pub use report::{Reporter, Verbosity};
pub use runtime::{inside_dir, run_command, CommandRunner, Host, SystemRunner};
pub use validate::validate_package_name;
