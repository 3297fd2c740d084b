//! Process-level plumbing for hook commands
//!
//! This module provides:
//! - Synchronous external command execution
//! - A scoped working-directory switch
//! - Provisioning of pip-managed tools like pre-commit

pub mod command;
pub mod host;
pub mod tool;
pub mod workdir;

pub use command::{run_command, CommandRunner, SystemRunner};
pub use host::{Host, DEFAULT_PYTHON};
pub use tool::{pre_commit_tool, Provision, ToolConfig, ToolManager};
pub use workdir::{inside_dir, WorkingDirGuard};
