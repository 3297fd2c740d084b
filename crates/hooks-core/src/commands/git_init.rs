//! `git-init`: create the project's repository

use crate::context::GenerationContext;
use crate::error::Result;
use crate::runtime::command::CommandRunner;
use crate::runtime::host::Host;
use crate::runtime::workdir::inside_dir;

pub const NAME: &str = "git-init";

/// Initialize a git repository on `main` and stage every file.
///
/// Does nothing when `<project_root>/.git` is already a directory, so an
/// existing repository is never touched. No commit is created.
pub fn git_init<R: CommandRunner>(ctx: &GenerationContext, host: &Host<R>) -> Result<()> {
    let git_dir = ctx.project_root().join(".git");

    if git_dir.is_dir() {
        host.report().skip(NAME, "repository already initialized");
        return Ok(());
    }

    host.report()
        .step(NAME, format!("initializing {}", ctx.project_root().display()));

    inside_dir(ctx.project_root(), || {
        host.run(&["git", "init", "-b", "main"])?;
        host.run(&["git", "add", "."])?;
        Ok(())
    })?;

    host.report().done("repository created on branch main");
    Ok(())
}
