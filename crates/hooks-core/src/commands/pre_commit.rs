//! `pre-commit-hooks`: install the repository's commit hooks

use crate::context::GenerationContext;
use crate::error::Result;
use crate::runtime::command::CommandRunner;
use crate::runtime::host::Host;
use crate::runtime::tool::{pre_commit_tool, ToolManager};
use crate::runtime::workdir::inside_dir;

pub const NAME: &str = "pre-commit-hooks";

/// Run `pre-commit install` in the project when hooks were requested.
///
/// If pre-commit is not installed for the configured interpreter it is
/// installed for this step and uninstalled again afterwards, leaving the
/// package set as it was. Every failing step aborts the command.
pub fn pre_commit_hooks<R: CommandRunner>(ctx: &GenerationContext, host: &Host<R>) -> Result<()> {
    if !ctx.install_pre_commit_hooks().is_yes() {
        host.report().skip(NAME, "pre-commit hooks not requested");
        return Ok(());
    }

    host.report().step(NAME, "installing git hooks");

    inside_dir(ctx.project_root(), || {
        let tool = ToolManager::new(pre_commit_tool(), host);
        tool.with_provisioned(|tool| tool.run(&["install"]))
    })?;

    host.report().done("pre-commit hook installed");
    Ok(())
}
