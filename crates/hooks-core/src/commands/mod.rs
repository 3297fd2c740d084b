//! Post-generation hook commands
//!
//! Each command takes the shared `GenerationContext` and can run on its own.
//! `run_all` chains them in the order a fresh project needs:
//! cleanup first, so opted-out files are never staged by `git-init`, then the
//! repository, then the hooks that live inside it.

pub mod cleanup;
pub mod git_init;
pub mod pre_commit;

use crate::context::GenerationContext;
use crate::error::Result;
use crate::runtime::command::CommandRunner;
use crate::runtime::host::Host;

pub use cleanup::cleanup;
pub use git_init::git_init;
pub use pre_commit::pre_commit_hooks;

/// Run cleanup, git-init and pre-commit-hooks in order
pub fn run_all<R: CommandRunner>(ctx: &GenerationContext, host: &Host<R>) -> Result<()> {
    cleanup(ctx, host.report())?;
    git_init(ctx, host)?;
    pre_commit_hooks(ctx, host)?;
    Ok(())
}
