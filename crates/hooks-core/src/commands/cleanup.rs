//! `cleanup`: remove generated files the user opted out of

use crate::choices::YesNo;
use crate::cleanup::clear;
use crate::context::GenerationContext;
use crate::error::Result;
use crate::report::Reporter;

pub const NAME: &str = "cleanup";

/// CLI entry point inside the package directory
pub const CLI_FILE: &str = "cli.py";
/// License file at the project root
pub const LICENSE_FILE: &str = "LICENSE";
/// pre-commit configuration at the project root
pub const PRE_COMMIT_CONFIG: &str = ".pre-commit-config.yaml";

/// Remove the CLI module, license file and pre-commit config when the
/// matching choice turned them off. Safe to run repeatedly.
pub fn cleanup(ctx: &GenerationContext, report: &Reporter) -> Result<()> {
    report.step(NAME, "removing unused files");

    if ctx.command_line_interface() == YesNo::No {
        if ctx.package_name().is_empty() {
            report.warn(format!(
                "no package name given, leaving any {} in place",
                CLI_FILE
            ));
        } else {
            clear(&ctx.package_dir(), [CLI_FILE], report)?;
        }
    }

    if ctx.license_type().is_none() {
        clear(ctx.project_root(), [LICENSE_FILE], report)?;
    }

    if ctx.install_pre_commit_hooks() == YesNo::No {
        clear(ctx.project_root(), [PRE_COMMIT_CONFIG], report)?;
    }

    Ok(())
}
