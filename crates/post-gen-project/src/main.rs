//! post-gen-project - Finishes a freshly generated project

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use hooks_core::commands;
use hooks_core::runtime::DEFAULT_PYTHON;
use hooks_core::{
    GenerationContext, Host, License, Overrides, Reporter, TemplateValues, Verbosity, YesNo,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "post-gen-project")]
#[command(about = "Post-generation hooks for a freshly generated project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to generated project (defaults to the current directory)
    #[arg(long = "project-root", global = true)]
    pub project_root: Option<PathBuf>,

    /// Slug of project
    #[arg(long = "project-slug", global = true)]
    pub project_slug: Option<String>,

    /// Name of the project's package
    #[arg(long = "package-name", global = true)]
    pub package_name: Option<String>,

    /// Add CLI to project or not
    #[arg(long = "command-line-interface", global = true, value_enum, ignore_case = true)]
    pub command_line_interface: Option<YesNo>,

    /// Which license to use
    #[arg(long = "license-type", global = true, value_enum, ignore_case = true)]
    pub license_type: Option<License>,

    /// Add pre commit hooks or not
    #[arg(long = "install-pre-commit-hooks", global = true, value_enum, ignore_case = true)]
    pub install_pre_commit_hooks: Option<YesNo>,

    /// YAML file with the template values substituted for this project
    #[arg(long = "context-file", global = true)]
    pub context_file: Option<PathBuf>,

    /// Python interpreter whose pip manages pre-commit
    #[arg(long, global = true, default_value = DEFAULT_PYTHON)]
    pub python: String,

    /// Print every external command and skipped removal
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Initialize git repository in generated project
    GitInit,
    /// Install pre commit hooks
    PreCommitHooks,
    /// Remove unnecessary files in generated project
    Cleanup,
}

impl Args {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn context(&self) -> Result<GenerationContext> {
        let values = match &self.context_file {
            Some(path) => TemplateValues::load(path)?,
            None => TemplateValues::default(),
        };

        let ctx = GenerationContext::resolve(
            &values,
            Overrides {
                project_root: self.project_root.clone(),
                project_slug: self.project_slug.clone(),
                package_name: self.package_name.clone(),
                command_line_interface: self.command_line_interface,
                license_type: self.license_type,
                install_pre_commit_hooks: self.install_pre_commit_hooks,
            },
        )?;
        Ok(ctx)
    }
}

fn run(args: &Args) -> Result<()> {
    let ctx = args.context().context("Invalid hook configuration")?;
    let host = Host::new(args.python.clone(), Reporter::new(args.verbosity()));

    match args.command {
        Some(Command::GitInit) => commands::git_init(&ctx, &host)?,
        Some(Command::PreCommitHooks) => commands::pre_commit_hooks(&ctx, &host)?,
        Some(Command::Cleanup) => commands::cleanup(&ctx, host.report())?,
        // No subcommand provided, run the whole post-generation pipeline
        None => commands::run_all(&ctx, &host)?,
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
