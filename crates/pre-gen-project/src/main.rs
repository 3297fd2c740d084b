//! pre-gen-project - Validates template input before generation

use clap::Parser;
use colored::Colorize;
use hooks_core::validate_package_name;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pre-gen-project")]
#[command(about = "Pre-generation checks for project templates")]
#[command(version)]
pub struct Args {
    /// Package name the project will be generated with
    #[arg(long = "package-name")]
    pub package_name: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match validate_package_name(&args.package_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("ERROR: {}", e).bright_red());
            ExitCode::from(1)
        }
    }
}
