//! Error types for hook operations

use std::path::PathBuf;

/// Result type for hook operations
pub type Result<T> = std::result::Result<T, HookError>;

/// Errors that can occur while validating input or running hooks
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error(
        "The package name ({name}) is not a valid Python module name. \
         Please do not use a - and use _ instead"
    )]
    InvalidPackageName { name: String },

    #[error("Command `{command}` exited with {}{}", describe_code(.code), describe_output(.stderr, .stdout))]
    Process {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot run an empty command line")]
    EmptyCommand,

    #[error("Project root {path} is not usable: {source}")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Project root {path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to {action} working directory {path}: {source}")]
    WorkingDirectory {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read context file {path}: {source}")]
    ContextRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid context file {path}: {source}")]
    ContextParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HookError {
    /// Exit code of the failed child process, if this is a process failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            HookError::Process { code, .. } => *code,
            _ => None,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn describe_output(stderr: &str, stdout: &str) -> String {
    let output = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };

    if output.is_empty() {
        String::new()
    } else {
        format!(":\n{}", output)
    }
}
