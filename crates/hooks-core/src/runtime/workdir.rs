//! Scoped working-directory switch
//!
//! The process working directory is global state. `WorkingDirGuard` records
//! the current directory, enters the target, and switches back when it is
//! restored explicitly or dropped (including during a panic unwind).

use crate::error::{HookError, Result};
use colored::Colorize;
use std::env;
use std::path::{Path, PathBuf};

/// Guard that restores the original working directory
#[derive(Debug)]
pub struct WorkingDirGuard {
    original: PathBuf,
    restored: bool,
}

impl WorkingDirGuard {
    /// Remember the current directory and change into `dir`
    pub fn enter(dir: &Path) -> Result<Self> {
        let original = env::current_dir().map_err(|source| HookError::WorkingDirectory {
            action: "read current",
            path: PathBuf::from("."),
            source,
        })?;

        env::set_current_dir(dir).map_err(|source| HookError::WorkingDirectory {
            action: "enter",
            path: dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            original,
            restored: false,
        })
    }

    /// Directory that will be restored
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Switch back, reporting a failure instead of leaving it to `Drop`
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        env::set_current_dir(&self.original).map_err(|source| HookError::WorkingDirectory {
            action: "restore",
            path: self.original.clone(),
            source,
        })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(e) = env::set_current_dir(&self.original) {
            eprintln!(
                "{} could not return to {}: {}",
                "Warning:".yellow(),
                self.original.display(),
                e
            );
        }
    }
}

/// Run `f` with `dir` as the working directory.
///
/// The previous directory is restored on every exit path. When both `f` and
/// the restore fail, the error from `f` is returned and the restore failure
/// is printed.
pub fn inside_dir<T, F>(dir: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let guard = WorkingDirGuard::enter(dir)?;
    let outcome = f();
    let restored = guard.restore();

    match (outcome, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            eprintln!("{} {}", "Warning:".yellow(), restore_err);
            Err(e)
        }
    }
}
