//! Removal of generated files and directories

use crate::error::{HookError, Result};
use crate::report::Reporter;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Delete each of `to_remove` (relative to `root`) if it exists.
///
/// Surrounding path separators are stripped from every entry. Files and
/// symlinks are unlinked; directories are removed recursively on a
/// best-effort basis, so an entry that cannot be deleted inside a directory
/// is skipped rather than stopping the pass. Missing entries are ignored.
pub fn clear<I, S>(root: &Path, to_remove: I, report: &Reporter) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    clear_with(root, to_remove, report, remove_entry)
}

fn clear_with<I, S, F>(root: &Path, to_remove: I, report: &Reporter, remove: F) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&Path, bool) -> io::Result<()>,
{
    for element in to_remove {
        let name = element.as_ref().trim_matches(|c| c == '/' || c == '\\');
        if name.is_empty() {
            continue;
        }

        let path = root.join(name);
        let metadata = match fs::symlink_metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => return Err(HookError::Remove { path, source }),
        };

        if metadata.is_dir() {
            match remove_tree(&path, report, &remove) {
                0 => report.done(format!("removed {}/", name)),
                left => report.warn(format!(
                    "{} entr{} left behind in {}/",
                    left,
                    if left == 1 { "y" } else { "ies" },
                    name
                )),
            }
        } else {
            match fs::remove_file(&path) {
                Ok(()) => report.done(format!("removed {}", name)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => return Err(HookError::Remove { path, source }),
            }
        }
    }

    Ok(())
}

fn remove_entry(path: &Path, is_dir: bool) -> io::Result<()> {
    if is_dir {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Remove a directory tree, skipping whatever cannot be removed.
///
/// Returns how many entries could not be removed or visited.
fn remove_tree<F>(dir: &Path, report: &Reporter, remove: &F) -> usize
where
    F: Fn(&Path, bool) -> io::Result<()>,
{
    let mut left = 0;

    for entry in WalkDir::new(dir).contents_first(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.debug(format!("skipped while removing {}: {}", dir.display(), e));
                left += 1;
                continue;
            }
        };

        if let Err(e) = remove(entry.path(), entry.file_type().is_dir()) {
            report.debug(format!("could not remove {}: {}", entry.path().display(), e));
            left += 1;
        }
    }

    left
}
