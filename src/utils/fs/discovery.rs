//! File discovery in directory trees.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::{BundleError, FileOperation, FileResultExt};

/// Recursively searches `dir` for a regular file literally named `file_name`.
///
/// Entries are visited in file-name order, so the result is deterministic for a
/// given directory state. The first match wins. Subdirectories that cannot be
/// read are skipped; only a failure to read `dir` itself is an error.
///
/// Returns `Ok(None)` when `dir` is not a directory or nothing matches.
///
/// # Examples
///
/// ```rust,no_run
/// use twig_bundle::utils::fs::find_file_named;
/// use std::path::Path;
///
/// # fn example() -> Result<(), twig_bundle::core::BundleError> {
/// let found = find_file_named(Path::new("components"), "button.twig")?;
/// # Ok(())
/// # }
/// ```
pub fn find_file_named(dir: &Path, file_name: &str) -> Result<Option<PathBuf>, BundleError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(std::io::Error::from(err)).with_file_context(FileOperation::Walk, dir);
            }
            Err(err) => {
                tracing::debug!("Skipping unreadable entry under {}: {}", dir.display(), err);
                continue;
            }
        };

        if entry.file_type().is_file() && entry.file_name() == file_name {
            return Ok(Some(entry.into_path()));
        }
    }

    Ok(None)
}
