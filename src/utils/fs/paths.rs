//! Path utilities for normalization.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components.
///
/// This performs logical path resolution without accessing the filesystem, so
/// it works for paths that do not exist yet and does not follow symlinks.
///
/// # Examples
///
/// ```rust,no_run
/// use twig_bundle::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/foo/./bar/../baz.twig");
/// assert_eq!(normalize_path(path), PathBuf::from("/foo/baz.twig"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` stays `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Makes `path` absolute by joining it onto `root` when it is relative, then normalizes it.
#[must_use]
pub fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&root.join(path))
    }
}

/// Appends `.extension` to the full file name (`button` → `button.twig`,
/// `page.html` → `page.html.twig`), unlike [`Path::with_extension`] which
/// replaces the last one.
#[must_use]
pub fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".");
    os.push(extension);
    PathBuf::from(os)
}
