//! Identifier resolution.
//!
//! Turns a raw reference taken from a directive into a file location. The
//! resolver never fails: when no candidate exists it still returns a
//! best-effort path (flagged with [`ResolvedLocation::exists`] set to false) so
//! that compilation can report which file was missing.
//!
//! # Resolution Order
//!
//! 1. `namespace:name` with a registered namespace: try the component location
//!    `<base>/<name>/<name>` with the extension probes below.
//! 2. If that is missing, search `<base>` recursively for `<name>.twig`.
//! 3. Otherwise expand a leading `@alias/` or `alias::` prefix.
//! 4. Probe the literal path, then `.twig`, then `.html.twig`; each candidate
//!    first as an absolute path (relative paths are taken from the project
//!    root), then relative to the including template's directory.
//! 5. Give up with the directory-relative literal path.

pub mod namespace;

pub use namespace::{ComponentRef, NamespaceTable};

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::constants::{PRIMARY_EXTENSION, SECONDARY_EXTENSION};
use crate::utils::fs::{absolutize, append_extension, find_file_named, normalize_path};

/// A reference mapped to a normalized absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedLocation {
    /// Normalized path of the template
    pub path: PathBuf,
    /// Whether a regular file existed at `path` when resolving
    pub exists: bool,
}

impl ResolvedLocation {
    fn found(path: PathBuf) -> Self {
        Self {
            path: normalize_path(&path),
            exists: true,
        }
    }

    fn missing(path: PathBuf) -> Self {
        Self {
            path: normalize_path(&path),
            exists: false,
        }
    }

    /// Directory containing the template, used for relative lookups.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("/"))
    }
}

/// Resolves references against a namespace table and the filesystem.
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    namespaces: NamespaceTable,
    root: PathBuf,
}

impl IdentifierResolver {
    /// Create a resolver. Relative namespace directories are taken from `root`.
    pub fn new(namespaces: &NamespaceTable, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            namespaces: namespaces.rooted_at(&root),
            root,
        }
    }

    /// The namespace table with absolute base directories.
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// The project root used for relative, non-namespaced references.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `reference` as written in a template located in `including_dir`.
    pub fn resolve(&self, reference: &str, including_dir: &Path) -> ResolvedLocation {
        let expanded = if let Some(component) = self.namespaces.component(reference) {
            if let Some(found) = self.resolve_component(&component) {
                debug!("Resolved component '{}' to {}", reference, found.display());
                return ResolvedLocation::found(found);
            }
            component.component_path()
        } else {
            if let Some(alias) = self.namespaces.unknown_alias(reference) {
                match self.namespaces.suggest(alias) {
                    Some(suggestion) => warn!(
                        "Unknown template namespace '{}' in '{}', did you mean '{}'?",
                        alias, reference, suggestion
                    ),
                    None => warn!("Unknown template namespace '{}' in '{}'", alias, reference),
                }
            }
            self.namespaces.expand(reference).unwrap_or_else(|| PathBuf::from(reference))
        };

        let location = self.probe(&expanded, including_dir);
        if location.exists {
            debug!("Resolved '{}' to {}", reference, location.path.display());
        } else {
            debug!("Could not resolve '{}', best guess {}", reference, location.path.display());
        }
        location
    }

    /// Component lookup: the conventional location first, then a recursive search.
    fn resolve_component(&self, component: &ComponentRef<'_>) -> Option<PathBuf> {
        let conventional = component.component_path();
        if let Some(found) = candidates(&conventional).into_iter().find(|c| c.is_file()) {
            return Some(found);
        }

        let file_name = format!("{}.{}", component.name, PRIMARY_EXTENSION);
        match find_file_named(component.base, &file_name) {
            Ok(found) => found,
            Err(err) => {
                warn!(
                    "Could not search namespace '{}' for component '{}': {}",
                    component.namespace, component.name, err
                );
                None
            }
        }
    }

    fn probe(&self, expanded: &Path, including_dir: &Path) -> ResolvedLocation {
        for candidate in candidates(expanded) {
            let absolute = absolutize(&self.root, &candidate);
            trace!("Probing {}", absolute.display());
            if absolute.is_file() {
                return ResolvedLocation::found(absolute);
            }

            let relative = including_dir.join(&candidate);
            trace!("Probing {}", relative.display());
            if relative.is_file() {
                return ResolvedLocation::found(relative);
            }
        }

        ResolvedLocation::missing(including_dir.join(expanded))
    }
}

/// Literal path, then the primary and secondary extensions appended.
fn candidates(path: &Path) -> [PathBuf; 3] {
    [
        path.to_path_buf(),
        append_extension(path, PRIMARY_EXTENSION),
        append_extension(path, SECONDARY_EXTENSION),
    ]
}
