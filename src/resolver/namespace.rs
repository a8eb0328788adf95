//! Namespace alias table.
//!
//! Maps an alias such as `components` to a base directory. Templates address
//! files under that directory in three ways:
//!
//! - `@components/button/button.twig` (Twig namespace syntax)
//! - `components::button/button.twig` (legacy double-colon syntax)
//! - `components:button` (single-file component syntax, see [`ComponentRef`])

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use strsim::levenshtein;

use crate::utils::fs::absolutize;

/// Alias → base directory mapping, ordered for deterministic iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceTable {
    aliases: BTreeMap<String, PathBuf>,
}

/// A `namespace:name` reference whose namespace is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef<'a> {
    /// Alias part before the colon
    pub namespace: &'a str,
    /// Component name after the colon
    pub name: &'a str,
    /// Base directory the alias maps to
    pub base: &'a Path,
}

impl ComponentRef<'_> {
    /// The conventional single-file component location `<base>/<name>/<name>`.
    pub fn component_path(&self) -> PathBuf {
        self.base.join(self.name).join(self.name)
    }
}

impl NamespaceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` for `dir`, replacing any previous mapping.
    pub fn insert(&mut self, alias: impl Into<String>, dir: impl Into<PathBuf>) {
        self.aliases.insert(alias.into(), dir.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, alias: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.insert(alias, dir);
        self
    }

    /// Base directory for `alias`.
    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.aliases.get(alias).map(PathBuf::as_path)
    }

    /// Iterate aliases in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.aliases.iter().map(|(alias, dir)| (alias.as_str(), dir.as_path()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Copy of the table with every relative base directory joined onto `root`.
    pub fn rooted_at(&self, root: &Path) -> Self {
        Self {
            aliases: self
                .aliases
                .iter()
                .map(|(alias, dir)| (alias.clone(), absolutize(root, dir)))
                .collect(),
        }
    }

    /// Expand a leading `@alias/` or `alias::` prefix into the aliased directory.
    ///
    /// Returns `None` when the reference carries no known alias.
    pub fn expand(&self, reference: &str) -> Option<PathBuf> {
        let (alias, rest) = split_alias_prefix(reference)?;
        let base = self.get(alias)?;
        Some(base.join(rest))
    }

    /// Split a `namespace:name` component reference.
    ///
    /// Only a single colon counts (`ns::path` is the legacy alias form), the
    /// name must be non-empty and the namespace must be registered.
    pub fn component<'a>(&'a self, reference: &'a str) -> Option<ComponentRef<'a>> {
        if reference.contains("::") {
            return None;
        }
        let (namespace, name) = reference.split_once(':')?;
        if name.is_empty() || name.contains(':') {
            return None;
        }
        let base = self.get(namespace)?;
        Some(ComponentRef {
            namespace,
            name,
            base,
        })
    }

    /// The alias a reference tries to use when that alias is not registered.
    pub fn unknown_alias<'a>(&self, reference: &'a str) -> Option<&'a str> {
        let alias = match split_alias_prefix(reference) {
            Some((alias, _)) => alias,
            None if !reference.contains("::") => reference.split_once(':')?.0,
            None => return None,
        };
        if alias.is_empty() || self.aliases.contains_key(alias) {
            None
        } else {
            Some(alias)
        }
    }

    /// Closest registered alias to `alias`, if any is reasonably close.
    pub fn suggest(&self, alias: &str) -> Option<&str> {
        self.aliases
            .keys()
            .map(|candidate| (candidate, levenshtein(alias, candidate)))
            .filter(|(_, distance)| *distance <= alias.len().max(2) / 2)
            .min_by_key(|(_, distance)| *distance)
            .map(|(candidate, _)| candidate.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for NamespaceTable
where
    K: Into<String>,
    V: Into<PathBuf>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            aliases: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Splits `@alias/rest` or `alias::rest` into `(alias, rest)`.
fn split_alias_prefix(reference: &str) -> Option<(&str, &str)> {
    if let Some(stripped) = reference.strip_prefix('@') {
        return stripped.split_once('/');
    }
    reference.split_once("::")
}
