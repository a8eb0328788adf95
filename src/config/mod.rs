//! Bundler configuration.
//!
//! [`BundlerConfig`] is everything about a bundling run that can be written
//! down as data. Helper functions are code, so they live in a
//! [`HelperRegistry`](crate::templating::HelperRegistry) handed to the
//! [`Bundler`](crate::bundler::Bundler) separately.
//!
//! # Configuration File (`twig-bundle.toml`)
//!
//! Every field is optional:
//!
//! ```toml
//! # Directory relative paths and namespaces are resolved against
//! root = "."
//! # "html" returns markup as-is, "react" wraps it in an element
//! framework = "html"
//! # Which source ids the bundler transforms
//! pattern = '\.(twig)(\?.*)?$'
//! # Let the engine reuse parsed files within a process
//! cache = false
//!
//! [namespaces]
//! tests = "tests/fixtures"
//! jabba = "tests/fixtures/jabba"
//!
//! [global_context]
//! active_theme = "poodles"
//! ```

pub mod parser;

pub use parser::parse_config;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_PATTERN;
use crate::core::BundleError;
use crate::module::OutputMode;
use crate::resolver::NamespaceTable;

/// Data-only configuration of a bundler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundlerConfig {
    /// Project root; defaults to the current directory
    pub root: Option<PathBuf>,
    /// Namespace aliases
    pub namespaces: NamespaceTable,
    /// Values merged under every render context
    pub global_context: Map<String, Value>,
    /// Output adaptation applied to rendered markup
    pub framework: OutputMode,
    /// Regex deciding which ids are transformed
    pub pattern: String,
    /// Allow the engine's parse cache
    pub cache: bool,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            root: None,
            namespaces: NamespaceTable::new(),
            global_context: Map::new(),
            framework: OutputMode::default(),
            pattern: DEFAULT_PATTERN.to_string(),
            cache: false,
        }
    }
}

impl BundlerConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, BundleError> {
        toml::from_str(content).map_err(|e| BundleError::Config {
            message: e.to_string(),
        })
    }

    /// Load a configuration file.
    ///
    /// A relative `root` in the file is taken relative to the file's directory.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config: Self = parse_config(path)?;
        if let Some(dir) = path.parent() {
            config.root = Some(match config.root.take() {
                Some(root) if root.is_relative() => dir.join(root),
                Some(root) => root,
                None => dir.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Builder-style root override.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Builder-style namespace registration.
    pub fn with_namespace(mut self, alias: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.namespaces.insert(alias, dir);
        self
    }

    /// Builder-style global context value.
    pub fn with_global(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.global_context.insert(key.into(), value.into());
        self
    }

    /// Builder-style output mode.
    pub fn with_framework(mut self, framework: OutputMode) -> Self {
        self.framework = framework;
        self
    }

    /// The configured root, or the current directory.
    pub fn resolved_root(&self) -> PathBuf {
        match &self.root {
            Some(root) if root.is_absolute() => root.clone(),
            Some(root) => std::env::current_dir().map(|cwd| cwd.join(root)).unwrap_or_else(|_| root.clone()),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}
