//! Template project builder for simplified test setup
//!
//! Creates a temporary project directory with templates and a matching
//! [`BundlerConfig`], reducing boilerplate in tests.

use anyhow::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::bundler::Bundler;
use crate::config::BundlerConfig;
use crate::module::OutputMode;
use crate::templating::HelperRegistry;

/// A builder for template projects with a fluent API
pub struct TemplateProjectBuilder {
    temp_dir: TempDir,
    config: BundlerConfig,
    files: Vec<(String, String)>,
}

impl TemplateProjectBuilder {
    /// Create a builder rooted in a fresh temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config = BundlerConfig::default().with_root(temp_dir.path());

        Ok(Self {
            temp_dir,
            config,
            files: Vec::new(),
        })
    }

    /// Add a template, path relative to the project root
    pub fn with_template(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.push((path.into(), content.into()));
        self
    }

    /// Add several templates at once
    pub fn with_templates(mut self, files: Vec<(&str, &str)>) -> Self {
        for (path, content) in files {
            self.files.push((path.to_string(), content.to_string()));
        }
        self
    }

    /// Register a namespace, directory relative to the project root
    pub fn with_namespace(mut self, alias: &str, dir: &str) -> Self {
        self.config = self.config.with_namespace(alias, dir);
        self
    }

    /// Add a global context value
    pub fn with_global(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.config = self.config.with_global(key, value);
        self
    }

    /// Select the output mode
    pub fn with_framework(mut self, framework: OutputMode) -> Self {
        self.config = self.config.with_framework(framework);
        self
    }

    /// Write every template and return the project
    pub fn build(self) -> Result<TemplateProject> {
        for (path, content) in &self.files {
            let full_path = self.temp_dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, content)?;
        }

        Ok(TemplateProject {
            root: self.temp_dir.path().to_path_buf(),
            temp_dir: self.temp_dir,
            config: self.config,
        })
    }
}

/// A template project living in a temporary directory
pub struct TemplateProject {
    #[allow(dead_code)]
    temp_dir: TempDir,
    root: PathBuf,
    config: BundlerConfig,
}

impl TemplateProject {
    /// Project root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a project file
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Configuration pointing at this project
    pub fn config(&self) -> &BundlerConfig {
        &self.config
    }

    /// Overwrite or create a template after the project was built
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// A Tera-backed bundler for this project
    pub fn bundler(&self) -> Result<Bundler> {
        Ok(Bundler::new(self.config.clone())?)
    }

    /// A bundler with helper functions attached
    pub fn bundler_with_helpers(&self, helpers: HelperRegistry) -> Result<Bundler> {
        Ok(self.bundler()?.with_helpers(helpers))
    }
}
