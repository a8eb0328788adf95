//! The bundling pipeline.
//!
//! [`Bundler::transform`] takes a source id, compiles the template and every
//! template it transitively references, and returns one self-contained
//! [`TemplateModule`] plus the list of files it depends on.
//!
//! # Pipeline
//!
//! 1. **Filter** - ids not matching the configured pattern are left alone
//! 2. **Compile** - [`compiler::CompileRun`] walks references depth-first,
//!    resolving and compiling each one exactly once
//! 3. **Assemble** - [`assembler::assemble`] orders units dependency-first
//! 4. **Isolate** - dependency failures stay inside their unit, root failures
//!    turn into a fallback module ([`isolation`])
//!
//! # Example
//!
//! ```rust,no_run
//! use twig_bundle::bundler::Bundler;
//! use twig_bundle::config::BundlerConfig;
//! use twig_bundle::templating::HelperRegistry;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), twig_bundle::core::BundleError> {
//! let config = BundlerConfig::default()
//!     .with_root("/site")
//!     .with_namespace("components", "components");
//! let bundler = Bundler::new(config)?;
//!
//! if let Some(output) = bundler.transform("/site/templates/page.twig") {
//!     let entry = bundler.instantiate(&output.module);
//!     println!("{}", entry.render(&json!({ "title": "Hello" })));
//! }
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod compiler;
pub mod graph;
pub mod isolation;

pub use compiler::{CompileRun, CompiledUnit};
pub use graph::TemplateGraph;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::BundlerConfig;
use crate::core::BundleError;
use crate::module::{OutputMode, RenderEntry, TemplateModule};
use crate::resolver::IdentifierResolver;
use crate::templating::{CompileOptions, HelperRegistry, TemplateEngine, TeraEngine};
use crate::utils::fs::absolutize;

/// Result of transforming one source id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// Serialized module
    pub code: String,
    /// Source map; never produced
    pub map: Option<String>,
    /// Every resolved dependency path, in discovery order
    pub dependencies: Vec<PathBuf>,
    /// The module `code` was serialized from
    pub module: TemplateModule,
}

/// A source id split into its file path and optional query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceId<'a> {
    /// Path part, before any `?`
    pub path: &'a str,
    /// Query part, after the first `?`
    pub query: Option<&'a str>,
}

impl<'a> SourceId<'a> {
    pub fn parse(id: &'a str) -> Self {
        match id.split_once('?') {
            Some((path, query)) => Self {
                path,
                query: Some(query),
            },
            None => Self {
                path: id,
                query: None,
            },
        }
    }

    /// Output mode requested by the query, if any.
    ///
    /// `react` and `element` select element output, `html` plain output.
    pub fn mode_override(&self) -> Option<OutputMode> {
        let query = self.query?;
        query.split('&').find_map(|flag| {
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            match name {
                "react" | "element" => Some(OutputMode::Element),
                "html" => Some(OutputMode::Html),
                _ => None,
            }
        })
    }
}

/// Transforms template sources into assembled modules.
#[derive(Debug)]
pub struct Bundler<E: TemplateEngine = TeraEngine> {
    engine: E,
    config: BundlerConfig,
    resolver: IdentifierResolver,
    pattern: Regex,
    helpers: HelperRegistry,
}

impl Bundler<TeraEngine> {
    /// Create a bundler using the Tera engine.
    pub fn new(config: BundlerConfig) -> Result<Self, BundleError> {
        Self::with_engine(config, TeraEngine::new())
    }

    /// Create a bundler from a `twig-bundle.toml` file.
    pub fn from_config_file(path: &Path) -> anyhow::Result<Self> {
        let config = BundlerConfig::load(path)?;
        Ok(Self::new(config)?)
    }
}

impl<E: TemplateEngine> Bundler<E> {
    /// Create a bundler driving a custom engine.
    pub fn with_engine(config: BundlerConfig, engine: E) -> Result<Self, BundleError> {
        let pattern = Regex::new(&config.pattern).map_err(|source| BundleError::InvalidPattern {
            pattern: config.pattern.clone(),
            source,
        })?;
        let resolver = IdentifierResolver::new(&config.namespaces, config.resolved_root());

        Ok(Self {
            engine,
            config,
            resolver,
            pattern,
            helpers: HelperRegistry::new(),
        })
    }

    /// Attach the helper functions every emitted module declares.
    pub fn with_helpers(mut self, helpers: HelperRegistry) -> Self {
        self.helpers = helpers;
        self
    }

    pub fn config(&self) -> &BundlerConfig {
        &self.config
    }

    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Whether `id` matches the configured file pattern.
    pub fn should_transform(&self, id: &str) -> bool {
        self.pattern.is_match(id)
    }

    /// Transform `id` into a module, or `None` when the id is not a template.
    ///
    /// Never fails: a root that cannot be compiled yields a fallback module.
    pub fn transform(&self, id: &str) -> Option<TransformOutput> {
        if !self.should_transform(id) {
            debug!("Skipping '{}': does not match {}", id, self.pattern);
            return None;
        }

        let source = SourceId::parse(id);
        let mode = source.mode_override().unwrap_or(self.config.framework);
        let path = absolutize(self.resolver.root(), Path::new(source.path));
        info!("Transforming {} ({})", source.path, mode);

        let options = CompileOptions {
            cache: self.config.cache,
        };
        let run = CompileRun::new(&self.engine, &self.resolver, options, source.path);

        let (module, dependencies) = match run.run(&path) {
            Ok(outcome) => {
                let module = assembler::assemble(
                    source.path,
                    mode,
                    self.helpers.names(),
                    self.config.global_context.clone(),
                    &outcome,
                );
                let absent = module.units().iter().filter(|u| u.is_absent()).count();
                info!(
                    "Assembled {} with {} unit(s), {} absent",
                    source.path,
                    module.units().len(),
                    absent
                );
                (module, outcome.dependencies)
            }
            Err(err) => (isolation::root_failure(source.path, mode, &err), Vec::new()),
        };

        Some(self.emit(source.path, mode, module, dependencies))
    }

    fn emit(
        &self,
        id: &str,
        mode: OutputMode,
        module: TemplateModule,
        dependencies: Vec<PathBuf>,
    ) -> TransformOutput {
        let (module, code) = match module.to_code() {
            Ok(code) => (module, code),
            Err(err) => {
                let fallback = isolation::root_failure(id, mode, &err);
                let code = fallback.to_code().unwrap_or_default();
                (fallback, code)
            }
        };

        TransformOutput {
            code,
            map: None,
            dependencies,
            module,
        }
    }

    /// Build the render entry of `module` with this bundler's helpers.
    pub fn instantiate(&self, module: &TemplateModule) -> RenderEntry {
        module.instantiate(&self.helpers)
    }
}

impl<E: TemplateEngine + 'static> Bundler<E> {
    /// [`Bundler::transform`] on Tokio's blocking pool.
    ///
    /// A panicked or cancelled task is reported as a root-tier failure.
    pub async fn transform_async(self: Arc<Self>, id: impl Into<String>) -> Option<TransformOutput> {
        let id = id.into();
        if !self.should_transform(&id) {
            return None;
        }

        let bundler = Arc::clone(&self);
        let task_id = id.clone();
        match tokio::task::spawn_blocking(move || bundler.transform(&task_id)).await {
            Ok(output) => output,
            Err(join_error) => {
                let source = SourceId::parse(&id);
                let mode = source.mode_override().unwrap_or(self.config.framework);
                let err = BundleError::Render {
                    id: source.path.to_string(),
                    message: join_error.to_string(),
                };
                let module = isolation::root_failure(source.path, mode, &err);
                Some(self.emit(source.path, mode, module, Vec::new()))
            }
        }
    }
}
