//! twig-bundle - Twig template bundler
//!
//! Turns a Twig-style template into a single self-contained module that can be
//! rendered without further filesystem access. Every template the source
//! transitively references through `extends`, `include`, `embed` or `import`
//! is resolved, compiled exactly once and placed in the module before
//! anything that uses it.
//!
//! # Architecture Overview
//!
//! ```text
//! source id ─► engine (parse) ─► token tree ─► extractor ─► references
//!                    ▲                                          │
//!                    └──── compile run (depth-first) ◄── resolver
//!                                      │
//!                                      ▼
//!                     graph ─► assembler ─► TemplateModule (code)
//! ```
//!
//! ## Key Features
//!
//! - **Namespaces**: `@components/card.twig`, `components::card.twig` and
//!   component-style `components:card` references
//! - **Deduplication**: diamonds compile shared templates once, cycles terminate
//! - **Dependency-first ordering**: every unit precedes its dependents
//! - **Failure isolation**: a broken dependency never aborts the root; a broken
//!   root becomes a module that renders a diagnostic
//! - **Deterministic output**: unchanged input yields byte-identical code
//!
//! # Core Modules
//!
//! - [`bundler`] - The transform pipeline, compile runs, ordering and isolation
//! - [`module`] - The emitted module format and its render entry point
//! - [`resolver`] - Reference → file resolution and namespace tables
//! - [`templating`] - Engine trait, Tera engine, reference extraction, helpers
//! - [`config`] - `twig-bundle.toml` configuration
//! - [`core`] - Error types
//! - [`constants`] - Extensions, reserved identifiers, diagnostic format
//! - [`utils`] - Path and filesystem helpers
//!
//! # Configuration (`twig-bundle.toml`)
//!
//! ```toml
//! framework = "html"
//!
//! [namespaces]
//! components = "src/components"
//!
//! [global_context]
//! active_theme = "olivero"
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use twig_bundle::bundler::Bundler;
//! use twig_bundle::config::BundlerConfig;
//! use serde_json::json;
//!
//! # fn example() -> Result<(), twig_bundle::core::BundleError> {
//! let bundler = Bundler::new(BundlerConfig::default().with_root("/site"))?;
//! let output = bundler.transform("templates/page.twig").expect("matches pattern");
//!
//! // `output.code` is what a host writes out; load it back and render.
//! let module = twig_bundle::module::TemplateModule::from_code(&output.code)?;
//! let html = bundler.instantiate(&module).render(&json!({ "title": "Hello" }));
//! # Ok(())
//! # }
//! ```

pub mod bundler;
pub mod config;
pub mod constants;
pub mod core;
pub mod module;
pub mod resolver;
pub mod templating;
pub mod utils;

// Test utilities (only compiled for tests or with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
