//! Template engine integration.
//!
//! This module holds everything that touches template syntax:
//!
//! - [`tokens`] - The engine-independent token tree ([`Token`], [`Directive`])
//! - [`extractor`] - Reference extraction from a token tree
//! - [`engine`] - The [`TemplateEngine`] trait the bundler drives
//! - [`tera_engine`] - The Tera-backed engine
//! - [`attributes`] - HTML attribute collections for `attributes`/`defaultAttributes`
//! - [`filters`] - Drupal-flavoured filters and functions installed at render time
//! - [`helpers`] - Registry of user-supplied helper installers
//! - [`utils`] - Render context merging
//!
//! # Example
//!
//! ```rust,no_run
//! use twig_bundle::templating::{TeraEngine, extract_references};
//!
//! # fn example() -> Result<(), twig_bundle::core::BundleError> {
//! let compiled = TeraEngine::compile_source(
//!     "page.twig",
//!     None,
//!     r#"{% extends "@layouts/base.twig" %}{% block body %}{% include "card.twig" %}{% endblock body %}"#,
//! )?;
//! let references = extract_references(compiled.tokens.as_deref().unwrap_or_default());
//! assert_eq!(references, vec!["@layouts/base.twig", "card.twig"]);
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod engine;
pub mod extractor;
pub mod filters;
pub mod helpers;
pub mod tera_engine;
pub mod tokens;
pub mod utils;

pub use attributes::Attributes;
pub use engine::{CompileOptions, CompileRequest, CompiledTemplate, TemplateEngine};
pub use extractor::{extract_references, sole_references};
pub use filters::register_drupal_extensions;
pub use helpers::{HelperInstaller, HelperRegistry};
pub use tera_engine::TeraEngine;
pub use tokens::{Directive, Token};
pub use utils::merge_context;
