//! Test utilities for twig-bundle
//!
//! Helpers for building throwaway template projects and for turning on
//! logging inside tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use twig_bundle::test_utils::TemplateProjectBuilder;
//!
//! let project = TemplateProjectBuilder::new()
//!     .unwrap()
//!     .with_template("page.twig", r#"{% include "@ui/card.twig" %}"#)
//!     .with_template("ui/card.twig", "<div>card</div>")
//!     .with_namespace("ui", "ui")
//!     .build()
//!     .unwrap();
//!
//! let output = project.bundler().unwrap().transform("page.twig").unwrap();
//! assert!(!output.module.is_fallback());
//! ```

pub mod builder;

pub use builder::{TemplateProject, TemplateProjectBuilder};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. An explicit `level` wins; otherwise
/// `RUST_LOG` is honoured, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=twig_bundle=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
