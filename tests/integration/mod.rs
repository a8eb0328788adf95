//! Integration test suite for twig-bundle
//!
//! End-to-end tests that build template projects on disk, run them through
//! the bundler and render the emitted modules.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **smoke**: includes, variables, macros, built-in extensions, error recovery
//! - **ordering**: dependency-first emission, diamonds and cycles
//! - **resolution**: namespaces, component references, extension probing
//! - **isolation**: missing and broken dependencies, broken roots, render errors
//! - **context**: global context, `attributes` and `defaultAttributes`
//! - **determinism**: byte-identical output and module reloading
//! - **config**: `twig-bundle.toml` driven bundling and output modes
//! - **async_transform**: the Tokio entry point

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod async_transform;
mod context;
mod determinism;
mod ordering;
mod resolution;
mod smoke;
