//! File system helpers used by the resolver.
//!
//! - [`paths`] - Lexical normalization and extension handling
//! - [`discovery`] - Deterministic recursive file search

pub mod discovery;
pub mod paths;

pub use discovery::find_file_named;
pub use paths::{absolutize, append_extension, normalize_path};
