//! Failure isolation between the root and its dependencies.
//!
//! - A dependency that cannot be compiled becomes an absent unit: it keeps its
//!   slot in the module, the root and every other unit are unaffected.
//! - A root that cannot be compiled turns the whole transform into a fallback
//!   module (see [`TemplateModule::fallback`]).

use std::path::PathBuf;
use tracing::warn;

use super::compiler::CompiledUnit;
use crate::core::{BundleError, flatten_error_chain};
use crate::module::{OutputMode, TemplateModule};

/// Convert a dependency failure into an absent unit.
pub fn absent_unit(reference: &str, path: PathBuf, error: &BundleError) -> CompiledUnit {
    let detail = flatten_error_chain(error);
    if error.is_not_found() {
        warn!("Dependency '{}' not found at {}, leaving it out", reference, path.display());
    } else {
        warn!("Dependency '{}' failed to compile, leaving it out: {}", reference, detail);
    }

    CompiledUnit {
        reference: reference.to_string(),
        path,
        code: None,
        references: Vec::new(),
        failure: Some(detail),
    }
}

/// Convert a root-tier failure into a fallback module.
pub fn root_failure(id: &str, mode: OutputMode, error: &BundleError) -> TemplateModule {
    warn!("Template '{}' failed, emitting fallback module: {}", id, flatten_error_chain(error));
    TemplateModule::from_error(id, mode, error)
}
