//! Fallback modules for root-tier failures.
//!
//! When the transformed template itself cannot be compiled there is nothing to
//! assemble. The transform still succeeds, emitting a module whose render
//! entry returns `An error occurred whilst rendering <id>: <detail>` for every
//! context, so the failure shows up where the markup would have been.

use super::{ModuleContent, OutputMode, TemplateModule};
use crate::constants::{MODULE_FORMAT_VERSION, diagnostic};
use crate::core::{BundleError, flatten_error_chain};

impl TemplateModule {
    /// A module that always renders the diagnostic for `detail`.
    pub fn fallback(id: impl Into<String>, mode: OutputMode, detail: impl Into<String>) -> Self {
        Self {
            format: MODULE_FORMAT_VERSION,
            id: id.into(),
            mode,
            content: ModuleContent::Fallback {
                detail: detail.into(),
            },
        }
    }

    /// A fallback module describing `error` and all of its sources.
    pub fn from_error(id: impl Into<String>, mode: OutputMode, error: &BundleError) -> Self {
        Self::fallback(id, mode, flatten_error_chain(error))
    }

    /// The diagnostic a fallback module renders, `None` for assembled modules.
    pub fn diagnostic(&self) -> Option<String> {
        match &self.content {
            ModuleContent::Fallback {
                detail,
            } => Some(diagnostic(&self.id, detail)),
            ModuleContent::Assembled {
                ..
            } => None,
        }
    }
}
