//! Templating engine interface.
//!
//! The bundler does not parse templates itself. It asks a [`TemplateEngine`]
//! to turn a file into generated code plus a token tree, and only inspects the
//! token tree for directives that reference other templates.

use std::path::Path;

use super::tokens::Token;
use crate::core::BundleError;
use crate::resolver::NamespaceTable;

/// Per-run compilation options passed to every engine invocation.
///
/// Caching is off unless a run asks for it; it is never a process-wide switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Allow the engine to reuse previously parsed files
    pub cache: bool,
}

/// Everything an engine needs to compile one template.
#[derive(Debug, Clone, Copy)]
pub struct CompileRequest<'a> {
    /// Identifier the compiled template will be registered under
    pub id: &'a str,
    /// File to read
    pub path: &'a Path,
    /// Namespace table shared by the whole run
    pub namespaces: &'a NamespaceTable,
    /// Options of the current run
    pub options: &'a CompileOptions,
}

/// Output of a successful engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    /// Code the runtime needs to render this template
    pub code: String,
    /// Parsed token tree; `None` when the engine could not tokenize the file
    pub tokens: Option<Vec<Token>>,
}

/// A templating engine the bundler can drive.
pub trait TemplateEngine: Send + Sync {
    /// Parse and compile the file named by `request`.
    fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledTemplate, BundleError>;
}

impl<E: TemplateEngine + ?Sized> TemplateEngine for std::sync::Arc<E> {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledTemplate, BundleError> {
        (**self).compile(request)
    }
}
