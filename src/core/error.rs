//! Error handling for twig-bundle
//!
//! [`BundleError`] enumerates every failure the pipeline can observe. Most of
//! them never reach the caller directly: the bundler isolates dependency
//! failures, turns root failures into a fallback module and converts render
//! failures into a diagnostic string. The error's `Display` output is the
//! "detail" half of that diagnostic, so messages are kept on one line.
//!
//! # Error Categories
//!
//! - **Engine**: [`BundleError::Parse`], [`BundleError::MissingTokens`]
//! - **Resolution**: [`BundleError::FileNotFound`]
//! - **File System**: [`BundleError::Io`]
//! - **Runtime**: [`BundleError::Render`], [`BundleError::MissingHelper`]
//! - **Configuration**: [`BundleError::InvalidPattern`], [`BundleError::Config`]
//! - **Module Format**: [`BundleError::ModuleFormat`], [`BundleError::UnsupportedModuleFormat`]

use std::path::PathBuf;
use thiserror::Error;

use super::file_error::FileOperation;

/// Every failure mode of the bundling pipeline.
#[derive(Error, Debug)]
pub enum BundleError {
    /// The templating engine rejected the template source.
    #[error("Failed to parse template '{id}': {message}")]
    Parse {
        /// Reference or source id of the template
        id: String,
        /// Flattened engine error chain
        message: String,
    },

    /// The engine parsed the file but produced no token tree.
    #[error("Error compiling twig file '{id}': no token tree was produced")]
    MissingTokens {
        /// Reference or source id of the template
        id: String,
    },

    /// A reference resolved to a path that does not exist.
    #[error("Template '{id}' not found (looked for {})", path.display())]
    FileNotFound {
        /// Raw reference as written in the directive
        id: String,
        /// Best-effort path produced by the resolver
        path: PathBuf,
    },

    /// A file system operation failed.
    #[error("Failed {operation} {}", path.display())]
    Io {
        /// What was being done with the file
        operation: FileOperation,
        /// The file involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Rendering a compiled template failed for a specific context.
    #[error("{message}")]
    Render {
        /// Template that failed
        id: String,
        /// Flattened engine error chain
        message: String,
    },

    /// A module declares a helper the runtime registry does not provide.
    #[error("Helper function '{name}' is declared by the module but not registered")]
    MissingHelper {
        /// Declared helper name
        name: String,
    },

    /// The file pattern in the configuration is not a valid regex.
    #[error("Invalid file pattern '{pattern}'")]
    InvalidPattern {
        /// Pattern as configured
        pattern: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },

    /// Configuration could not be parsed or is inconsistent.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Emitted module code could not be (de)serialized.
    #[error("Invalid module code: {0}")]
    ModuleFormat(#[from] serde_json::Error),

    /// Module code was emitted by an incompatible version.
    #[error("Unsupported module format version {found} (expected {expected})")]
    UnsupportedModuleFormat {
        /// Version found in the code
        found: u32,
        /// Version this build reads
        expected: u32,
    },
}

impl BundleError {
    /// Builds a [`BundleError::Parse`] from a Tera error, keeping the whole cause chain.
    pub fn parse(id: impl Into<String>, error: &tera::Error) -> Self {
        Self::Parse {
            id: id.into(),
            message: flatten_error_chain(error),
        }
    }

    /// Builds a [`BundleError::Render`] from a Tera error, keeping the whole cause chain.
    pub fn render(id: impl Into<String>, error: &tera::Error) -> Self {
        Self::Render {
            id: id.into(),
            message: flatten_error_chain(error),
        }
    }

    /// Returns true for failures caused by a template that could not be found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::FileNotFound {
                ..
            } => true,
            Self::Io {
                source,
                ..
            } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// Collapses an error and all of its sources into a single line.
///
/// Tera nests the interesting message ("Variable `x` not found") several levels
/// below a generic "Failed to render" wrapper, so every level is kept and
/// joined with `: `. Consecutive duplicates are dropped.
pub fn flatten_error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut messages: Vec<String> = Vec::new();
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);

    while let Some(err) = current {
        let message = err.to_string().trim().to_string();
        if !message.is_empty() && messages.last() != Some(&message) {
            messages.push(message);
        }
        current = err.source();
    }

    messages.join(": ")
}
