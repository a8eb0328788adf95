//! Structured file system error handling
//!
//! File operations capture their context at the call site instead of parsing
//! error messages later. Template reads and directory walks go through
//! [`FileResultExt::with_file_context`], which yields a [`BundleError::Io`].

use std::path::PathBuf;

use super::error::BundleError;

/// Types of file operations performed by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    /// Reading a template file completely
    Read,
    /// Walking a namespace directory
    Walk,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Read => write!(f, "reading"),
            FileOperation::Walk => write!(f, "walking directory"),
        }
    }
}

/// Extension trait attaching file operation context to I/O results
pub trait FileResultExt<T> {
    /// Convert an I/O error into a [`BundleError::Io`] for `path`
    fn with_file_context(
        self,
        operation: FileOperation,
        path: impl Into<PathBuf>,
    ) -> Result<T, BundleError>;
}

impl<T> FileResultExt<T> for Result<T, std::io::Error> {
    fn with_file_context(
        self,
        operation: FileOperation,
        path: impl Into<PathBuf>,
    ) -> Result<T, BundleError> {
        self.map_err(|source| BundleError::Io {
            operation,
            path: path.into(),
            source,
        })
    }
}
