//! Core types shared by every stage of the pipeline
//!
//! # Modules
//!
//! ## `error` - Error Handling
//!
//! - [`BundleError`] - Enumerated failure modes of resolution, compilation,
//!   assembly and rendering
//! - [`flatten_error_chain`] - One-line rendering of an error and its sources,
//!   used for the diagnostics embedded in fallback output
//!
//! ## `file_error` - File Operation Context
//!
//! - [`FileOperation`] - What the pipeline was doing with a file
//! - [`FileResultExt`] - Attach that context to `std::io::Result`s

pub mod error;
pub mod file_error;

pub use error::{BundleError, flatten_error_chain};
pub use file_error::{FileOperation, FileResultExt};
