//! Supporting utilities.

pub mod fs;

pub use fs::{absolutize, append_extension, find_file_named, normalize_path};
