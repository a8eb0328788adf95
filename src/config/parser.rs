//! Generic TOML configuration parsing.
//!
//! Reads a file and deserializes it into any [`serde::de::DeserializeOwned`]
//! type, attaching the file path to both read and parse failures.
//!
//! Example error output:
//! ```text
//! Failed to parse config file: /path/to/twig-bundle.toml
//! Caused by:
//!     invalid type: integer `1`, expected a string
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Examples
///
/// ```rust,no_run
/// use twig_bundle::config::{BundlerConfig, parse_config};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: BundlerConfig = parse_config(Path::new("twig-bundle.toml"))?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content does not match `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
