//! Registry of helper-function installers.
//!
//! A helper is a named installer that extends the Tera instance a module
//! renders with, typically by registering a function or a filter. Modules only
//! record helper *names*; the runtime that instantiates a module supplies the
//! registry holding the actual installers.
//!
//! # Example
//!
//! ```rust,no_run
//! use twig_bundle::templating::HelperRegistry;
//! use serde_json::Value;
//!
//! let mut helpers = HelperRegistry::new();
//! helpers.register_function(
//!     "testFunction",
//!     |_args: &std::collections::HashMap<String, Value>| -> tera::Result<Value> {
//!         Ok(Value::String("IT WORKS!".to_string()))
//!     },
//! );
//! assert!(helpers.contains("testFunction"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tera::Tera;

use crate::core::BundleError;

/// Installs one helper on a Tera instance.
pub type HelperInstaller = Arc<dyn Fn(&mut Tera) + Send + Sync>;

/// Name → installer mapping.
#[derive(Clone, Default)]
pub struct HelperRegistry {
    installers: BTreeMap<String, HelperInstaller>,
}

impl fmt::Debug for HelperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperRegistry").field("names", &self.names()).finish()
    }
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an arbitrary installer under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, installer: F) -> &mut Self
    where
        F: Fn(&mut Tera) + Send + Sync + 'static,
    {
        self.installers.insert(name.into(), Arc::new(installer));
        self
    }

    /// Register a Tera function that is installed under the same name.
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: tera::Function + Clone + 'static,
    {
        let name = name.into();
        let function_name = name.clone();
        self.register(name, move |tera: &mut Tera| {
            tera.register_function(&function_name, function.clone());
        })
    }

    /// Register a Tera filter that is installed under the same name.
    pub fn register_filter<F>(&mut self, name: impl Into<String>, filter: F) -> &mut Self
    where
        F: tera::Filter + Clone + 'static,
    {
        let name = name.into();
        let filter_name = name.clone();
        self.register(name, move |tera: &mut Tera| {
            tera.register_filter(&filter_name, filter.clone());
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.installers.contains_key(name)
    }

    /// Registered helper names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.installers.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.installers.is_empty()
    }

    /// Run the installers for `names` against `tera`.
    ///
    /// Fails on the first name that has no installer.
    pub fn install(&self, names: &[String], tera: &mut Tera) -> Result<(), BundleError> {
        for name in names {
            let installer = self.installers.get(name).ok_or_else(|| BundleError::MissingHelper {
                name: name.clone(),
            })?;
            tracing::trace!("Installing helper '{}'", name);
            installer(tera);
        }
        Ok(())
    }
}
