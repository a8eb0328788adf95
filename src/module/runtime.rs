//! Render entry point of an instantiated module.
//!
//! Instantiation builds one Tera instance per module: the built-in Drupal
//! extensions and the declared helpers are installed, then every unit is
//! registered in module order (Tera validates `extends` parents and macro
//! imports as templates are added, which the dependency-first order
//! satisfies), and the root is registered last under the module id.

use serde_json::{Map, Value};
use tera::{Context as TeraContext, Tera};
use tracing::{debug, warn};

use super::{ModuleContent, OutputMode, Rendered, TemplateModule};
use crate::constants::{ATTRIBUTES_KEY, DEFAULT_ATTRIBUTES_KEY, diagnostic};
use crate::core::{BundleError, flatten_error_chain};
use crate::templating::{Attributes, HelperRegistry, merge_context, register_drupal_extensions};

/// Callable produced by [`TemplateModule::instantiate`].
#[derive(Debug)]
pub struct RenderEntry {
    id: String,
    mode: OutputMode,
    state: EntryState,
}

#[derive(Debug)]
enum EntryState {
    Ready {
        tera: Box<Tera>,
        globals: Map<String, Value>,
    },
    Failed {
        detail: String,
    },
}

impl RenderEntry {
    pub(super) fn new(module: &TemplateModule, helpers: &HelperRegistry) -> Self {
        let state = match &module.content {
            ModuleContent::Fallback {
                detail,
            } => EntryState::Failed {
                detail: detail.clone(),
            },
            ModuleContent::Assembled {
                helpers: declared,
                globals,
                units,
                root,
            } => match build_tera(&module.id, declared, units, root, helpers) {
                Ok(tera) => EntryState::Ready {
                    tera: Box::new(tera),
                    globals: globals.clone(),
                },
                Err(err) => {
                    warn!("Could not instantiate module '{}': {}", module.id, err);
                    EntryState::Failed {
                        detail: flatten_error_chain(&err),
                    }
                }
            },
        };

        Self {
            id: module.id.clone(),
            mode: module.mode,
            state,
        }
    }

    /// Module id the entry renders.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// True when every render returns the diagnostic.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, EntryState::Failed { .. })
    }

    /// Render the module with a free-form context.
    ///
    /// `null` counts as an empty context. Global values are merged under the
    /// caller's keys, and `attributes` is synthesized from `defaultAttributes`
    /// unless the caller supplied it. Render failures produce the diagnostic
    /// string instead of an error.
    pub fn render(&self, context: &Value) -> Rendered {
        let html = match &self.state {
            EntryState::Failed {
                detail,
            } => diagnostic(&self.id, detail),
            EntryState::Ready {
                tera,
                globals,
            } => match self.render_ready(tera, globals, context) {
                Ok(html) => html,
                Err(err) => {
                    debug!("Render of '{}' failed: {}", self.id, err);
                    diagnostic(&self.id, &err.to_string())
                }
            },
        };
        self.mode.adapt(html)
    }

    fn render_ready(
        &self,
        tera: &Tera,
        globals: &Map<String, Value>,
        context: &Value,
    ) -> Result<String, BundleError> {
        let mut merged = merge_context(globals, context);
        if !merged.contains_key(ATTRIBUTES_KEY) {
            let attributes = default_attributes(merged.get(DEFAULT_ATTRIBUTES_KEY));
            merged.insert(ATTRIBUTES_KEY.to_string(), Value::String(attributes.render()));
        }

        let context = TeraContext::from_value(Value::Object(merged))
            .map_err(|e| BundleError::render(&self.id, &e))?;
        tera.render(&self.id, &context).map_err(|e| BundleError::render(&self.id, &e))
    }
}

fn default_attributes(value: Option<&Value>) -> Attributes {
    match value {
        None => Attributes::new(),
        Some(value) => Attributes::from_value(value).unwrap_or_else(|| {
            debug!("Ignoring malformed {}: {}", DEFAULT_ATTRIBUTES_KEY, value);
            Attributes::new()
        }),
    }
}

fn build_tera(
    id: &str,
    declared: &[String],
    units: &[super::ModuleUnit],
    root: &str,
    helpers: &HelperRegistry,
) -> Result<Tera, BundleError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![]);
    register_drupal_extensions(&mut tera);
    helpers.install(declared, &mut tera)?;

    for unit in units {
        if !unit.is_registered() {
            debug!("Leaving absent include candidate '{}' unregistered", unit.reference);
            continue;
        }
        let code = unit.code.as_deref().unwrap_or_default();
        if unit.is_absent() {
            debug!("Registering absent unit '{}' as empty", unit.reference);
        }
        tera.add_raw_template(&unit.reference, code)
            .map_err(|e| BundleError::parse(&unit.reference, &e))?;
    }
    tera.add_raw_template(id, root).map_err(|e| BundleError::parse(id, &e))?;

    Ok(tera)
}
