//! The Assembled Module format.
//!
//! A [`TemplateModule`] is what a transform emits: the root template plus every
//! template it transitively references, ordered so that each unit appears
//! before anything that uses it. Its serialized form ([`TemplateModule::to_code`])
//! is plain JSON, stable byte-for-byte for identical input, and can be loaded
//! back with [`TemplateModule::from_code`] and rendered without touching the
//! filesystem.
//!
//! # Document Shape
//!
//! ```json
//! {
//!   "format": 1,
//!   "id": "components/card.twig",
//!   "mode": "html",
//!   "content": {
//!     "kind": "assembled",
//!     "helpers": ["testFunction"],
//!     "globals": { "active_theme": "poodles" },
//!     "units": [
//!       { "reference": "@ui/button.twig", "path": "/site/ui/button.twig", "code": "<button>..." },
//!       { "reference": "missing.twig", "path": "/site/missing.twig", "code": null }
//!     ],
//!     "root": "{% include \"@ui/button.twig\" %}"
//!   }
//! }
//! ```
//!
//! A unit whose `code` is `null` failed to compile; it keeps its slot so the
//! remaining order is unchanged. A `"kind": "fallback"` document carries only
//! the diagnostic detail of a root-tier failure.

pub mod fallback;
pub mod runtime;

pub use runtime::RenderEntry;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;

use crate::constants::{ELEMENT_TAG, MODULE_FORMAT_VERSION};
use crate::core::BundleError;
use crate::templating::HelperRegistry;

/// How rendered markup is handed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputMode {
    /// Markup returned unchanged
    #[default]
    #[serde(rename = "html")]
    Html,
    /// Markup wrapped in an element for a UI framework to mount
    #[serde(rename = "react", alias = "element")]
    Element,
}

impl OutputMode {
    /// Apply the output adaptation to rendered markup.
    pub fn adapt(self, html: String) -> Rendered {
        match self {
            Self::Html => Rendered::Html(html),
            Self::Element => Rendered::Element {
                tag: ELEMENT_TAG.to_string(),
                inner_html: html,
            },
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Element => write!(f, "react"),
        }
    }
}

/// Result of rendering a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Rendered {
    /// Plain markup
    Html(String),
    /// An element whose inner HTML is the rendered markup
    Element {
        /// Element tag name
        tag: String,
        /// Rendered markup
        inner_html: String,
    },
}

impl Rendered {
    /// The rendered markup, without any wrapping element.
    pub fn html(&self) -> &str {
        match self {
            Self::Html(html) => html,
            Self::Element {
                inner_html,
                ..
            } => inner_html,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            Self::Html(html) => html,
            Self::Element {
                inner_html,
                ..
            } => inner_html,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html(html) => f.write_str(html),
            Self::Element {
                tag,
                inner_html,
            } => write!(f, "<{tag}>{inner_html}</{tag}>"),
        }
    }
}

/// One compiled dependency inside a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleUnit {
    /// Reference the unit is registered under, as written in the directive
    pub reference: String,
    /// File the reference resolved to
    pub path: PathBuf,
    /// Generated code, or `None` when the unit failed to compile
    pub code: Option<String>,
    /// Only ever named as one of several include candidates
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub candidate_only: bool,
}

impl ModuleUnit {
    pub fn is_absent(&self) -> bool {
        self.code.is_none()
    }

    /// Whether instantiation registers this unit under its reference.
    ///
    /// An absent unit stands in as an empty template, except when it is only
    /// a candidate of an include list: leaving it out lets the engine fall
    /// through to the next candidate.
    pub fn is_registered(&self) -> bool {
        !(self.is_absent() && self.candidate_only)
    }
}

/// Body of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModuleContent {
    /// A successfully assembled module
    Assembled {
        /// Helper names the runtime must provide
        helpers: Vec<String>,
        /// Values merged under every render context
        globals: Map<String, Value>,
        /// Dependencies, each before its dependents
        units: Vec<ModuleUnit>,
        /// Generated code of the root template
        root: String,
    },
    /// A root-tier failure; rendering always yields the diagnostic
    Fallback {
        /// Error detail embedded in the diagnostic
        detail: String,
    },
}

/// A self-contained, renderable template bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateModule {
    /// Document format version
    pub format: u32,
    /// Source id of the root template
    pub id: String,
    /// Output adaptation
    pub mode: OutputMode,
    /// Assembled units or fallback detail
    pub content: ModuleContent,
}

impl TemplateModule {
    /// An assembled module.
    pub fn assembled(
        id: impl Into<String>,
        mode: OutputMode,
        helpers: Vec<String>,
        globals: Map<String, Value>,
        units: Vec<ModuleUnit>,
        root: impl Into<String>,
    ) -> Self {
        Self {
            format: MODULE_FORMAT_VERSION,
            id: id.into(),
            mode,
            content: ModuleContent::Assembled {
                helpers,
                globals,
                units,
                root: root.into(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.content, ModuleContent::Fallback { .. })
    }

    /// Units in emission order; empty for a fallback module.
    pub fn units(&self) -> &[ModuleUnit] {
        match &self.content {
            ModuleContent::Assembled {
                units,
                ..
            } => units,
            ModuleContent::Fallback {
                ..
            } => &[],
        }
    }

    /// Helper names the module declares; empty for a fallback module.
    pub fn helpers(&self) -> &[String] {
        match &self.content {
            ModuleContent::Assembled {
                helpers,
                ..
            } => helpers,
            ModuleContent::Fallback {
                ..
            } => &[],
        }
    }

    /// Serialize the module to its code form.
    pub fn to_code(&self) -> Result<String, BundleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a module from code produced by [`TemplateModule::to_code`].
    pub fn from_code(code: &str) -> Result<Self, BundleError> {
        let module: Self = serde_json::from_str(code)?;
        if module.format != MODULE_FORMAT_VERSION {
            return Err(BundleError::UnsupportedModuleFormat {
                found: module.format,
                expected: MODULE_FORMAT_VERSION,
            });
        }
        Ok(module)
    }

    /// Build the render entry point, installing the declared helpers from `helpers`.
    ///
    /// Never fails: a module that cannot be instantiated yields an entry that
    /// renders the diagnostic.
    pub fn instantiate(&self, helpers: &HelperRegistry) -> RenderEntry {
        RenderEntry::new(self, helpers)
    }
}
