//! Constants shared across the bundling pipeline.
//!
//! Template extensions, reserved identifiers and the diagnostic format are
//! defined here so that the resolver, the compiler and the emitted module all
//! agree on them.

/// Primary template extension appended when probing for a reference.
pub const PRIMARY_EXTENSION: &str = "twig";

/// Secondary (variant) extension tried after the primary one.
pub const SECONDARY_EXTENSION: &str = "html.twig";

/// Identifiers a template uses to refer to itself (`{% import _self as m %}`).
///
/// These are handled by the compiled template's own instance and are never
/// imported or assembled.
pub const SELF_REFERENCES: &[&str] = &["_self", "self"];

/// Default pattern deciding which source ids are transformed.
pub const DEFAULT_PATTERN: &str = r"\.(twig)(\?.*)?$";

/// Prefix of every diagnostic string produced in place of rendered output.
pub const DIAGNOSTIC_PREFIX: &str = "An error occurred whilst rendering";

/// Version of the emitted module document.
pub const MODULE_FORMAT_VERSION: u32 = 1;

/// Tag used when wrapping rendered markup for a UI framework.
pub const ELEMENT_TAG: &str = "div";

/// Context key holding caller-supplied default attributes.
pub const DEFAULT_ATTRIBUTES_KEY: &str = "defaultAttributes";

/// Context key receiving the synthesized attribute collection.
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Returns true when `reference` is one of the reserved self identifiers.
pub fn is_self_reference(reference: &str) -> bool {
    SELF_REFERENCES.contains(&reference)
}

/// Formats the diagnostic shown instead of rendered output.
pub fn diagnostic(id: &str, detail: &str) -> String {
    format!("{DIAGNOSTIC_PREFIX} {id}: {detail}")
}
