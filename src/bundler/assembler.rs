//! Ordered assembly of a finished compile run.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::compiler::CompileOutcome;
use crate::module::{ModuleUnit, OutputMode, TemplateModule};

/// Build the Assembled Module for `id` from a finished run.
///
/// Units follow [`TemplateGraph::emit_order`](super::graph::TemplateGraph::emit_order),
/// so every dependency precedes its dependents; the root comes last.
pub fn assemble(
    id: &str,
    mode: OutputMode,
    helpers: Vec<String>,
    globals: Map<String, Value>,
    outcome: &CompileOutcome,
) -> TemplateModule {
    if let Some(cycle) = outcome.graph.find_cycle() {
        warn!("Template '{}' has circular references: {}", id, cycle.join(" → "));
    }
    debug!("Reference tree of '{}':\n{}", id, outcome.graph.to_tree_string());

    let units: Vec<ModuleUnit> = outcome
        .graph
        .emit_order()
        .into_iter()
        .filter_map(|reference| outcome.units.get(&reference))
        .map(|unit| ModuleUnit {
            reference: unit.reference.clone(),
            path: unit.path.clone(),
            code: unit.code.clone(),
            candidate_only: !outcome.sole_references.contains(&unit.reference),
        })
        .collect();

    TemplateModule::assembled(id, mode, helpers, globals, units, outcome.root.code.clone())
}
