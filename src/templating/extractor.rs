//! Reference extraction from token trees.
//!
//! Finds every template a parsed template pulls in through embed, include,
//! extends or import directives, including directives nested inside control
//! structures.

use std::collections::HashSet;

use super::tokens::Token;

/// Collects the distinct references used by a token tree.
///
/// Traversal is depth-first: a node's own references are recorded before the
/// references found in its nested output. The result keeps the order of first
/// appearance and contains each identifier once.
pub fn extract_references(tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut references = Vec::new();
    collect(tokens, &mut seen, &mut references);
    references
}

fn collect(tokens: &[Token], seen: &mut HashSet<String>, references: &mut Vec<String>) {
    for token in tokens {
        for reference in token.references() {
            if seen.insert(reference.clone()) {
                references.push(reference.clone());
            }
        }
        collect(token.output(), seen, references);
    }
}

/// References some directive names on its own rather than as one of several
/// include candidates.
///
/// A template registered under such a reference must exist at render time,
/// while a reference that only ever appears in a candidate list may be left
/// unregistered so the engine falls through to the next candidate.
pub fn sole_references(tokens: &[Token]) -> HashSet<String> {
    let mut sole = HashSet::new();
    collect_sole(tokens, &mut sole);
    sole
}

fn collect_sole(tokens: &[Token], sole: &mut HashSet<String>) {
    for token in tokens {
        if let [reference] = token.references() {
            sole.insert(reference.clone());
        }
        collect_sole(token.output(), sole);
    }
}
