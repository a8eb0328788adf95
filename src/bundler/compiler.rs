//! Recursive dependency compilation.
//!
//! A [`CompileRun`] owns everything a single transform accumulates: the set of
//! references already dispatched, the reference graph, the compiled units and
//! the resolved dependency paths. It walks strictly depth-first and
//! sequentially: each reference is resolved, compiled and fully recursed
//! before its next sibling is looked at, so the result depends only on the
//! order references appear in.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::graph::TemplateGraph;
use super::isolation;
use crate::constants::is_self_reference;
use crate::core::BundleError;
use crate::resolver::{IdentifierResolver, ResolvedLocation};
use crate::templating::{CompileOptions, CompileRequest, TemplateEngine, extract_references, sole_references};

/// One compiled (or failed) dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledUnit {
    /// Raw reference the unit was discovered under
    pub reference: String,
    /// Resolved file
    pub path: PathBuf,
    /// Generated code, `None` when compilation failed
    pub code: Option<String>,
    /// References discovered inside the unit
    pub references: Vec<String>,
    /// Failure detail of an absent unit
    pub failure: Option<String>,
}

/// The root template after compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRoot {
    pub code: String,
    pub references: Vec<String>,
}

/// Everything a finished run hands to the assembler.
#[derive(Debug)]
pub struct CompileOutcome {
    pub root: CompiledRoot,
    pub graph: TemplateGraph,
    pub units: HashMap<String, CompiledUnit>,
    /// Resolved dependency paths in discovery order, without duplicates
    pub dependencies: Vec<PathBuf>,
    /// References named alone by at least one directive of the run
    pub sole_references: HashSet<String>,
}

/// State of one transform's dependency walk.
pub struct CompileRun<'a, E: TemplateEngine + ?Sized> {
    engine: &'a E,
    resolver: &'a IdentifierResolver,
    options: CompileOptions,
    root_id: String,
    visited: HashSet<String>,
    graph: TemplateGraph,
    units: HashMap<String, CompiledUnit>,
    dependencies: Vec<PathBuf>,
    sole_references: HashSet<String>,
}

impl<'a, E: TemplateEngine + ?Sized> CompileRun<'a, E> {
    pub fn new(
        engine: &'a E,
        resolver: &'a IdentifierResolver,
        options: CompileOptions,
        root_id: impl Into<String>,
    ) -> Self {
        let root_id = root_id.into();
        Self {
            engine,
            resolver,
            options,
            graph: TemplateGraph::new(root_id.clone()),
            root_id,
            visited: HashSet::new(),
            units: HashMap::new(),
            dependencies: Vec::new(),
            sole_references: HashSet::new(),
        }
    }

    /// Compile the root at `path` and, recursively, everything it references.
    ///
    /// Only a failure of the root itself is returned; dependency failures are
    /// recorded as absent units.
    pub fn run(mut self, path: &Path) -> Result<CompileOutcome, BundleError> {
        let root_id = self.root_id.clone();
        let (code, references) = self.compile_file(&root_id, path)?;

        let dir = path.parent().unwrap_or_else(|| Path::new("/"));
        self.process_references(&root_id, &references, dir);

        Ok(CompileOutcome {
            root: CompiledRoot {
                code,
                references,
            },
            graph: self.graph,
            units: self.units,
            dependencies: self.dependencies,
            sole_references: self.sole_references,
        })
    }

    fn process_references(&mut self, parent: &str, references: &[String], dir: &Path) {
        for reference in references {
            if is_self_reference(reference) {
                trace!("Skipping self reference '{}' in '{}'", reference, parent);
                continue;
            }

            self.graph.add_dependency(parent, reference);
            if !self.visited.insert(reference.clone()) {
                trace!("'{}' already compiled in this run", reference);
                continue;
            }

            let location = self.resolver.resolve(reference, dir);
            if !self.dependencies.contains(&location.path) {
                self.dependencies.push(location.path.clone());
            }
            self.compile_dependency(reference, &location, parent);
        }
    }

    /// Compile one dependency and recurse into its references.
    pub fn compile_dependency(&mut self, reference: &str, location: &ResolvedLocation, parent: &str) {
        debug!("Compiling '{}' (referenced by '{}') from {}", reference, parent, location.path.display());

        let result = if location.exists {
            self.compile_file(reference, &location.path)
        } else {
            Err(BundleError::FileNotFound {
                id: reference.to_string(),
                path: location.path.clone(),
            })
        };

        match result {
            Ok((code, references)) => {
                self.units.insert(
                    reference.to_string(),
                    CompiledUnit {
                        reference: reference.to_string(),
                        path: location.path.clone(),
                        code: Some(code),
                        references: references.clone(),
                        failure: None,
                    },
                );
                self.process_references(reference, &references, location.dir());
            }
            Err(err) => {
                let unit = isolation::absent_unit(reference, location.path.clone(), &err);
                self.units.insert(reference.to_string(), unit);
            }
        }
    }

    fn compile_file(&mut self, id: &str, path: &Path) -> Result<(String, Vec<String>), BundleError> {
        let request = CompileRequest {
            id,
            path,
            namespaces: self.resolver.namespaces(),
            options: &self.options,
        };
        let compiled = self.engine.compile(&request)?;
        let tokens = compiled.tokens.ok_or_else(|| BundleError::MissingTokens {
            id: id.to_string(),
        })?;

        let references = extract_references(&tokens);
        self.sole_references.extend(sole_references(&tokens));
        trace!("'{}' references {:?}", id, references);
        Ok((compiled.code, references))
    }
}
