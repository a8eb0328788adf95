//! [`TemplateEngine`] implementation backed by Tera.
//!
//! Tera speaks the Twig/Jinja family of syntax (`{% extends %}`,
//! `{% include %}`, `{% import ... as ... %}`), parses a file into an AST we
//! can walk, and can later render the validated source without touching the
//! filesystem. The generated code of a unit is therefore the template source
//! that Tera accepted.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use tera::ast::Node;

use super::engine::{CompileRequest, CompiledTemplate, TemplateEngine};
use super::tokens::{Directive, Token};
use crate::core::{BundleError, FileOperation, FileResultExt};

/// Tera-backed engine with an optional parse cache.
///
/// The cache is only consulted when a run sets
/// [`CompileOptions::cache`](super::engine::CompileOptions::cache).
#[derive(Debug, Default)]
pub struct TeraEngine {
    cache: DashMap<PathBuf, CompiledTemplate>,
}

impl TeraEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of parsed files held in the cache.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Parse `source` and convert it into a [`CompiledTemplate`].
    pub fn compile_source(
        id: &str,
        path: Option<&Path>,
        source: &str,
    ) -> Result<CompiledTemplate, BundleError> {
        let template =
            tera::Template::new(id, path.map(|p| p.display().to_string()), source)
                .map_err(|e| BundleError::parse(id, &e))?;

        // Tera also records the parent and imported macro files on the
        // template itself; listing them first keeps extends/import ahead of
        // includes even if the AST ever stops carrying those nodes.
        let mut tokens = Vec::new();
        if let Some(parent) = &template.parent {
            tokens.push(Token::Extend(Directive::single(parent.clone())));
        }
        for (file, _namespace) in &template.imported_macro_files {
            tokens.push(Token::Import(Directive::single(file.clone())));
        }
        tokens.extend(convert_nodes(&template.ast));

        Ok(CompiledTemplate {
            code: source.to_string(),
            tokens: Some(tokens),
        })
    }
}

impl TemplateEngine for TeraEngine {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<CompiledTemplate, BundleError> {
        if request.options.cache
            && let Some(hit) = self.cache.get(request.path)
        {
            tracing::trace!("Parse cache hit for {}", request.path.display());
            return Ok(hit.clone());
        }

        let source =
            std::fs::read_to_string(request.path).with_file_context(FileOperation::Read, request.path)?;
        let compiled = Self::compile_source(request.id, Some(request.path), &source)?;

        if request.options.cache {
            self.cache.insert(request.path.to_path_buf(), compiled.clone());
        }
        Ok(compiled)
    }
}

fn convert_nodes(nodes: &[Node]) -> Vec<Token> {
    nodes.iter().filter_map(convert_node).collect()
}

fn convert_node(node: &Node) -> Option<Token> {
    match node {
        Node::Extends(_, name) => Some(Token::Extend(Directive::single(name.clone()))),
        Node::Include(_, names, _ignore_missing) => {
            Some(Token::Include(Directive::many(names.iter().cloned())))
        }
        Node::ImportMacro(_, file, _namespace) => {
            Some(Token::Import(Directive::single(file.clone())))
        }
        Node::Block(_, block, _) => nested(convert_nodes(&block.body)),
        Node::MacroDefinition(_, definition, _) => nested(convert_nodes(&definition.body)),
        Node::FilterSection(_, section, _) => nested(convert_nodes(&section.body)),
        Node::Forloop(_, forloop, _) => {
            let mut output = convert_nodes(&forloop.body);
            if let Some(empty) = &forloop.empty_body {
                output.extend(convert_nodes(empty));
            }
            nested(output)
        }
        Node::If(branches, _) => {
            let mut output: Vec<Token> = branches
                .conditions
                .iter()
                .flat_map(|(_, _, body)| convert_nodes(body))
                .collect();
            if let Some((_, otherwise)) = &branches.otherwise {
                output.extend(convert_nodes(otherwise));
            }
            nested(output)
        }
        _ => None,
    }
}

fn nested(output: Vec<Token>) -> Option<Token> {
    if output.is_empty() {
        None
    } else {
        Some(Token::Other {
            output,
        })
    }
}
