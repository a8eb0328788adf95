//! Engine-independent token tree.
//!
//! Engines convert their own AST into this shape so the rest of the pipeline
//! only has to understand the directives that pull in other templates. Every
//! other node is kept as [`Token::Other`] purely to carry the nested output of
//! control structures, blocks and macros, where such directives may also appear.

/// Payload shared by every directive that references other templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// Raw reference identifiers, in source order
    pub references: Vec<String>,
    /// Nested tokens (for example the body of an embed)
    pub output: Vec<Token>,
}

impl Directive {
    /// Directive referencing a single template with no nested output.
    pub fn single(reference: impl Into<String>) -> Self {
        Self {
            references: vec![reference.into()],
            output: Vec::new(),
        }
    }

    /// Directive referencing several candidate templates.
    pub fn many<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            references: references.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Attach nested output.
    pub fn with_output(mut self, output: Vec<Token>) -> Self {
        self.output = output;
        self
    }
}

/// One node of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{% embed "x" %}...{% endembed %}`
    Embed(Directive),
    /// `{% include "x" %}`
    Include(Directive),
    /// `{% extends "x" %}`
    Extend(Directive),
    /// `{% import "x" as y %}`
    Import(Directive),
    /// Any other node; only its nested output matters
    Other {
        /// Nested tokens
        output: Vec<Token>,
    },
}

impl Token {
    /// References declared directly by this node.
    pub fn references(&self) -> &[String] {
        match self {
            Token::Embed(d) | Token::Include(d) | Token::Extend(d) | Token::Import(d) => {
                &d.references
            }
            Token::Other {
                ..
            } => &[],
        }
    }

    /// Nested output of this node.
    pub fn output(&self) -> &[Token] {
        match self {
            Token::Embed(d) | Token::Include(d) | Token::Extend(d) | Token::Import(d) => {
                &d.output
            }
            Token::Other {
                output,
            } => output,
        }
    }
}
