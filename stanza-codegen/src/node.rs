//! The renderable node model.

use std::fmt;

use crate::{Result, Scope, Statement, Verbatim};

/// Trait for constructs that produce their own text at an indent level.
///
/// Implementations decide how (and whether) to apply `indent`. The returned
/// text must not carry a trailing line terminator; the enclosing
/// [`CodeBlock`](crate::CodeBlock) adds one.
pub trait ToCode {
    /// Render this node at the given indent level.
    fn to_code(&self, indent: usize) -> Result<String>;
}

/// Blanket implementation for references.
impl<T: ToCode + ?Sized> ToCode for &T {
    fn to_code(&self, indent: usize) -> Result<String> {
        (**self).to_code(indent)
    }
}

/// Blanket implementation for Box.
impl<T: ToCode + ?Sized> ToCode for Box<T> {
    fn to_code(&self, indent: usize) -> Result<String> {
        self.as_ref().to_code(indent)
    }
}

/// A node in a [`CodeBlock`](crate::CodeBlock).
pub enum Node {
    /// A single line of code that receives the block separator.
    Statement(Statement),
    /// A braced nested block.
    Scope(Scope),
    /// Preformatted text emitted as-is.
    Verbatim(Verbatim),
    /// Any other renderable construct.
    Custom(Box<dyn ToCode + Send + Sync>),
}

impl Node {
    /// Create a custom node from any renderable value.
    pub fn custom(node: impl ToCode + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(node))
    }

    /// Whether the block separator is appended after this node.
    ///
    /// Only statements qualify; every other kind is self-terminating.
    pub fn requires_separator(&self) -> bool {
        matches!(self, Self::Statement(_))
    }

    /// Short name of this node's kind, for summaries and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Statement(_) => "statement",
            Self::Scope(_) => "scope",
            Self::Verbatim(_) => "verbatim",
            Self::Custom(_) => "custom",
        }
    }
}

impl ToCode for Node {
    fn to_code(&self, indent: usize) -> Result<String> {
        match self {
            Self::Statement(stmt) => stmt.to_code(indent),
            Self::Scope(scope) => scope.to_code(indent),
            Self::Verbatim(text) => text.to_code(indent),
            Self::Custom(node) => node.to_code(indent),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement(stmt) => f.debug_tuple("Statement").field(stmt).finish(),
            Self::Scope(scope) => f.debug_tuple("Scope").field(scope).finish(),
            Self::Verbatim(text) => f.debug_tuple("Verbatim").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Self::Statement(stmt)
    }
}

impl From<Scope> for Node {
    fn from(scope: Scope) -> Self {
        Self::Scope(scope)
    }
}

impl From<Verbatim> for Node {
    fn from(text: Verbatim) -> Self {
        Self::Verbatim(text)
    }
}
