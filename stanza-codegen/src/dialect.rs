//! Statement and block factories for target languages.

use stanza_core::Indent;

use crate::{CodeBlock, Statement};

/// Bundles the separator and indentation conventions of a target language.
///
/// A dialect creates statements carrying its indentation style and blocks
/// carrying its separator, so code built through it is consistent.
///
/// ```
/// use stanza_codegen::Dialect;
///
/// let java = Dialect::java();
/// let code = java
///     .block()
///     .statement("int x = 1")
///     .scope("if (x > 0) {", "}", |b| b.statement("x--"))
///     .render(0)
///     .unwrap();
///
/// assert_eq!(code, "int x = 1;\nif (x > 0) {\n    x--;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    name: String,
    separator: String,
    indent: Indent,
}

impl Dialect {
    /// Names accepted by [`Dialect::from_name`].
    pub const PRESETS: &'static [&'static str] = &["plain", "java", "kotlin", "typescript", "go"];

    /// Create a custom dialect.
    pub fn new(name: impl Into<String>, separator: impl Into<String>, indent: Indent) -> Self {
        Self {
            name: name.into(),
            separator: separator.into(),
            indent,
        }
    }

    /// No separator, 4-space indentation.
    pub fn plain() -> Self {
        Self::new("plain", "", Indent::FOUR_SPACES)
    }

    /// `;` separator, 4-space indentation.
    pub fn java() -> Self {
        Self::new("java", ";", Indent::FOUR_SPACES)
    }

    /// No separator, 4-space indentation.
    pub fn kotlin() -> Self {
        Self::new("kotlin", "", Indent::FOUR_SPACES)
    }

    /// `;` separator, 2-space indentation.
    pub fn typescript() -> Self {
        Self::new("typescript", ";", Indent::TWO_SPACES)
    }

    /// No separator, tab indentation.
    pub fn go() -> Self {
        Self::new("go", "", Indent::TAB)
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "plain" => Some(Self::plain()),
            "java" => Some(Self::java()),
            "kotlin" => Some(Self::kotlin()),
            "typescript" | "ts" => Some(Self::typescript()),
            "go" => Some(Self::go()),
            _ => None,
        }
    }

    /// Replace the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replace the indentation style.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Create a statement in this dialect's indentation style.
    pub fn statement(&self, text: impl Into<String>) -> Statement {
        Statement::new(text).with_indent(self.indent)
    }

    /// Create an empty block with this dialect's separator and style.
    pub fn block(&self) -> CodeBlock {
        CodeBlock::with_separator(self.separator.clone()).indent_style(self.indent)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self::plain()
    }
}
