//! Statement and verbatim nodes.

use stanza_core::Indent;

use crate::{Result, ToCode};

/// One line of generated code.
///
/// A statement renders as its text prefixed by `indent` levels of its
/// indentation style. The enclosing block appends the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    text: String,
    indent: Indent,
}

impl Statement {
    /// Create a statement with the default indentation style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            indent: Indent::default(),
        }
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// The statement text, without indentation or separator.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The indentation style.
    pub fn indent(&self) -> Indent {
        self.indent
    }
}

impl ToCode for Statement {
    fn to_code(&self, indent: usize) -> Result<String> {
        let mut out = self.indent.prefix(indent);
        out.push_str(&self.text);
        Ok(out)
    }
}

/// Preformatted text that is emitted unchanged.
///
/// Verbatim text ignores the indent level. It should not end with a line
/// terminator, since the enclosing block adds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verbatim(String);

impl Verbatim {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl ToCode for Verbatim {
    fn to_code(&self, _indent: usize) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_at_level_zero() {
        let stmt = Statement::new("int x = 1");
        assert_eq!(stmt.to_code(0).unwrap(), "int x = 1");
    }

    #[test]
    fn test_statement_indents_itself() {
        let stmt = Statement::new("y()").with_indent(Indent::TWO_SPACES);
        assert_eq!(stmt.to_code(2).unwrap(), "    y()");

        let stmt = Statement::new("y()").with_indent(Indent::TAB);
        assert_eq!(stmt.to_code(1).unwrap(), "\ty()");
    }

    #[test]
    fn test_verbatim_ignores_indent() {
        let text = Verbatim::new("if (x) {\n  y();\n}");
        assert_eq!(text.to_code(0).unwrap(), "if (x) {\n  y();\n}");
        assert_eq!(text.to_code(5).unwrap(), "if (x) {\n  y();\n}");
    }
}
