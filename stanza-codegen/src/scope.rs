//! Braced nested blocks.

use stanza_core::Indent;

use crate::{CodeBlock, Result, ToCode, render};

/// A nested block with a header line, an indented body and an optional
/// closing line.
///
/// ```
/// use stanza_codegen::{CodeBlock, Indent, Scope, ToCode};
///
/// let body = CodeBlock::with_separator(";")
///     .indent_style(Indent::TWO_SPACES)
///     .statement("y()");
/// let scope = Scope::new("if (x) {", body)
///     .close("}")
///     .with_indent(Indent::TWO_SPACES);
///
/// assert_eq!(scope.to_code(0).unwrap(), "if (x) {\n  y();\n}");
/// ```
#[derive(Debug)]
pub struct Scope {
    header: String,
    body: CodeBlock,
    close: Option<String>,
    indent: Indent,
}

impl Scope {
    /// Create a scope without a closing line.
    pub fn new(header: impl Into<String>, body: CodeBlock) -> Self {
        Self {
            header: header.into(),
            body,
            close: None,
            indent: Indent::default(),
        }
    }

    /// Set the closing line (e.g. `}`).
    pub fn close(mut self, close: impl Into<String>) -> Self {
        self.close = Some(close.into());
        self
    }

    /// Set the indentation style used for the header and closing lines.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &CodeBlock {
        &self.body
    }

    pub fn closing(&self) -> Option<&str> {
        self.close.as_deref()
    }
}

impl ToCode for Scope {
    fn to_code(&self, indent: usize) -> Result<String> {
        let prefix = self.indent.prefix(indent);
        let mut out = String::new();

        if !self.header.is_empty() {
            out.push_str(&prefix);
            out.push_str(&self.header);
            out.push('\n');
        }

        out.push_str(&render(&self.body, indent + 1)?);

        match &self.close {
            Some(close) => {
                out.push_str(&prefix);
                out.push_str(close);
            }
            // The enclosing block terminates the last line.
            None => {
                if out.ends_with('\n') {
                    out.pop();
                }
            }
        }

        Ok(out)
    }
}
