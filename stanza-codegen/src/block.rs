//! Code blocks and the line-separated renderer.

use stanza_core::Indent;

use crate::{Node, Result, Scope, Statement, ToCode, Verbatim};

/// An ordered sequence of nodes rendered one per line.
///
/// Nodes are only ever appended, so insertion order is emission order.
/// The separator is appended after every [`Statement`] when rendering. The
/// indentation style is only used by the convenience constructors
/// ([`statement`](Self::statement), [`scope`](Self::scope) and their `push_`
/// forms) and does not affect rendering of nodes already in the block.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental construction.
///
/// # Example (Consuming API)
///
/// ```
/// use stanza_codegen::CodeBlock;
///
/// let code = CodeBlock::with_separator(";")
///     .statement("int x = 1")
///     .scope("if (x > 0) {", "}", |b| b.statement("x--"))
///     .render(0)
///     .unwrap();
///
/// assert_eq!(code, "int x = 1;\nif (x > 0) {\n    x--;\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use stanza_codegen::CodeBlock;
///
/// let mut block = CodeBlock::new();
/// block.push_statement("val a = 1").push_statement("val b = a + 1");
/// assert_eq!(block.render(0).unwrap(), "val a = 1\nval b = a + 1\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeBlock {
    nodes: Vec<Node>,
    separator: String,
    indent: Indent,
}

impl CodeBlock {
    /// Create an empty block with no separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty block that appends `separator` after each statement.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    /// Set the indentation style for statements and scopes created by
    /// this block's convenience constructors.
    pub fn indent_style(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// The separator appended after each statement.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The indentation style used by the convenience constructors.
    pub fn style(&self) -> Indent {
        self.indent
    }

    /// The nodes in emission order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create an empty block sharing this block's separator and style.
    pub fn child(&self) -> Self {
        Self {
            nodes: Vec::new(),
            separator: self.separator.clone(),
            indent: self.indent,
        }
    }

    /// Render this block. See [`render`].
    pub fn render(&self, indent: usize) -> Result<String> {
        render(self, indent)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Append a node.
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    /// Append a statement using this block's indentation style.
    pub fn push_statement(&mut self, text: impl Into<String>) -> &mut Self {
        let stmt = Statement::new(text).with_indent(self.indent);
        self.push(stmt)
    }

    /// Append preformatted text.
    pub fn push_verbatim(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Verbatim::new(text))
    }

    /// Append a custom renderable node.
    pub fn push_custom(&mut self, node: impl ToCode + Send + Sync + 'static) -> &mut Self {
        self.push(Node::custom(node))
    }

    /// Append a scope whose body is built by `f` from a child block.
    pub fn push_scope<F>(
        &mut self,
        header: impl Into<String>,
        close: impl Into<String>,
        f: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut CodeBlock),
    {
        let mut body = self.child();
        f(&mut body);
        let scope = Scope::new(header, body)
            .close(close)
            .with_indent(self.indent);
        self.push(scope)
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Append a node.
    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Append a statement using this block's indentation style.
    pub fn statement(mut self, text: impl Into<String>) -> Self {
        self.push_statement(text);
        self
    }

    /// Append preformatted text.
    pub fn verbatim(mut self, text: impl Into<String>) -> Self {
        self.push_verbatim(text);
        self
    }

    /// Append a custom renderable node.
    pub fn custom(mut self, node: impl ToCode + Send + Sync + 'static) -> Self {
        self.push_custom(node);
        self
    }

    /// Append a scope whose body is built by `f` from a child block.
    pub fn scope<F>(self, header: impl Into<String>, close: impl Into<String>, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let body = f(self.child());
        let scope = Scope::new(header, body)
            .close(close)
            .with_indent(self.indent);
        self.node(scope)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }
}

impl<N: Into<Node>> Extend<N> for CodeBlock {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.nodes.extend(iter.into_iter().map(Into::into));
    }
}

/// A block nested directly as a node renders its own lines, including the
/// final line terminator.
impl ToCode for CodeBlock {
    fn to_code(&self, indent: usize) -> Result<String> {
        render(self, indent)
    }
}

/// Render a block to text.
///
/// An empty block renders as the empty string. Otherwise each node is
/// rendered at `indent`, followed by the block separator when the node is a
/// statement, followed by a single `\n`. Failures from a node's own
/// rendering are returned unchanged and no partial output is produced.
pub fn render(block: &CodeBlock, indent: usize) -> Result<String> {
    if block.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::new();
    for node in &block.nodes {
        out.push_str(&node.to_code(indent)?);
        if node.requires_separator() {
            out.push_str(&block.separator);
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, RenderError};

    struct Failing;

    impl ToCode for Failing {
        fn to_code(&self, _indent: usize) -> Result<String> {
            Err(RenderError::render_failure("failing node", "always fails"))
        }
    }

    struct Call(&'static str);

    impl ToCode for Call {
        fn to_code(&self, indent: usize) -> Result<String> {
            Ok(format!("{}{}()", "  ".repeat(indent), self.0))
        }
    }

    #[test]
    fn test_two_statements_with_semicolon() {
        let block = CodeBlock::with_separator(";")
            .statement("int x = 1")
            .statement("int y = 2");
        assert_eq!(render(&block, 0).unwrap(), "int x = 1;\nint y = 2;\n");
    }

    #[test]
    fn test_nested_block_text_gets_no_separator() {
        let block = CodeBlock::with_separator(";").verbatim("if (x) {\n  y();\n}");
        assert_eq!(render(&block, 0).unwrap(), "if (x) {\n  y();\n}\n");
    }

    #[test]
    fn test_empty_block_renders_nothing() {
        for separator in ["", ";", ",\t"] {
            for indent in [0, 1, 7] {
                let block = CodeBlock::with_separator(separator);
                assert_eq!(render(&block, indent).unwrap(), "");
            }
        }
    }

    #[test]
    fn test_newline_count_matches_node_count() {
        let block = CodeBlock::with_separator(";")
            .statement("a")
            .verbatim("// b")
            .custom(Call("c"))
            .statement("d");
        let code = render(&block, 2).unwrap();
        assert_eq!(code.matches('\n').count(), block.len());
    }

    #[test]
    fn test_separator_only_after_statements() {
        let block = CodeBlock::with_separator(";")
            .statement("first")
            .custom(Call("second"))
            .verbatim("third")
            .statement("fourth");
        let code = render(&block, 0).unwrap();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines, ["first;", "second()", "third", "fourth;"]);
    }

    #[test]
    fn test_indent_is_passed_to_nodes() {
        let block = CodeBlock::new().custom(Call("go"));
        assert_eq!(render(&block, 2).unwrap(), "    go()\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let block = CodeBlock::with_separator(";")
            .statement("x = 1")
            .scope("if (x) {", "}", |b| b.statement("y()"));
        assert_eq!(render(&block, 1).unwrap(), render(&block, 1).unwrap());
    }

    #[test]
    fn test_failure_aborts_render() {
        let block = CodeBlock::with_separator(";")
            .statement("before")
            .custom(Failing)
            .statement("after");
        let err = render(&block, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderFailure);
        assert_eq!(
            err,
            RenderError::render_failure("failing node", "always fails")
        );
    }

    #[test]
    fn test_mutable_api() {
        let mut block = CodeBlock::with_separator(";");
        block
            .push_statement("int i = 0")
            .push_scope("for (;;) {", "}", |body| {
                body.push_statement("i++");
            })
            .push_verbatim("// end");
        assert_eq!(
            block.render(0).unwrap(),
            "int i = 0;\nfor (;;) {\n    i++;\n}\n// end\n"
        );
    }

    #[test]
    fn test_child_inherits_configuration() {
        let block = CodeBlock::with_separator(";").indent_style(Indent::TAB);
        let child = block.child();
        assert_eq!(child.separator(), ";");
        assert_eq!(child.style(), Indent::TAB);
        assert!(child.is_empty());
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut block = CodeBlock::with_separator(",");
        block.extend([Statement::new("a"), Statement::new("b")]);
        block.extend([Verbatim::new("c")]);
        assert_eq!(block.render(0).unwrap(), "a,\nb,\nc\n");
    }

    #[test]
    fn test_when_and_each() {
        let block = CodeBlock::with_separator(";")
            .when(false, |b| b.statement("skipped"))
            .each(["a", "b"], |b, name| b.statement(format!("use({})", name)));
        assert_eq!(block.render(0).unwrap(), "use(a);\nuse(b);\n");
    }

    #[test]
    fn test_block_as_node() {
        let inner = CodeBlock::with_separator(";").statement("inner");
        let outer = CodeBlock::new().custom(inner).statement("outer");
        assert_eq!(outer.render(0).unwrap(), "inner;\n\nouter\n");
    }
}
