//! Lowering manifests to renderable code blocks.

use indexmap::IndexMap;
use stanza_codegen::{CodeBlock, Dialect, Node, Scope, Statement, Verbatim};

use crate::{BlockSpec, Manifest, NodeSpec, Settings};

impl Settings {
    /// Resolve the dialect, applying separator and indent overrides.
    pub fn dialect(&self) -> Dialect {
        let mut dialect = self
            .dialect
            .as_deref()
            .and_then(Dialect::from_name)
            .unwrap_or_default();
        if let Some(separator) = &self.separator {
            dialect = dialect.with_separator(separator.clone());
        }
        if let Some(indent) = self.indent {
            dialect = dialect.with_indent(indent);
        }
        dialect
    }
}

impl Manifest {
    /// Build every block, in file order.
    pub fn build_blocks(&self) -> IndexMap<String, CodeBlock> {
        let dialect = self.settings.dialect();
        self.blocks
            .iter()
            .map(|(name, spec)| (name.clone(), spec.build(&dialect)))
            .collect()
    }

    /// Build a single block by name.
    pub fn build_block(&self, name: &str) -> Option<CodeBlock> {
        let dialect = self.settings.dialect();
        self.blocks.get(name).map(|spec| spec.build(&dialect))
    }
}

impl BlockSpec {
    /// Build this block with the given dialect.
    pub fn build(&self, dialect: &Dialect) -> CodeBlock {
        let mut block = dialect.block();
        block.extend(self.nodes.iter().map(|node| node.build(dialect)));
        block
    }
}

impl NodeSpec {
    fn build(&self, dialect: &Dialect) -> Node {
        match self {
            Self::Statement(text) => Statement::new(text.as_str())
                .with_indent(dialect.indent())
                .into(),
            Self::Verbatim(text) => Verbatim::new(text.as_str()).into(),
            Self::Scope {
                header,
                close,
                nodes,
            } => {
                let mut body = dialect.block();
                body.extend(nodes.iter().map(|node| node.build(dialect)));
                let scope = Scope::new(header.as_str(), body).with_indent(dialect.indent());
                match close {
                    Some(close) => scope.close(close.as_str()).into(),
                    None => scope.into(),
                }
            }
        }
    }
}
