//! Manifest types for stanza.toml files.

use indexmap::IndexMap;
use serde::Deserialize;
use stanza_core::Indent;

/// Validated contents of a stanza.toml file.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Rendering settings shared by all blocks.
    pub settings: Settings,
    /// Named blocks, in file order.
    pub blocks: IndexMap<String, BlockSpec>,
}

impl Manifest {
    /// Names of all blocks, in file order.
    pub fn block_names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn block(&self, name: &str) -> Option<&BlockSpec> {
        self.blocks.get(name)
    }
}

/// The `[settings]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Dialect preset name (e.g. "java").
    pub dialect: Option<String>,
    /// Separator appended after each statement; overrides the dialect.
    pub separator: Option<String>,
    /// Indentation style; overrides the dialect.
    pub indent: Option<Indent>,
    /// Indent level blocks are rendered at.
    #[serde(default)]
    pub base_indent: usize,
}

/// A named block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub description: Option<String>,
    pub nodes: Vec<NodeSpec>,
}

impl BlockSpec {
    /// Number of nodes in this block and all nested scopes.
    pub fn total_nodes(&self) -> usize {
        self.nodes.iter().map(NodeSpec::total_nodes).sum()
    }
}

/// A node in a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSpec {
    Statement(String),
    Verbatim(String),
    Scope {
        header: String,
        close: Option<String>,
        nodes: Vec<NodeSpec>,
    },
}

impl NodeSpec {
    fn total_nodes(&self) -> usize {
        match self {
            Self::Scope { nodes, .. } => 1 + nodes.iter().map(Self::total_nodes).sum::<usize>(),
            _ => 1,
        }
    }
}

// =============================================================================
// Raw deserialization types, checked by `validate` before becoming a Manifest
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawManifest {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub blocks: IndexMap<String, RawBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawBlock {
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawNode {
    pub statement: Option<String>,
    pub scope: Option<String>,
    pub verbatim: Option<String>,
    pub close: Option<String>,
    pub nodes: Option<Vec<RawNode>>,
}
