//! Check command report data structures.

use std::path::PathBuf;

use stanza_core::Indent;

use super::output::{Output, Report};

/// Summary of one block.
#[derive(Debug, Clone)]
pub struct BlockSummary {
    pub name: String,
    pub description: Option<String>,
    /// Top-level node count.
    pub nodes: usize,
    /// Node count including nested scopes.
    pub total_nodes: usize,
    /// Top-level node counts per kind, in order of first appearance.
    pub kinds: Vec<(&'static str, usize)>,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Resolved dialect name.
    pub dialect: String,
    /// Resolved statement separator.
    pub separator: String,
    /// Resolved indentation style.
    pub indent: Indent,
    pub blocks: Vec<BlockSummary>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.status(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value("dialect", &self.dialect);
        out.key_value(
            "separator",
            if self.separator.is_empty() {
                "(none)"
            } else {
                self.separator.as_str()
            },
        );
        out.key_value("indent", &self.indent.to_string());

        let count = self.blocks.len();
        out.key_value(
            "blocks",
            &format!("{} block{}", count, if count == 1 { "" } else { "s" }),
        );
        for block in &self.blocks {
            let mut line = format!(
                "{} ({} nodes, {} total",
                block.name, block.nodes, block.total_nodes
            );
            if !block.kinds.is_empty() {
                let kinds: Vec<String> = block
                    .kinds
                    .iter()
                    .map(|(kind, n)| format!("{}: {}", kind, n))
                    .collect();
                line.push_str(&format!("; {}", kinds.join(", ")));
            }
            line.push(')');
            if let Some(desc) = &block.description {
                line.push_str(&format!(": {}", desc));
            }
            out.list_item(&line);
        }
    }
}
