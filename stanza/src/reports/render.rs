//! Render command report data structures.

use std::path::PathBuf;

use stanza_core::WriteResult;

use super::output::{Output, Report};

/// A block included in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    pub name: String,
    /// Top-level node count.
    pub nodes: usize,
}

impl RenderedBlock {
    pub fn new(name: impl Into<String>, nodes: usize) -> Self {
        Self {
            name: name.into(),
            nodes,
        }
    }
}

/// Report data from rendering blocks.
#[derive(Debug)]
pub struct RenderReport {
    /// Rendered blocks, in output order.
    pub blocks: Vec<RenderedBlock>,
    /// The generated code.
    pub code: String,
    /// Output file and what happened to it, if one was requested.
    pub written: Option<(PathBuf, WriteResult)>,
}

impl Report for RenderReport {
    fn render(&self, out: &mut dyn Output) {
        // Code bound for stdout is written by the command so write errors propagate
        let Some((path, result)) = &self.written else {
            return;
        };

        match result {
            WriteResult::Written => {
                let count = self.blocks.len();
                out.status(&format!(
                    "✓ wrote {} block{} to {}",
                    count,
                    if count == 1 { "" } else { "s" },
                    path.display()
                ));
                for block in &self.blocks {
                    out.list_item(&format!("{} ({} nodes)", block.name, block.nodes));
                }
            }
            WriteResult::Skipped => {
                out.warning(&format!("{} already exists, skipped", path.display()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_stdout_report_prints_nothing() {
        let report = RenderReport {
            blocks: vec![RenderedBlock::new("main", 1)],
            code: "x;\n".into(),
            written: None,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert!(out.lines.is_empty());
    }

    #[test]
    fn test_written_report() {
        let report = RenderReport {
            blocks: vec![RenderedBlock::new("a", 2), RenderedBlock::new("b", 1)],
            code: String::new(),
            written: Some((PathBuf::from("out.java"), WriteResult::Written)),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            ["✓ wrote 2 blocks to out.java", "- a (2 nodes)", "- b (1 nodes)"]
        );
    }

    #[test]
    fn test_skipped_report() {
        let report = RenderReport {
            blocks: vec![],
            code: String::new(),
            written: Some((PathBuf::from("out.java"), WriteResult::Skipped)),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines, ["warning: out.java already exists, skipped"]);
    }
}
