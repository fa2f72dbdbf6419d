//! Check operation - manifest validation summary.

use std::path::Path;

use stanza_manifest::Manifest;

use crate::reports::{BlockSummary, CheckReport};

/// Execute the check operation.
///
/// Parsing already rejected invalid manifests, and manifest nodes always
/// render, so this only summarizes the blocks and warns about suspicious ones.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let dialect = manifest.settings.dialect();
    let mut warnings = Vec::new();
    let mut blocks = Vec::new();

    for (name, spec) in &manifest.blocks {
        if spec.nodes.is_empty() {
            warnings.push(format!("block '{}' is empty and renders nothing", name));
        }

        let mut kinds: Vec<(&'static str, usize)> = Vec::new();
        for node in spec.build(&dialect).nodes() {
            match kinds.iter_mut().find(|(kind, _)| *kind == node.kind_name()) {
                Some((_, count)) => *count += 1,
                None => kinds.push((node.kind_name(), 1)),
            }
        }

        blocks.push(BlockSummary {
            name: name.clone(),
            description: spec.description.clone(),
            nodes: spec.nodes.len(),
            total_nodes: spec.total_nodes(),
            kinds,
        });
    }

    if manifest.blocks.is_empty() {
        warnings.push("no blocks defined".to_string());
    }

    CheckReport {
        config_path: config_path.to_path_buf(),
        dialect: dialect.name().to_string(),
        separator: dialect.separator().to_string(),
        indent: dialect.indent(),
        blocks,
        warnings,
    }
}
