//! Validation of raw manifests.

use miette::SourceSpan;
use stanza_codegen::Dialect;

use crate::{
    BlockSpec, Manifest, NodeSpec, Result,
    error::SourceContext,
    manifest::{RawBlock, RawManifest, RawNode},
};

/// Validate a raw manifest and convert it into a [`Manifest`].
pub(crate) fn validate(raw: RawManifest, ctx: &SourceContext) -> Result<Manifest> {
    if let Some(name) = &raw.settings.dialect {
        if Dialect::from_name(name).is_none() {
            let span = find_value_span(ctx.src(), "dialect", name);
            return Err(ctx.unknown_dialect_error(name, Dialect::PRESETS, span));
        }
    }

    let mut blocks = indexmap::IndexMap::with_capacity(raw.blocks.len());
    for (name, block) in raw.blocks {
        let span = find_block_span(ctx.src(), &name);
        if let Some(reason) = validate_block_name(&name) {
            return Err(ctx.invalid_block_name_error(&name, reason, span));
        }
        let spec = validate_block(&name, block, ctx, span)?;
        blocks.insert(name, spec);
    }

    Ok(Manifest {
        settings: raw.settings,
        blocks,
    })
}

fn validate_block(
    name: &str,
    block: RawBlock,
    ctx: &SourceContext,
    span: Option<SourceSpan>,
) -> Result<BlockSpec> {
    let nodes = validate_nodes(name, "nodes", block.nodes, ctx, span)?;
    Ok(BlockSpec {
        description: block.description,
        nodes,
    })
}

fn validate_nodes(
    block: &str,
    parent: &str,
    nodes: Vec<RawNode>,
    ctx: &SourceContext,
    span: Option<SourceSpan>,
) -> Result<Vec<NodeSpec>> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| {
            let path = format!("{}[{}]", parent, i);
            validate_node(block, &path, node, ctx, span)
        })
        .collect()
}

fn validate_node(
    block: &str,
    path: &str,
    node: RawNode,
    ctx: &SourceContext,
    span: Option<SourceSpan>,
) -> Result<NodeSpec> {
    let fail = |message: &str| ctx.invalid_node_error(block, path, message, span);

    match (node.statement, node.scope, node.verbatim) {
        (Some(text), None, None) => {
            if node.close.is_some() || node.nodes.is_some() {
                return Err(fail("'close' and 'nodes' are only allowed on scopes"));
            }
            if text.contains('\n') {
                return Err(fail("statements must be a single line; use 'verbatim' for multi-line text"));
            }
            Ok(NodeSpec::Statement(text))
        }
        (None, None, Some(text)) => {
            if node.close.is_some() || node.nodes.is_some() {
                return Err(fail("'close' and 'nodes' are only allowed on scopes"));
            }
            Ok(NodeSpec::Verbatim(text))
        }
        (None, Some(header), None) => {
            let children = node.nodes.unwrap_or_default();
            let nodes = validate_nodes(block, &format!("{}.nodes", path), children, ctx, span)?;
            Ok(NodeSpec::Scope {
                header,
                close: node.close,
                nodes,
            })
        }
        (None, None, None) => Err(fail("node has no 'statement', 'scope' or 'verbatim' key")),
        _ => Err(fail("node has more than one of 'statement', 'scope' and 'verbatim'")),
    }
}

/// Validate a block name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_block_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-')) {
        return Some("name contains characters other than letters, numbers, underscores and dashes");
    }

    None
}

/// Find the span of a block name in a `[blocks.name]` header.
pub(crate) fn find_block_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("[blocks.{}]", name),
        format!("[blocks.\"{}\"]", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // Point at the name, skipping "[blocks." and an optional quote
            let start = pos + pattern.len() - 1 - name.len() - usize::from(pattern.ends_with("\"]"));
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    None
}

/// Find the span of a quoted value for `key = "value"`.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{} = {}{}{}", key, quote, value, quote);
        if let Some(pos) = src.find(&pattern) {
            let start = pos + key.len() + 4;
            return Some(SourceSpan::from((start, value.len())));
        }
    }
    None
}
