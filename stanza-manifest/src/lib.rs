//! `stanza.toml` parsing and validation.
//!
//! A manifest describes named code blocks and the settings used to render
//! them. Parsing validates the whole file up front, so a [`Manifest`] can
//! always be lowered to [`CodeBlock`](stanza_codegen::CodeBlock)s.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod lower;
mod manifest;
mod parse;
mod validate;

pub use error::{Error, Result};
pub use file::StanzaToml;
pub use manifest::{BlockSpec, Manifest, NodeSpec, Settings};
pub use parse::parse_manifest;

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "stanza.toml";
