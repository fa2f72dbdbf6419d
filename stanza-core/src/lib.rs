//! Core utilities and types for Stanza.
//!
//! This crate provides the indentation styles and output file handling
//! shared by the renderer, the manifest loader and the CLI.

mod file;
mod indent;

// File operations
pub use file::{File, Overwrite, WriteResult};
// Indentation
pub use indent::Indent;
