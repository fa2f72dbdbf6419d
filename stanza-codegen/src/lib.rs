//! Line-separated code block rendering.
//!
//! A [`CodeBlock`] holds an ordered sequence of [`Node`]s and renders them
//! one per line. [`Statement`] nodes get the block's separator appended
//! before their line terminator; self-terminating nodes ([`Scope`],
//! [`Verbatim`] and custom [`ToCode`] implementations) never do.
//!
//! # Module Organization
//!
//! - [`ToCode`] and [`Node`] - the renderable node model
//! - [`CodeBlock`] and [`render`] - the block and its renderer
//! - [`Dialect`] - statement and block factory for a target language
//! - [`RenderError`] - failures raised by a node's own rendering
//!
//! # Example
//!
//! ```
//! use stanza_codegen::{CodeBlock, render};
//!
//! let block = CodeBlock::with_separator(";")
//!     .statement("int x = 1")
//!     .statement("int y = 2");
//!
//! assert_eq!(render(&block, 0).unwrap(), "int x = 1;\nint y = 2;\n");
//! ```

mod block;
mod dialect;
mod error;
mod node;
mod scope;
mod statement;

pub use block::{CodeBlock, render};
pub use dialect::Dialect;
pub use error::{ErrorKind, RenderError, Result};
pub use node::{Node, ToCode};
pub use scope::Scope;
pub use stanza_core::Indent;
pub use statement::{Statement, Verbatim};
