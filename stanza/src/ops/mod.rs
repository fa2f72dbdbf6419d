//! Operations behind the CLI commands.
//!
//! Each operation collects its results into a report; commands decide how to
//! print them.

mod check;
mod render;

pub use check::check;
pub use render::{RenderOptions, render, write_code};
