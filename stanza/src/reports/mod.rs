//! Report data structures for commands.
//!
//! This module separates data collection from rendering.
//! Operations build reports, then commands render them to an Output target.

mod check;
mod output;
mod render;

pub use check::{BlockSummary, CheckReport};
pub use output::{Report, TerminalOutput};
pub use render::{RenderReport, RenderedBlock};
