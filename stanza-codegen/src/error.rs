//! Render errors.

use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Classification of a [`RenderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A node could not produce its own text.
    RenderFailure,
}

/// Error raised by a node's `to_code` implementation.
///
/// The block renderer never creates, wraps or catches these; they reach the
/// caller exactly as the failing node produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("failed to render {node}: {reason}")]
    RenderFailure { node: String, reason: String },
}

impl RenderError {
    /// Create a render failure for the named node.
    pub fn render_failure(node: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RenderFailure {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RenderFailure { .. } => ErrorKind::RenderFailure,
        }
    }
}
