use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unknown_dialect_error(
        &self,
        name: impl Into<String>,
        available: &[&str],
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownDialect {
            src: self.named_source(),
            span,
            name: name.into(),
            available: available.join(", "),
        })
    }

    pub fn invalid_block_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidBlockName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_node_error(
        &self,
        block: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidNode {
            src: self.named_source(),
            span,
            block: block.into(),
            path: path.into(),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a stanza.toml or pass its path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stanza.toml")]
    #[diagnostic(code(stanza::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown dialect '{name}'")]
    #[diagnostic(
        code(stanza::unknown_dialect),
        help("available dialects are: {available}")
    )]
    UnknownDialect {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown dialect")]
        span: Option<SourceSpan>,
        name: String,
        available: String,
    },

    #[error("invalid block name '{name}'")]
    #[diagnostic(
        code(stanza::invalid_block_name),
        help("{reason}. Use only letters, numbers, underscores and dashes, starting with a letter or underscore.")
    )]
    InvalidBlockName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid node {path} in block '{block}': {message}")]
    #[diagnostic(
        code(stanza::invalid_node),
        help("each node needs exactly one of 'statement', 'scope' or 'verbatim'; 'close' and 'nodes' belong to scopes")
    )]
    InvalidNode {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this block")]
        span: Option<SourceSpan>,
        block: String,
        path: String,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
