use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result, parse_manifest};

/// A stanza.toml file with both raw content and parsed manifest.
#[derive(Debug)]
pub struct StanzaToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl StanzaToml {
    /// Open and parse a stanza.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
