use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stanza_manifest::StanzaToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to stanza.toml (defaults to ./stanza.toml)
    #[arg(short, long, default_value = stanza_manifest::MANIFEST_FILE)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let stanza_toml = StanzaToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(stanza_toml.manifest(), stanza_toml.path());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
