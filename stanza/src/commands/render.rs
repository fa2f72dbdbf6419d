use std::{io, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use stanza_manifest::StanzaToml;

use super::UnwrapOrExit;
use crate::{
    ops::{self, RenderOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RenderCommand {
    /// Path to stanza.toml (defaults to ./stanza.toml)
    #[arg(short, long, default_value = stanza_manifest::MANIFEST_FILE)]
    pub config: PathBuf,

    /// Block to render (repeatable; defaults to all blocks in file order)
    #[arg(short, long = "block")]
    pub blocks: Vec<String>,

    /// Indent level to render at (overrides settings.base_indent)
    #[arg(long)]
    pub indent: Option<usize>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave an existing output file untouched
    #[arg(long, requires = "output")]
    pub no_clobber: bool,
}

impl RenderCommand {
    pub fn run(&self) -> Result<()> {
        let stanza_toml = StanzaToml::open(&self.config).unwrap_or_exit();

        let options = RenderOptions {
            blocks: self.blocks.clone(),
            indent: self.indent,
            output: self.output.clone(),
            no_clobber: self.no_clobber,
        };
        let report = ops::render(stanza_toml.manifest(), &options)?;

        if report.written.is_none() {
            ops::write_code(&mut io::stdout().lock(), &report.code)
                .wrap_err("failed to write rendered code to stdout")?;
        }
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
