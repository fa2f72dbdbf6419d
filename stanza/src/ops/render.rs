//! Render operation - blocks to text.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use eyre::{Result, bail};
use stanza_core::{File, Overwrite};
use stanza_manifest::Manifest;

use crate::reports::{RenderReport, RenderedBlock};

/// Options for the render operation.
#[derive(Debug, Default)]
pub struct RenderOptions {
    /// Blocks to render; empty means all blocks.
    pub blocks: Vec<String>,
    /// Indent level override.
    pub indent: Option<usize>,
    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Skip writing when the output file exists.
    pub no_clobber: bool,
}

/// Execute the render operation.
///
/// Selected blocks are rendered in the requested order (file order when none
/// are requested) and joined with a blank line.
pub fn render(manifest: &Manifest, options: &RenderOptions) -> Result<RenderReport> {
    let names: Vec<&str> = if options.blocks.is_empty() {
        manifest.block_names().collect()
    } else {
        options.blocks.iter().map(String::as_str).collect()
    };

    let mut selected = Vec::with_capacity(names.len());
    let mut unknown = Vec::new();
    for name in names {
        match manifest.block(name) {
            Some(spec) => selected.push((name, spec)),
            None => unknown.push(name),
        }
    }
    if !unknown.is_empty() {
        let available: Vec<&str> = manifest.block_names().collect();
        bail!(
            "unknown block{} '{}' (available: {})",
            if unknown.len() == 1 { "" } else { "s" },
            unknown.join("', '"),
            if available.is_empty() {
                "none".to_string()
            } else {
                available.join(", ")
            }
        );
    }

    let indent = options.indent.unwrap_or(manifest.settings.base_indent);
    let dialect = manifest.settings.dialect();

    let mut rendered = Vec::with_capacity(selected.len());
    let mut sections = Vec::with_capacity(selected.len());
    for (name, spec) in selected {
        let code = spec.build(&dialect).render(indent)?;
        rendered.push(RenderedBlock::new(name, spec.nodes.len()));
        // Empty blocks render nothing and get no blank line either
        if !code.is_empty() {
            sections.push(code);
        }
    }
    let code = sections.join("\n");

    let written = match &options.output {
        Some(path) => {
            let overwrite = if options.no_clobber {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            };
            let result = File::new(path, code.as_str()).overwrite(overwrite).write()?;
            Some((path.clone(), result))
        }
        None => None,
    };

    Ok(RenderReport {
        blocks: rendered,
        code,
        written,
    })
}

/// Write generated code to `out` and flush it.
///
/// A closed pipe (e.g. `stanza render | head`) is not an error; every other
/// write failure is returned.
pub fn write_code(out: &mut impl Write, code: &str) -> io::Result<()> {
    match out.write_all(code.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use stanza_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    const MANIFEST: &str = r#"
        [settings]
        dialect = "java"

        [blocks.declare]
        nodes = [{ statement = "int x = 1" }, { statement = "int y = 2" }]

        [blocks.empty]

        [blocks.check]
        nodes = [{ scope = "if (x > y) {", close = "}", nodes = [{ statement = "swap()" }] }]
    "#;

    fn manifest() -> Manifest {
        MANIFEST.parse().unwrap()
    }

    #[test]
    fn test_render_all_blocks_in_file_order() {
        let report = render(&manifest(), &RenderOptions::default()).unwrap();
        assert_eq!(
            report.code,
            "int x = 1;\nint y = 2;\n\nif (x > y) {\n    swap();\n}\n"
        );
        let names: Vec<&str> = report.blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["declare", "empty", "check"]);
        assert!(report.written.is_none());
    }

    #[test]
    fn test_render_selected_blocks() {
        let options = RenderOptions {
            blocks: vec!["check".into(), "declare".into()],
            indent: Some(1),
            ..Default::default()
        };
        let report = render(&manifest(), &options).unwrap();
        assert_eq!(
            report.code,
            "    if (x > y) {\n        swap();\n    }\n\n    int x = 1;\n    int y = 2;\n"
        );
    }

    #[test]
    fn test_unknown_block() {
        let options = RenderOptions {
            blocks: vec!["nope".into()],
            ..Default::default()
        };
        let err = render(&manifest(), &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown block 'nope' (available: declare, empty, check)"
        );
    }

    #[test]
    fn test_unknown_blocks_are_reported_together() {
        let options = RenderOptions {
            blocks: vec!["declare".into(), "nope".into(), "gone".into()],
            ..Default::default()
        };
        let err = render(&manifest(), &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown blocks 'nope', 'gone' (available: declare, empty, check)"
        );
    }

    #[test]
    fn test_render_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("Trace.java");
        let options = RenderOptions {
            blocks: vec!["declare".into()],
            output: Some(path.clone()),
            ..Default::default()
        };

        let report = render(&manifest(), &options).unwrap();

        assert_eq!(report.written, Some((path.clone(), WriteResult::Written)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "int x = 1;\nint y = 2;\n");
    }

    #[test]
    fn test_no_clobber_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Trace.java");
        fs::write(&path, "// hand written\n").unwrap();
        let options = RenderOptions {
            output: Some(path.clone()),
            no_clobber: true,
            ..Default::default()
        };

        let report = render(&manifest(), &options).unwrap();

        assert_eq!(report.written, Some((path.clone(), WriteResult::Skipped)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "// hand written\n");
    }

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_code() {
        let mut out = Vec::new();
        write_code(&mut out, "int x = 1;\n").unwrap();
        assert_eq!(out, b"int x = 1;\n");
    }

    #[test]
    fn test_write_code_reports_write_failure() {
        let err = write_code(&mut FailingWriter(io::ErrorKind::StorageFull), "x;\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }

    #[test]
    fn test_write_code_ignores_broken_pipe() {
        write_code(&mut FailingWriter(io::ErrorKind::BrokenPipe), "x;\n").unwrap();
    }
}
