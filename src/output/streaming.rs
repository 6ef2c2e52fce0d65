//! Streaming output formatter
//!
//! This module provides `TreeFormatter` which writes each tree line as soon
//! as the renderer produces it, for use with `TreeRenderer`.

use std::io::{self, Write};
use termcolor::{ColorChoice, NoColor, StandardStream, WriteColor};

use crate::tree::{FoldNotice, NodeLine, NodeMeta, TreeOutput};

use super::config::OutputConfig;
use super::style::Role;

const DENIED_LABEL: &str = "Permission Denied";
const EMPTY_MARKER: &str = "Empty";

/// Line formatter over any colour-aware writer.
///
/// Colour is decided by the writer: a `NoColor` or `ColorChoice::Never`
/// stream produces plain text byte-for-byte identical to the coloured
/// output with escapes removed.
pub struct TreeFormatter<W: WriteColor> {
    out: W,
}

impl TreeFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl TreeFormatter<NoColor<Vec<u8>>> {
    /// Formatter collecting plain text in memory.
    pub fn buffer() -> Self {
        Self::new(NoColor::new(Vec::new()))
    }

    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.out.into_inner()).into_owned()
    }
}

impl<W: WriteColor> TreeFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&mut self, role: Role, text: &str) -> io::Result<()> {
        self.out.set_color(&role.spec())?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }

    fn write_meta(&mut self, meta: &NodeMeta) -> io::Result<()> {
        match meta {
            NodeMeta::Stopped(label) => {
                write!(self.out, "  [")?;
                self.styled(Role::StopLabel, label)?;
                write!(self.out, "]")
            }
            NodeMeta::Denied => {
                write!(self.out, "  [")?;
                self.styled(Role::Warning, DENIED_LABEL)?;
                write!(self.out, "]")
            }
            NodeMeta::Files(summary) => {
                write!(self.out, " # files: ")?;
                self.styled(Role::FileSummary, &summary.to_string())
            }
            NodeMeta::Empty => {
                write!(self.out, " # ")?;
                self.styled(Role::Warning, EMPTY_MARKER)
            }
            NodeMeta::Bare => Ok(()),
        }
    }
}

impl<W: WriteColor> TreeOutput for TreeFormatter<W> {
    fn node(&mut self, line: &NodeLine<'_>) -> io::Result<()> {
        if !line.is_root {
            let connector = if line.is_last { "└── " } else { "├── " };
            write!(self.out, "{}{}", line.prefix, connector)?;
        }

        let role = if line.meta.halts_recursion() {
            Role::StoppedDirectory
        } else {
            Role::Directory
        };
        self.styled(role, line.name)?;
        self.write_meta(line.meta)?;
        writeln!(self.out)
    }

    fn folded(&mut self, prefix: &str, notice: &FoldNotice) -> io::Result<()> {
        write!(self.out, "{}├── ", prefix)?;
        self.styled(Role::Folded, &notice.to_string())?;
        writeln!(self.out)
    }
}
