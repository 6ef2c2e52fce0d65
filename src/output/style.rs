//! Colour roles for tree output
//!
//! Text content never depends on the role; a role only selects the
//! escape sequences a colour-capable writer wraps around the text.

use termcolor::{Color, ColorSpec};

/// Semantic role of a piece of text on a tree line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Name of a directory that is expanded
    Directory,
    /// Name of a stopped or unreadable directory
    StoppedDirectory,
    /// Label of a stop directory
    StopLabel,
    /// File-type histogram
    FileSummary,
    /// `Empty` and `Permission Denied` markers
    Warning,
    /// Fold notice (dim gray)
    Folded,
}

impl Role {
    /// Get the color for this role.
    pub fn color(&self) -> Color {
        match self {
            Role::Directory => Color::Blue,
            Role::StoppedDirectory => Color::Yellow,
            Role::StopLabel => Color::Magenta,
            Role::FileSummary => Color::Green,
            Role::Warning => Color::Red,
            Role::Folded => Color::Black,
        }
    }

    /// Whether this role should use intense/bright colors.
    pub fn is_intense(&self) -> bool {
        !matches!(self, Role::Directory)
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Role::Directory)
    }

    pub fn spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(self.color()))
            .set_intense(self.is_intense())
            .set_bold(self.is_bold());
        spec
    }
}
