//! Tree formatting and display
//!
//! The renderer decides *what* each line says; this module decides how it
//! looks. Colour is applied only through `Role` and a `termcolor` writer,
//! so plain output is the coloured output with escapes removed.
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `style` - Colour roles
//! - `streaming` - Line formatter for console or in-memory output

mod config;
mod streaming;
mod style;

use std::path::Path;

use crate::error::Result;
use crate::tree::{RenderConfig, TreeRenderer};

pub use config::OutputConfig;
pub use streaming::TreeFormatter;
pub use style::Role;

/// Render `root` to plain text.
pub fn render_to_string(root: &Path, config: &RenderConfig) -> Result<String> {
    let mut formatter = TreeFormatter::buffer();
    TreeRenderer::new(config).render(root, &mut formatter)?;
    Ok(formatter.into_string())
}
