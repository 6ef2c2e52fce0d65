//! Error type for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole render.
///
/// Failures local to a single directory (unreadable, vanished mid-walk,
/// symlink loops) are not errors: the node is rendered as denied and the
/// walk continues with its siblings.
#[derive(Error, Debug)]
pub enum TreeError {
    /// The root path does not exist
    #[error("Path '{}' does not exist.", .0.display())]
    NotFound(PathBuf),

    /// The root path exists but is not a directory
    #[error("Path '{}' is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    /// The walk was cancelled by the user
    #[error("Aborted.")]
    Interrupted,

    /// Writing output failed
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TreeError>;
