//! Smarttree - a directory tree that stops at environments and folds the noise

pub mod classify;
pub mod error;
pub mod output;
pub mod string_utils;
pub mod summary;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classify::{Classification, StopRules};
pub use error::TreeError;
pub use output::{OutputConfig, TreeFormatter, render_to_string};
pub use summary::{DirSummary, FileSummary, summarize};
pub use tree::{RenderConfig, TreeOutput, TreeRenderer};
