//! TreeRenderer - depth-first, single-pass rendering of a directory tree
//!
//! Each directory is classified, listed at most once, emitted as one line,
//! and then expanded according to the depth limit and fold policy. Nothing
//! about a node outlives the call that rendered it; memory use is O(depth).

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::classify::Classification;
use crate::error::{Result, TreeError};
use crate::summary::{FileSummary, Subdir, summarize};

use super::config::RenderConfig;
use super::fold::{FoldNotice, Layout};

/// What is printed after a directory's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeMeta {
    /// Stop directory with its label; never expanded
    Stopped(String),
    /// Directory could not be listed; never expanded
    Denied,
    /// File-type histogram of the directory's own files
    Files(FileSummary),
    /// No files and no subdirectories
    Empty,
    /// Subdirectories only; they speak for themselves
    Bare,
}

impl NodeMeta {
    pub fn halts_recursion(&self) -> bool {
        matches!(self, NodeMeta::Stopped(_) | NodeMeta::Denied)
    }
}

/// One directory line, handed to a `TreeOutput`.
#[derive(Debug)]
pub struct NodeLine<'a> {
    pub name: &'a str,
    /// Indentation inherited from ancestors
    pub prefix: &'a str,
    pub is_last: bool,
    pub is_root: bool,
    pub meta: &'a NodeMeta,
}

/// Sink for rendered lines, called in pre-order.
pub trait TreeOutput {
    fn node(&mut self, line: &NodeLine<'_>) -> io::Result<()>;

    /// A fold notice, drawn as a non-last sibling under `prefix`.
    fn folded(&mut self, prefix: &str, notice: &FoldNotice) -> io::Result<()>;
}

/// Per-call recursion state. Children get a fresh value.
#[derive(Debug, Clone, Copy)]
struct RenderState<'p> {
    prefix: &'p str,
    is_last: bool,
    depth: usize,
}

impl RenderState<'_> {
    fn child_prefix(&self) -> String {
        if self.is_last {
            format!("{}    ", self.prefix)
        } else {
            format!("{}│   ", self.prefix)
        }
    }

    fn child<'c>(&self, prefix: &'c str, is_last: bool) -> RenderState<'c> {
        RenderState {
            prefix,
            is_last,
            depth: self.depth + 1,
        }
    }
}

/// Renders a directory tree to a `TreeOutput`.
///
/// Diagnostics (unlistable directories, folds, interrupts) are `tracing`
/// events at debug/trace level. The library never installs a subscriber;
/// embedders that want them install their own.
pub struct TreeRenderer<'a> {
    config: &'a RenderConfig,
    interrupt: Option<&'a AtomicBool>,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            interrupt: None,
        }
    }

    /// Abort the walk with `TreeError::Interrupted` once `flag` is set.
    pub fn with_interrupt(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Render the tree rooted at `root`.
    ///
    /// The root is shown as given. A missing root or a root that is not a
    /// directory fails before anything is written.
    pub fn render<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<()> {
        if !root.exists() {
            return Err(TreeError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let name = root.display().to_string();
        let state = RenderState {
            prefix: "",
            is_last: true,
            depth: 0,
        };
        self.render_node(root, &name, state, output)
    }

    fn check_interrupt(&self) -> Result<()> {
        match self.interrupt {
            Some(flag) if flag.load(Ordering::SeqCst) => {
                debug!("interrupt observed, stopping walk");
                Err(TreeError::Interrupted)
            }
            _ => Ok(()),
        }
    }

    /// Classify, then list unless stopped. Returns the line metadata and
    /// the subdirectories eligible for expansion.
    fn analyze(&self, path: &Path) -> (NodeMeta, Vec<Subdir>) {
        if let Classification::Stop(label) = self.config.rules.classify(path) {
            trace!(path = %path.display(), %label, "stop directory");
            return (NodeMeta::Stopped(label), Vec::new());
        }

        match summarize(path, self.config.show_hidden) {
            Ok(summary) if summary.is_empty() => (NodeMeta::Empty, Vec::new()),
            Ok(summary) if summary.files.is_empty() => (NodeMeta::Bare, summary.subdirs),
            Ok(summary) => (NodeMeta::Files(summary.files), summary.subdirs),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot list directory");
                (NodeMeta::Denied, Vec::new())
            }
        }
    }

    fn render_node<O: TreeOutput>(
        &self,
        path: &Path,
        name: &str,
        state: RenderState<'_>,
        output: &mut O,
    ) -> Result<()> {
        self.check_interrupt()?;

        let (meta, subdirs) = self.analyze(path);
        output.node(&NodeLine {
            name,
            prefix: state.prefix,
            is_last: state.is_last,
            is_root: state.depth == 0,
            meta: &meta,
        })?;

        if meta.halts_recursion() || state.depth >= self.config.max_depth {
            return Ok(());
        }

        let child_prefix = state.child_prefix();
        let child = |is_last| state.child(&child_prefix, is_last);

        match Layout::plan(&subdirs, self.config.fold_threshold) {
            Layout::Full(all) => {
                for (i, subdir) in all.iter().enumerate() {
                    let is_last = i + 1 == all.len();
                    self.render_node(&subdir.path, &subdir.name, child(is_last), output)?;
                }
            }
            Layout::Folded { head, hidden, tail } => {
                for subdir in head {
                    self.render_node(&subdir.path, &subdir.name, child(false), output)?;
                }

                let notice = FoldNotice::new(hidden);
                debug!(path = %path.display(), hidden = notice.hidden, "folded subdirectories");
                self.check_interrupt()?;
                output.folded(&child_prefix, &notice)?;

                for (i, subdir) in tail.iter().enumerate() {
                    let is_last = i + 1 == tail.len();
                    self.render_node(&subdir.path, &subdir.name, child(is_last), output)?;
                }
            }
        }

        Ok(())
    }
}
