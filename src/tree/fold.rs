//! Folding of wide directories
//!
//! When a directory has more subdirectories than the fold threshold, only
//! the first `HEAD_COUNT` and last `TAIL_COUNT` are rendered; the middle is
//! replaced by a single notice line.

use std::fmt;

use crate::string_utils::common_prefix;
use crate::summary::Subdir;

pub const HEAD_COUNT: usize = 3;
pub const TAIL_COUNT: usize = 1;

/// Shortest common prefix worth mentioning in a fold notice.
const MIN_PATTERN_LEN: usize = 4;

/// How a node's subdirectories are laid out.
#[derive(Debug, PartialEq, Eq)]
pub enum Layout<'a> {
    /// Every subdirectory is rendered
    Full(&'a [Subdir]),
    /// Head and tail are rendered around a folded middle
    Folded {
        head: &'a [Subdir],
        hidden: &'a [Subdir],
        tail: &'a [Subdir],
    },
}

impl<'a> Layout<'a> {
    /// Fold when the count exceeds `threshold`. Head and tail must not
    /// overlap, so fewer than `HEAD_COUNT + TAIL_COUNT` never folds.
    pub fn plan(subdirs: &'a [Subdir], threshold: usize) -> Self {
        let count = subdirs.len();
        if count <= threshold || count < HEAD_COUNT + TAIL_COUNT {
            return Layout::Full(subdirs);
        }

        let (head, rest) = subdirs.split_at(HEAD_COUNT);
        let (hidden, tail) = rest.split_at(rest.len() - TAIL_COUNT);
        Layout::Folded { head, hidden, tail }
    }
}

/// The synthetic line standing in for folded directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldNotice {
    pub hidden: usize,
    /// Common name prefix of the hidden group, if significant
    pub pattern: Option<String>,
}

impl FoldNotice {
    pub fn new(hidden: &[Subdir]) -> Self {
        let prefix = common_prefix(hidden.iter().map(|s| s.name.as_str()));
        let pattern = (prefix.chars().count() >= MIN_PATTERN_LEN).then_some(prefix);
        Self {
            hidden: hidden.len(),
            pattern,
        }
    }
}

impl fmt::Display for FoldNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "... {} directories hidden", self.hidden)?;
        if let Some(pattern) = &self.pattern {
            write!(f, " (mostly '{}*')", pattern)?;
        }
        Ok(())
    }
}
