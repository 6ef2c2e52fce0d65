//! Configuration types for the tree renderer

use crate::classify::StopRules;

pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_FOLD_THRESHOLD: usize = 12;

/// Configuration for one render.
///
/// Constructed once before the walk and shared read-only by every node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Nodes at this depth are printed but not expanded (root is depth 0)
    pub max_depth: usize,
    /// Subdirectory count above which a node's children are folded
    pub fold_threshold: usize,
    /// Include dot-prefixed files and directories
    pub show_hidden: bool,
    pub rules: StopRules,
}

impl RenderConfig {
    /// Everything is traversed and nothing is folded; depth still applies.
    pub fn show_everything(mut self) -> Self {
        self.rules = StopRules::disabled();
        self.fold_threshold = usize::MAX;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            fold_threshold: DEFAULT_FOLD_THRESHOLD,
            show_hidden: false,
            rules: StopRules::default(),
        }
    }
}
