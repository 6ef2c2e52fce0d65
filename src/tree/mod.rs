//! Directory tree rendering
//!
//! `TreeRenderer` walks the tree depth-first, once, emitting one line per
//! directory to a `TreeOutput`. Stop directories end recursion, wide
//! directories are folded, and `RenderConfig` bounds the depth.

mod config;
mod fold;
mod render;


pub use config::{DEFAULT_FOLD_THRESHOLD, DEFAULT_MAX_DEPTH, RenderConfig};
pub use fold::{FoldNotice, HEAD_COUNT, Layout, TAIL_COUNT};
pub use render::{NodeLine, NodeMeta, TreeOutput, TreeRenderer};
