use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A fully walked directory tree: the root path plus the ordered display
/// lines for everything below it. The root's own header line is rendered by
/// the output layer, not stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub root: PathBuf,
    pub lines: Vec<Line>,
}

/// One row of output in structural form. Glyph rendering is left to the
/// formatter; the walker only records structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub name: String,
    pub is_dir: bool,
    /// Whether this entry is the last sibling in its directory.
    pub is_last: bool,
    /// One flag per ancestor level, outermost first: `true` when that
    /// ancestor was the last sibling of its own parent. Decides between the
    /// continuation bar and blank indentation at each level.
    pub ancestors: Vec<bool>,
}

impl Tree {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Line {
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }
}
