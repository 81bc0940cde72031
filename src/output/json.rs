//! JSON output formatting for directory trees.

use crate::core::types::{Line, Tree};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON representation of a walked tree
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonTree {
    pub root: String,
    pub entries: Vec<JsonEntry>,
}

/// JSON representation of a single tree entry
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEntry {
    pub name: String,
    pub kind: String,
    pub depth: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub is_last: bool,
}

impl JsonTree {
    /// Convert a `Tree` to JSON-serializable format
    pub fn from_tree(tree: &Tree) -> Self {
        Self {
            root: format_path(&tree.root),
            entries: tree.lines.iter().map(JsonEntry::from_line).collect(),
        }
    }
}

impl JsonEntry {
    fn from_line(line: &Line) -> Self {
        let kind = if line.is_dir { "directory" } else { "file" };
        Self {
            name: line.name.clone(),
            kind: kind.to_string(),
            depth: line.depth(),
            is_last: line.is_last,
        }
    }
}

/// Format a path consistently with the tree formatter
fn format_path(path: &Path) -> String {
    path_clean::clean(path).to_str().map_or_else(
        || "<invalid UTF-8>".to_string(),
        std::string::ToString::to_string,
    )
}

/// Render a tree as a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_string(tree: &Tree) -> Result<String> {
    let json_tree = JsonTree::from_tree(tree);
    Ok(serde_json::to_string_pretty(&json_tree)?)
}
