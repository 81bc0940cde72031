//! Output rendering and routing for directory trees.

pub mod formatter;
pub mod json;
pub mod router;
pub mod styles;

/// Output format for tree display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable box-drawing tree (default)
    #[default]
    Tree,
    /// Machine-readable JSON format
    Json,
}
