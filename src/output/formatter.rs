use crate::core::types::Tree;
use crate::output::styles::TreeChars;
use std::path::Path;

/// Render a tree as box-drawing text: the root header line followed by one
/// glyph-prefixed line per entry, joined by newlines. An empty directory
/// renders as just the header.
pub fn render(tree: &Tree) -> String {
    let chars = TreeChars::default();
    let mut out = format_root(&tree.root);

    for line in &tree.lines {
        out.push('\n');
        for ancestor_was_last in &line.ancestors {
            out.push_str(if *ancestor_was_last {
                chars.blank
            } else {
                chars.pipe
            });
        }
        out.push_str(if line.is_last { chars.last } else { chars.branch });
        out.push_str(&line.name);
    }

    out
}

fn format_root(root: &Path) -> String {
    let display = path_clean::clean(root).to_str().map_or_else(
        || "<invalid UTF-8>".to_string(),
        std::string::ToString::to_string,
    );
    format!("{display}/")
}
