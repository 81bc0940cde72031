use crate::core::types::{Line, Tree};
use crate::error::{DirtreeError, Result};
use log::{debug, trace};
use std::fs;
use std::path::Path;

/// Walk a directory tree, producing one structural line per entry in
/// depth-first pre-order.
///
/// Entries are sorted by file name so the output is deterministic; raw
/// filesystem listing order is not guaranteed to be stable. Symbolic links
/// are never followed: a symlink shows up as a leaf entry even when it
/// points at a directory, so the walk always terminates.
///
/// # Errors
///
/// Returns an error if:
/// - The root does not exist or is not a directory
/// - Any directory listing or entry stat fails along the way; the whole
///   walk aborts and no partial tree is returned
pub fn walk(root: &Path) -> Result<Tree> {
    debug!("walk called for: {}", root.display());

    match root.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(DirtreeError::NotFound {
                path: root.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(DirtreeError::Io {
                context: format!("Failed to check if {} exists", root.display()),
                source: e,
            });
        }
    }

    if !root.is_dir() {
        return Err(DirtreeError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let lines = walk_dir(root, &[])?;
    debug!("walk complete: {} line(s)", lines.len());

    Ok(Tree {
        root: path_clean::clean(root),
        lines,
    })
}

fn walk_dir(dir: &Path, ancestors: &[bool]) -> Result<Vec<Line>> {
    let entries = list_sorted(dir)?;
    let count = entries.len();
    trace!("Listing {}: {} entries", dir.display(), count);

    let mut lines = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let is_last = idx == count - 1;

        // DirEntry::file_type does not traverse symlinks, so a symlinked
        // directory is reported as a non-directory and stays a leaf.
        let file_type = entry.file_type().map_err(|e| DirtreeError::Io {
            context: format!("Failed to stat {}", entry.path().display()),
            source: e,
        })?;
        let is_dir = file_type.is_dir();

        let name = entry.file_name().to_string_lossy().into_owned();
        trace!("Entry: {} (dir: {}, last: {})", name, is_dir, is_last);

        lines.push(Line {
            name,
            is_dir,
            is_last,
            ancestors: ancestors.to_vec(),
        });

        if is_dir {
            let mut child_ancestors = ancestors.to_vec();
            child_ancestors.push(is_last);
            lines.extend(walk_dir(&entry.path(), &child_ancestors)?);
        }
    }

    Ok(lines)
}

fn list_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let reader = fs::read_dir(dir).map_err(|e| DirtreeError::Io {
        context: format!("Failed to read directory {}", dir.display()),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|e| DirtreeError::Io {
            context: format!("Failed to list directory {}", dir.display()),
            source: e,
        })?;
        entries.push(entry);
    }

    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
