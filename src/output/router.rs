//! Routing of rendered text to its destination.

use crate::error::{DirtreeError, Result};
use log::{debug, trace};
use std::fs;
use std::path::PathBuf;

/// Where the rendered text should go. Selected by the command layer; the
/// router never inspects the process's standard streams itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output is an interactive terminal.
    Terminal,
    /// An explicit file target.
    File(PathBuf),
    /// Standard output is redirected but no file target is known
    /// (e.g. piped into another process).
    Unknown,
}

/// What the router actually did with the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Printed,
    Written(PathBuf),
    Skipped,
}

/// Deliver rendered text to its destination.
///
/// A `File` destination gets any missing parent directories created first
/// (a no-op if they already exist) and the file's previous contents are
/// overwritten. An `Unknown` destination performs no write at all and
/// reports `Skipped` so the caller can surface it.
///
/// # Errors
///
/// Returns an error if parent directory creation or the file write fails.
pub fn route(text: &str, destination: &Destination) -> Result<RouteOutcome> {
    match destination {
        Destination::Terminal => {
            println!("{text}");
            Ok(RouteOutcome::Printed)
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    trace!("Ensuring parent directory exists: {}", parent.display());
                    fs::create_dir_all(parent).map_err(|e| DirtreeError::Io {
                        context: format!("Failed to create directory {}", parent.display()),
                        source: e,
                    })?;
                }
            }

            debug!("Writing output to {}", path.display());
            fs::write(path, text).map_err(|e| DirtreeError::Io {
                context: format!("Failed to write {}", path.display()),
                source: e,
            })?;
            Ok(RouteOutcome::Written(path.clone()))
        }
        Destination::Unknown => {
            debug!("Output destination unknown, nothing written");
            Ok(RouteOutcome::Skipped)
        }
    }
}
