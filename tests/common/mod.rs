//! Shared test utilities and fixtures for dirtree tests.

#![allow(dead_code)]

use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::PathBuf;

/// Create an empty file inside the fixture directory.
pub fn create_file(dir: &TempDir, name: &str) -> PathBuf {
    let file = dir.child(name);
    file.touch().unwrap();
    file.to_path_buf()
}

/// Create a subdirectory (including intermediate components).
pub fn create_dir(dir: &TempDir, name: &str) -> PathBuf {
    let sub = dir.child(name);
    sub.create_dir_all().unwrap();
    sub.to_path_buf()
}

/// Create a small sample layout:
///
/// ```text
/// <root>/
/// ├── a.txt
/// ├── b.txt
/// └── sub
///     └── c.txt
/// ```
pub fn create_sample_tree(dir: &TempDir) {
    create_file(dir, "a.txt");
    create_file(dir, "b.txt");
    create_dir(dir, "sub");
    create_file(dir, "sub/c.txt");
}

/// The rendered body of [`create_sample_tree`], without the root header.
pub const SAMPLE_TREE_BODY: &str = "├── a.txt\n├── b.txt\n└── sub\n    └── c.txt";

/// Create a symlink named `name` pointing at `target`.
#[cfg(unix)]
pub fn create_symlink(dir: &TempDir, name: &str, target: &std::path::Path) -> PathBuf {
    let link = dir.child(name);
    std::os::unix::fs::symlink(target, link.path()).unwrap();
    link.to_path_buf()
}
