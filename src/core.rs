//! Tree construction: data model and the recursive directory walker.

pub mod types;
pub mod walker;
