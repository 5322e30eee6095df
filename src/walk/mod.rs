//! Recursive directory traversal
//!
//! This module provides the file-walking core and the operations built on it:
//!
//! - `walk_tree`: lazy depth-first iterator over every regular file
//! - `list_all_files`: materialized listing with optional prefix stripping
//! - `dir_size` / `dir_size_parallel`: total byte count of a tree

mod size;
mod strip;
mod walker;

// Re-export public types
pub use size::{dir_size, dir_size_parallel, file_size, format_size};
pub use strip::strip_leading_dir;
pub use walker::{WalkTree, list_all_files, walk_tree};
