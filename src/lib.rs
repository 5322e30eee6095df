//! Pantry - everyday filesystem, process, checksum, and logging helpers

pub mod checksum;
pub mod error;
pub mod exec;
pub mod files;
pub mod logger;
pub mod string_utils;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use checksum::{checksum, checksum_of_file};
pub use error::{Error, Result};
pub use exec::{ExecOutput, exec, exec_unchecked, run_process};
pub use logger::{FileSink, Level, Logger};
pub use walk::{
    WalkTree, dir_size, dir_size_parallel, file_size, format_size, list_all_files,
    strip_leading_dir, walk_tree,
};
