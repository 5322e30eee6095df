//! Directory and file size measurement

use std::fs;
use std::io;
use std::path::Path;

use rayon::prelude::*;

use super::walker::{list_all_files, walk_tree};

/// Get the size of a single file in bytes.
pub fn file_size(path: impl AsRef<Path>) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Total byte count of every regular file under `root`.
///
/// Files are stat'd one at a time in discovery order. If any file vanishes
/// between discovery and its stat call, the error propagates and no partial
/// sum is returned.
pub fn dir_size(root: impl AsRef<Path>) -> io::Result<u64> {
    let mut total: u64 = 0;
    for entry in walk_tree(root.as_ref()) {
        total += fs::metadata(entry?)?.len();
    }
    Ok(total)
}

/// Total byte count of every regular file under `root`, with stat calls
/// fanned out across the rayon thread pool.
///
/// The tree is walked sequentially first, then sizes are queried in
/// parallel. The sum is identical to [`dir_size`] (addition commutes); only
/// the order of the underlying stat calls differs. First error aborts.
pub fn dir_size_parallel(root: impl AsRef<Path>) -> io::Result<u64> {
    let files = list_all_files(root.as_ref(), None)?;
    files
        .par_iter()
        .map(|path| fs::metadata(path).map(|m| m.len()))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
