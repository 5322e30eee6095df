//! WalkTree - lazy depth-first iterator over regular files

use std::fs::{self, ReadDir};
use std::io;
use std::path::{Path, PathBuf};

use super::strip::strip_leading_dir;

/// Lazy iterator over every regular file under a root directory.
///
/// Yields files depth-first: each subdirectory is fully drained before its
/// next sibling is visited. Within one level, entries come back in whatever
/// order the filesystem enumerates them - not sorted, and not guaranteed
/// stable across runs.
///
/// Uses O(depth) memory: one open directory handle per level, held on an
/// explicit stack and closed as each level is exhausted. Dropping the
/// iterator early closes every handle still open.
///
/// Entries that are neither regular files nor directories (symlinks,
/// sockets, devices) are skipped silently. Errors - root missing, a
/// directory that cannot be opened, an entry that cannot be read - are
/// yielded in place and never retried; files already yielded stay valid.
pub struct WalkTree {
    root: Option<PathBuf>,
    stack: Vec<ReadDir>,
}

/// Walk every regular file under `root`, lazily.
///
/// The root directory is not opened until the first call to `next`, so a
/// nonexistent root surfaces as the first yielded item rather than a panic
/// or an eager error.
pub fn walk_tree(root: impl Into<PathBuf>) -> WalkTree {
    WalkTree {
        root: Some(root.into()),
        stack: Vec::new(),
    }
}

impl Iterator for WalkTree {
    type Item = io::Result<PathBuf>;

    fn next(&mut self) -> Option<io::Result<PathBuf>> {
        if let Some(root) = self.root.take() {
            match fs::read_dir(&root) {
                Ok(entries) => self.stack.push(entries),
                Err(e) => return Some(Err(e)),
            }
        }

        loop {
            let next = self.stack.last_mut()?.next();
            let entry = match next {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => return Some(Err(e)),
                None => {
                    // Level drained; handle closes here
                    self.stack.pop();
                    continue;
                }
            };

            // file_type does not follow symlinks, so a symlinked directory
            // counts as "other" and is skipped rather than descended into
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => return Some(Err(e)),
            };

            if file_type.is_dir() {
                match fs::read_dir(entry.path()) {
                    Ok(sub) => self.stack.push(sub),
                    Err(e) => return Some(Err(e)),
                }
            } else if file_type.is_file() {
                return Some(Ok(entry.path()));
            }
        }
    }
}

/// Collect every regular file under `root` into a list, in discovery order.
///
/// When `strip` is given, a leading directory prefix is removed from each
/// result (see [`strip_leading_dir`]). Any traversal error aborts the whole
/// listing.
pub fn list_all_files(root: impl AsRef<Path>, strip: Option<&str>) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walk_tree(root.as_ref()) {
        let path = entry?;
        files.push(match strip {
            Some(dir) => strip_leading_dir(&path, dir),
            None => path,
        });
    }
    Ok(files)
}
