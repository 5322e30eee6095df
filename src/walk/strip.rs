//! Leading-directory prefix stripping for listed paths

use std::path::{Path, PathBuf};

/// Remove a leading directory prefix from a path.
///
/// The prefix is normalized before comparison: a leading `./` and a trailing
/// `/` are both ignored, so `"./project/"`, `"project/"`, and `"project"`
/// all mean the same thing.
///
/// Stripping is path-aware: the prefix must match whole leading path
/// components, compared component by component. A path that merely contains
/// the prefix text somewhere inside a segment is returned unchanged, as is a
/// path that does not start with the prefix at all.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use pantry::walk::strip_leading_dir;
///
/// let p = Path::new("project/src/a.txt");
/// assert_eq!(strip_leading_dir(p, "project"), PathBuf::from("src/a.txt"));
/// assert_eq!(strip_leading_dir(p, "./project/"), PathBuf::from("src/a.txt"));
/// assert_eq!(strip_leading_dir(p, "other"), PathBuf::from("project/src/a.txt"));
/// ```
pub fn strip_leading_dir(path: &Path, dir: &str) -> PathBuf {
    let dir = dir.strip_prefix("./").unwrap_or(dir);
    let dir = dir.strip_suffix('/').unwrap_or(dir);
    match path.strip_prefix(dir) {
        Ok(rest) => rest.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
