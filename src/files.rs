//! Whole-file and line-oriented helpers
//!
//! Thin wrappers over `std::fs`: each function opens, does one thing, and
//! closes on every exit path. Nothing here retries or caches.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::string_utils::parse_delimited_line;

/// Check whether a path exists (file, directory, or anything else).
///
/// Any stat failure, including permission errors, reads as "does not exist".
pub fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Read a whole file as UTF-8 text.
pub fn read_utf8(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Write a whole file from UTF-8 text, truncating any existing content.
pub fn write_utf8(path: impl AsRef<Path>, content: impl AsRef<str>) -> io::Result<()> {
    fs::write(path, content.as_ref())
}

/// Write a file, creating any missing parent directories first.
pub fn put_file(path: impl AsRef<Path>, content: impl AsRef<str>) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content.as_ref())
}

/// Create a directory and all missing parents. Existing directories are fine.
pub fn mkdirp(path: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Read and deserialize a JSON file.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Serialize a value to a JSON file. `pretty` selects indented output.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T, pretty: bool) -> Result<()> {
    let content = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    fs::write(path, content)?;
    Ok(())
}

/// Read a file as a list of lines, tolerating both `\n` and `\r\n` endings.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}

/// Read the lines of a file that satisfy a predicate.
pub fn read_matching_lines(
    path: impl AsRef<Path>,
    mut keep: impl FnMut(&str) -> bool,
) -> io::Result<Vec<String>> {
    let mut lines = read_lines(path)?;
    lines.retain(|line| keep(line));
    Ok(lines)
}

/// Read the non-empty lines of a file.
pub fn read_non_empty_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    read_matching_lines(path, |line| !line.is_empty())
}

/// Read a delimited file as rows of fields.
///
/// Empty lines are dropped before anything else, then the first `skip`
/// remaining rows (usually a header) are discarded. Each row is split with
/// [`parse_delimited_line`], so a delimiter inside a quoted field does not
/// split it.
pub fn read_csv(
    path: impl AsRef<Path>,
    skip: usize,
    delimiter: char,
    quote: char,
) -> io::Result<Vec<Vec<String>>> {
    let lines = read_non_empty_lines(path)?;
    Ok(lines
        .iter()
        .skip(skip)
        .map(|line| parse_delimited_line(line, delimiter, quote))
        .collect())
}
