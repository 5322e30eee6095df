//! SHA-1 content checksums
//!
//! Digests are returned as 40-character lowercase hex strings. SHA-1 is used
//! for content fingerprinting here, not for anything security-sensitive.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

/// Hex SHA-1 digest of in-memory bytes.
pub fn checksum(data: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data.as_ref());
    hex::encode(hasher.finalize())
}

/// Hex SHA-1 digest of a file, streamed in fixed-size chunks.
///
/// The file is never loaded whole; memory use is one buffer regardless of
/// file size.
pub fn checksum_of_file(path: impl AsRef<Path>) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha1::new();
    let mut buffer = [0u8; 8192];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
