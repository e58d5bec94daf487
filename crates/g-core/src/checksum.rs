//! File digests and checksum verification (SHA-256, SHA-1).
//!
//! Files are streamed through the hasher in fixed-size chunks, so memory use
//! does not depend on the artifact size.

use crate::error::{Error, Result};
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

const BUF_SIZE: usize = 64 * 1024;

/// Digest algorithms a package may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecksumAlgorithm {
    Sha256,
    Sha1,
}

impl ChecksumAlgorithm {
    /// Catalog spelling of SHA-256.
    pub const SHA256: &'static str = "SHA256";
    /// Catalog spelling of SHA-1.
    pub const SHA1: &'static str = "SHA1";

    /// Map a catalog algorithm name to an algorithm. Names are matched exactly.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            Self::SHA256 => Ok(ChecksumAlgorithm::Sha256),
            Self::SHA1 => Ok(ChecksumAlgorithm::Sha1),
            other => Err(Error::UnsupportedChecksumAlgorithm(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Sha256 => Self::SHA256,
            ChecksumAlgorithm::Sha1 => Self::SHA1,
        }
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the digest of a file and return it as lowercase hex.
pub fn digest_path(algorithm: ChecksumAlgorithm, path: &Path) -> Result<String> {
    match algorithm {
        ChecksumAlgorithm::Sha256 => hash_file::<Sha256>(path),
        ChecksumAlgorithm::Sha1 => hash_file::<Sha1>(path),
    }
}

/// Check that the digest of `path` equals `expected_hex`.
///
/// Hex case is ignored; otherwise the comparison is exact.
pub fn verify_file(algorithm: ChecksumAlgorithm, expected_hex: &str, path: &Path) -> Result<()> {
    let actual = digest_path(algorithm, path)?;
    if actual.eq_ignore_ascii_case(expected_hex.trim()) {
        Ok(())
    } else {
        Err(Error::ChecksumMismatch {
            expected: expected_hex.to_string(),
            actual,
        })
    }
}

fn hash_file<D: Digest>(path: &Path) -> Result<String> {
    let mut f = File::open(path)?;
    let mut hasher = D::new();
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
