//! Error kinds for lookup, download and verification.
//!
//! Callers branch on the variant: a checksum mismatch is worth a fresh
//! download, an unsupported algorithm is not.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Requested version name is absent from the catalog.
    #[error("version not found")]
    VersionNotFound,

    /// No package in the version matches the requested kind/os/arch.
    #[error("installation package not found")]
    PackageNotFound,

    /// The package declares a digest algorithm outside the supported set.
    #[error("unsupported checksum algorithm: {0:?}")]
    UnsupportedChecksumAlgorithm(String),

    /// Digest of the file on disk differs from the catalog value.
    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// Filesystem failure (open, read, write).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Curl reported an error (timeout, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),

    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Release feed could not be decoded.
    #[error("catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Mirror or feed URL is malformed.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// True when the downloaded bytes cannot be trusted for installation.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            Error::ChecksumMismatch { .. } | Error::UnsupportedChecksumAlgorithm(_)
        )
    }

    /// True when fetching the package again may fix the failure.
    pub fn should_redownload(&self) -> bool {
        matches!(
            self,
            Error::ChecksumMismatch { .. } | Error::Curl(_) | Error::Http { .. }
        )
    }
}
