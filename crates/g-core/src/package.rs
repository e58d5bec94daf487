//! One downloadable artifact of a release.

use crate::checksum::{self, ChecksumAlgorithm};
use crate::error::{Error, Result};
use crate::progress::{self, ProgressStats};
use crate::transport::{CurlTransport, Transport};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Artifact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    Source,
    Archive,
    Installer,
}

impl PackageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Source => "Source",
            PackageKind::Archive => "Archive",
            PackageKind::Installer => "Installer",
        }
    }
}

impl FromStr for PackageKind {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        [
            PackageKind::Source,
            PackageKind::Archive,
            PackageKind::Installer,
        ]
        .into_iter()
        .find(|k| k.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown package kind: {s}"))
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package as listed by the catalog. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    pub file_name: String,
    pub url: String,
    /// "Source", "Archive" or "Installer"; compared case-insensitively.
    pub kind: String,
    pub os: String,
    pub arch: String,
    /// Display only.
    pub size: String,
    pub checksum: String,
    /// "SHA256" or "SHA1".
    pub algorithm: String,
}

impl Package {
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }

    /// Download to `destination` with the default curl transport, drawing
    /// progress on stderr.
    pub fn download_with_progress(&self, destination: &Path) -> Result<u64> {
        self.download_with(
            &CurlTransport::default(),
            destination,
            &mut progress::report_to_stderr,
        )
    }

    /// Download through `transport`. Errors are returned as the transport
    /// produced them.
    pub fn download_with(
        &self,
        transport: &dyn Transport,
        destination: &Path,
        progress: &mut dyn FnMut(&ProgressStats),
    ) -> Result<u64> {
        tracing::info!(url = %self.url, dest = %destination.display(), "downloading {}", self.file_name);
        transport.download(&self.url, destination, progress)
    }

    /// Verify `path` against this package's checksum.
    ///
    /// An unsupported algorithm fails before the file is opened.
    pub fn verify_checksum(&self, path: &Path) -> Result<()> {
        let algorithm = ChecksumAlgorithm::from_name(&self.algorithm)?;
        checksum::verify_file(algorithm, &self.checksum, path)
    }
}

/// Where one download-and-install attempt stands.
///
/// `Pending → Downloaded → {Verified | ChecksumFailed | UnsupportedAlgorithm}`.
/// Retrying means starting a new attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptState {
    Pending,
    Downloaded,
    Verified,
    ChecksumFailed,
    UnsupportedAlgorithm,
}

impl AttemptState {
    /// State after a download finished with `result`.
    pub fn after_download(result: &Result<u64>) -> Self {
        match result {
            Ok(_) => AttemptState::Downloaded,
            Err(_) => AttemptState::Pending,
        }
    }

    /// State after verifying a downloaded file. I/O failures leave the
    /// attempt at `Downloaded`: verification never completed.
    pub fn after_verification(result: &Result<()>) -> Self {
        match result {
            Ok(()) => AttemptState::Verified,
            Err(Error::ChecksumMismatch { .. }) => AttemptState::ChecksumFailed,
            Err(Error::UnsupportedChecksumAlgorithm(_)) => AttemptState::UnsupportedAlgorithm,
            Err(_) => AttemptState::Downloaded,
        }
    }

    /// Only a verified package may be installed.
    pub fn may_install(self) -> bool {
        self == AttemptState::Verified
    }
}
