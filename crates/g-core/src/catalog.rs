//! Release catalog built from the official JSON download feed.
//!
//! The feed (`https://go.dev/dl/?mode=json&include=all`) lists releases
//! newest first, each with its files:
//!
//! ```json
//! [{"version": "go1.21.0", "stable": true, "files": [
//!     {"filename": "go1.21.0.linux-amd64.tar.gz", "os": "linux", "arch": "amd64",
//!      "version": "go1.21.0", "sha256": "d0398903...", "size": 66613003, "kind": "archive"}]}]
//! ```

use crate::checksum::ChecksumAlgorithm;
use crate::config::GConfig;
use crate::error::Result;
use crate::package::{Package, PackageKind};
use crate::progress::format_size;
use crate::transport::CurlTransport;
use crate::version::Version;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct FeedRelease {
    version: String,
    #[serde(default)]
    stable: bool,
    #[serde(default)]
    files: Vec<FeedFile>,
}

#[derive(Debug, Deserialize)]
struct FeedFile {
    filename: String,
    #[serde(default)]
    os: String,
    #[serde(default)]
    arch: String,
    #[serde(default)]
    sha256: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    kind: String,
}

/// A catalog release together with its stability flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub version: Version,
    pub stable: bool,
}

/// Decode the feed into releases, resolving download URLs against `mirror`.
pub fn parse_releases(json: &[u8], mirror: &str) -> Result<Vec<Release>> {
    let feed: Vec<FeedRelease> = serde_json::from_slice(json)?;
    let base = mirror_base(mirror)?;
    feed.into_iter()
        .map(|r| -> Result<Release> {
            let name = r.version.strip_prefix("go").unwrap_or(&r.version);
            let packages = r
                .files
                .into_iter()
                .map(|f| to_package(&base, f))
                .collect::<Result<Vec<_>>>()?;
            Ok(Release {
                version: Version::with_packages(name, packages),
                stable: r.stable,
            })
        })
        .collect()
}

/// Decode the feed into versions, in feed order.
pub fn parse_catalog(json: &[u8], mirror: &str) -> Result<Vec<Version>> {
    Ok(parse_releases(json, mirror)?
        .into_iter()
        .map(|r| r.version)
        .collect())
}

/// Fetch and decode the feed named by `cfg.catalog_url`.
pub fn fetch_releases(cfg: &GConfig) -> Result<Vec<Release>> {
    tracing::debug!(url = %cfg.catalog_url, "fetching release catalog");
    let body = CurlTransport::from_config(cfg).get(&cfg.catalog_url)?;
    let releases = parse_releases(&body, &cfg.mirror)?;
    tracing::debug!(count = releases.len(), "release catalog loaded");
    Ok(releases)
}

pub fn fetch_catalog(cfg: &GConfig) -> Result<Vec<Version>> {
    Ok(fetch_releases(cfg)?.into_iter().map(|r| r.version).collect())
}

fn mirror_base(mirror: &str) -> Result<Url> {
    // Url::join replaces the last path segment unless the base ends in '/'.
    if mirror.ends_with('/') {
        Ok(Url::parse(mirror)?)
    } else {
        Ok(Url::parse(&format!("{mirror}/"))?)
    }
}

fn to_package(base: &Url, f: FeedFile) -> Result<Package> {
    let url = base.join(&f.filename)?.to_string();
    let kind = f
        .kind
        .parse::<PackageKind>()
        .map(|k| k.as_str().to_string())
        .unwrap_or(f.kind);
    Ok(Package {
        url,
        kind,
        os: f.os,
        arch: f.arch,
        size: format_size(f.size),
        checksum: f.sha256,
        algorithm: ChecksumAlgorithm::SHA256.to_string(),
        file_name: f.filename,
    })
}
