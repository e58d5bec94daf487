//! `g download <version>` – fetch a package and verify it.

use anyhow::{Context, Result};
use g_core::catalog;
use g_core::config::GConfig;
use g_core::progress;
use g_core::transport::CurlTransport;
use g_core::{find_version, AttemptState};
use std::fs;
use std::path::PathBuf;

use crate::cli::PackageSelector;

pub fn run_download(
    cfg: &GConfig,
    version: &str,
    select: &PackageSelector,
    dest: Option<PathBuf>,
) -> Result<()> {
    let platform = select.platform();
    let versions = catalog::fetch_catalog(cfg).context("fetch release catalog")?;
    let v = find_version(&versions, version).with_context(|| format!("go{version}"))?;
    let pkg = v
        .find_package(&select.kind, &platform.os, &platform.arch)
        .with_context(|| format!("{} for {}/{}", select.kind, platform.os, platform.arch))?;

    let dir = match dest {
        Some(dir) => dir,
        None => cfg.downloads_dir()?,
    };
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(&pkg.file_name);

    let transport = CurlTransport::from_config(cfg);
    let downloaded = pkg.download_with(&transport, &path, &mut progress::report_to_stderr);
    eprintln!();
    let bytes = downloaded.with_context(|| format!("download {}", pkg.url))?;
    tracing::info!(bytes, path = %path.display(), "downloaded {}", pkg.file_name);

    let verified = pkg.verify_checksum(&path);
    let state = AttemptState::after_verification(&verified);
    if !state.may_install() {
        tracing::warn!(?state, path = %path.display(), "discarding unverified package");
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), "could not delete file: {}", e);
        }
        return verified.with_context(|| format!("verify {}", pkg.file_name));
    }

    println!("{}", path.display());
    Ok(())
}
