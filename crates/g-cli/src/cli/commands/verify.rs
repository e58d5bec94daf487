//! `g verify <version> <path>` – check a downloaded file against the catalog.

use anyhow::{Context, Result};
use g_core::catalog;
use g_core::config::GConfig;
use g_core::find_version;
use std::path::Path;

use crate::cli::PackageSelector;

pub fn run_verify(cfg: &GConfig, version: &str, path: &Path, select: &PackageSelector) -> Result<()> {
    let platform = select.platform();
    let versions = catalog::fetch_catalog(cfg).context("fetch release catalog")?;
    let v = find_version(&versions, version).with_context(|| format!("go{version}"))?;
    let pkg = v
        .find_package(&select.kind, &platform.os, &platform.arch)
        .with_context(|| format!("{} for {}/{}", select.kind, platform.os, platform.arch))?;
    pkg.verify_checksum(path)
        .with_context(|| format!("verify {}", path.display()))?;
    println!("{}: {} OK", path.display(), pkg.algorithm);
    Ok(())
}
