//! `g ls-remote` – list versions from the release catalog.

use anyhow::{Context, Result};
use g_core::catalog::{self, Release};
use g_core::config::GConfig;

pub fn run_ls_remote(cfg: &GConfig, stable_only: bool) -> Result<()> {
    let releases = catalog::fetch_releases(cfg).context("fetch release catalog")?;
    for name in version_names(&releases, stable_only) {
        println!("  {name}");
    }
    Ok(())
}

/// Names oldest first, the way a terminal listing reads best.
fn version_names(releases: &[Release], stable_only: bool) -> Vec<&str> {
    releases
        .iter()
        .rev()
        .filter(|r| !stable_only || r.stable)
        .map(|r| r.version.name())
        .collect()
}
