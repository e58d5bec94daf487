//! `g checksum <path>` – print the digest of a file.

use anyhow::Result;
use g_core::checksum::{self, ChecksumAlgorithm};
use std::path::Path;

pub fn run_checksum(path: &Path, algorithm: &str) -> Result<()> {
    let algorithm = ChecksumAlgorithm::from_name(algorithm)?;
    let digest = checksum::digest_path(algorithm, path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
