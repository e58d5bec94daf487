//! CLI for the g Go version manager.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use g_core::config;
use g_core::platform::Platform;
use std::path::PathBuf;

use commands::{run_checksum, run_download, run_env, run_ls_remote, run_verify};

/// Top-level CLI for g.
#[derive(Debug, Parser)]
#[command(name = "g")]
#[command(about = "g: Go toolchain version manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which package of a version to pick. OS and arch default to the host.
#[derive(Debug, Clone, Args)]
pub struct PackageSelector {
    /// Package kind: archive, installer or source.
    #[arg(long, default_value = "archive")]
    pub kind: String,
    /// Target OS (Go spelling, e.g. linux, darwin, windows).
    #[arg(long)]
    pub os: Option<String>,
    /// Target architecture (Go spelling, e.g. amd64, arm64).
    #[arg(long)]
    pub arch: Option<String>,
}

impl PackageSelector {
    pub fn platform(&self) -> Platform {
        let host = Platform::current();
        Platform {
            os: self.os.clone().unwrap_or(host.os),
            arch: self.arch.clone().unwrap_or(host.arch),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List versions available for download.
    LsRemote {
        /// Only stable releases.
        #[arg(long)]
        stable: bool,
    },

    /// Download a version's package and verify its checksum.
    Download {
        /// Version name, e.g. 1.21.0.
        version: String,
        #[command(flatten)]
        select: PackageSelector,
        /// Directory to download into (default: $G_HOME/downloads).
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
    },

    /// Verify an already-downloaded file against the catalog checksum.
    Verify {
        /// Version name, e.g. 1.21.0.
        version: String,
        /// Path to the downloaded file.
        path: PathBuf,
        #[command(flatten)]
        select: PackageSelector,
    },

    /// Compute the digest of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
        /// Digest algorithm: SHA256 or SHA1.
        #[arg(long, default_value = "SHA256")]
        algorithm: String,
    },

    /// Show g-related environment variables.
    Env,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::LsRemote { stable } => run_ls_remote(&cfg, stable)?,
            CliCommand::Download {
                version,
                select,
                dest,
            } => run_download(&cfg, &version, &select, dest)?,
            CliCommand::Verify {
                version,
                path,
                select,
            } => run_verify(&cfg, &version, &path, &select)?,
            CliCommand::Checksum { path, algorithm } => run_checksum(&path, &algorithm)?,
            CliCommand::Env => run_env(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
