//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_ls_remote() {
    match parse(&["g", "ls-remote"]) {
        CliCommand::LsRemote { stable } => assert!(!stable),
        _ => panic!("expected LsRemote"),
    }
    match parse(&["g", "ls-remote", "--stable"]) {
        CliCommand::LsRemote { stable } => assert!(stable),
        _ => panic!("expected LsRemote --stable"),
    }
}

#[test]
fn cli_parse_download_defaults() {
    match parse(&["g", "download", "1.21.0"]) {
        CliCommand::Download {
            version,
            select,
            dest,
        } => {
            assert_eq!(version, "1.21.0");
            assert_eq!(select.kind, "archive");
            assert!(select.os.is_none());
            assert!(select.arch.is_none());
            assert!(dest.is_none());
            let host = g_core::platform::Platform::current();
            assert_eq!(select.platform(), host);
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_download_explicit_target() {
    match parse(&[
        "g",
        "download",
        "1.12.4",
        "--kind",
        "installer",
        "--os",
        "windows",
        "--arch",
        "386",
        "--dest",
        "/tmp/go",
    ]) {
        CliCommand::Download {
            version,
            select,
            dest,
        } => {
            assert_eq!(version, "1.12.4");
            assert_eq!(select.kind, "installer");
            let p = select.platform();
            assert_eq!(p.os, "windows");
            assert_eq!(p.arch, "386");
            assert_eq!(dest, Some(PathBuf::from("/tmp/go")));
        }
        _ => panic!("expected Download"),
    }
}

#[test]
fn cli_parse_verify() {
    match parse(&["g", "verify", "1.21.0", "go.tar.gz", "--os", "linux"]) {
        CliCommand::Verify {
            version,
            path,
            select,
        } => {
            assert_eq!(version, "1.21.0");
            assert_eq!(path, PathBuf::from("go.tar.gz"));
            assert_eq!(select.os.as_deref(), Some("linux"));
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["g", "checksum", "/path/to/file.bin"]) {
        CliCommand::Checksum { path, algorithm } => {
            assert_eq!(path, PathBuf::from("/path/to/file.bin"));
            assert_eq!(algorithm, "SHA256");
        }
        _ => panic!("expected Checksum"),
    }
    match parse(&["g", "checksum", "f", "--algorithm", "SHA1"]) {
        CliCommand::Checksum { algorithm, .. } => assert_eq!(algorithm, "SHA1"),
        _ => panic!("expected Checksum --algorithm"),
    }
}

#[test]
fn cli_parse_env() {
    assert!(matches!(parse(&["g", "env"]), CliCommand::Env));
}

#[test]
fn download_requires_version() {
    assert!(Cli::try_parse_from(["g", "download"]).is_err());
}
