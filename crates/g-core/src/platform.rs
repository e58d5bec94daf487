//! Host OS/architecture in the spelling used by Go release file names.

use std::env::consts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// The platform this binary runs on.
    pub fn current() -> Self {
        Self {
            os: go_os(consts::OS).to_string(),
            arch: go_arch(consts::ARCH).to_string(),
        }
    }
}

/// Map a Rust `target_os` name to a Go `GOOS` name.
pub fn go_os(os: &str) -> &str {
    match os {
        "macos" => "darwin",
        other => other,
    }
}

/// Map a Rust `target_arch` name to a Go `GOARCH` name as used in file names.
pub fn go_arch(arch: &str) -> &str {
    match arch {
        "x86_64" => "amd64",
        "x86" => "386",
        "aarch64" => "arm64",
        "arm" => "armv6l",
        "powerpc64" => "ppc64le",
        "loongarch64" => "loong64",
        other => other,
    }
}
