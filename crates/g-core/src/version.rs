//! A release and the lookup of its per-platform packages.

use crate::error::{Error, Result};
use crate::package::Package;

/// File name prefix a package must carry to be found for `os`/`arch`,
/// e.g. `go1.12.4.linux-amd64`.
pub fn package_prefix(version: &str, os: &str, arch: &str) -> String {
    format!("go{version}.{os}-{arch}")
}

/// One release of the toolchain. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    name: String,
    packages: Vec<Package>,
}

impl Version {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_packages(name, Vec::new())
    }

    pub fn with_packages(name: impl Into<String>, packages: Vec<Package>) -> Self {
        Self {
            name: name.into(),
            packages,
        }
    }

    /// Version name, e.g. "1.12.4".
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn push_package(&mut self, package: Package) {
        self.packages.push(package);
    }

    /// First package (in catalog order) of `kind` for `os`/`arch`.
    pub fn find_package(&self, kind: &str, os: &str, arch: &str) -> Result<&Package> {
        let prefix = package_prefix(&self.name, os, arch);
        self.packages
            .iter()
            .find(|p| is_match(p, kind, &prefix))
            .ok_or(Error::PackageNotFound)
    }

    /// Every package of `kind` for `os`/`arch`, in catalog order. Never
    /// returns an empty list.
    pub fn find_packages(&self, kind: &str, os: &str, arch: &str) -> Result<Vec<&Package>> {
        let prefix = package_prefix(&self.name, os, arch);
        let found: Vec<&Package> = self
            .packages
            .iter()
            .filter(|p| is_match(p, kind, &prefix))
            .collect();
        if found.is_empty() {
            return Err(Error::PackageNotFound);
        }
        Ok(found)
    }
}

fn is_match(package: &Package, kind: &str, prefix: &str) -> bool {
    package.is_kind(kind) && package.file_name.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(file_name: &str, kind: &str) -> Package {
        Package {
            file_name: file_name.into(),
            kind: kind.into(),
            ..Package::default()
        }
    }

    fn go1124() -> Version {
        Version::with_packages(
            "1.12.4",
            vec![
                pkg("go1.12.4.src.tar.gz", "Source"),
                pkg("go1.12.4.darwin-amd64.pkg", "Installer"),
                pkg("go1.12.4.darwin-amd64.tar.gz", "Archive"),
                pkg("go1.12.4.linux-amd64.tar.gz", "Archive"),
                pkg("go1.12.4.linux-amd64.zip", "archive"),
                pkg("go1.12.4.windows-amd64.msi", "Installer"),
                pkg("go1.12.4.windows-amd64.zip", "Archive"),
            ],
        )
    }

    #[test]
    fn prefix_format() {
        assert_eq!(
            package_prefix("1.12.4", "linux", "amd64"),
            "go1.12.4.linux-amd64"
        );
    }

    #[test]
    fn find_package_returns_first_match() {
        let v = go1124();
        let p = v.find_package("Archive", "linux", "amd64").unwrap();
        assert_eq!(p.file_name, "go1.12.4.linux-amd64.tar.gz");
    }

    #[test]
    fn find_package_kind_case_insensitive() {
        let v = go1124();
        let p = v.find_package("INSTALLER", "windows", "amd64").unwrap();
        assert_eq!(p.file_name, "go1.12.4.windows-amd64.msi");
    }

    #[test]
    fn find_package_no_match() {
        let v = go1124();
        assert!(matches!(
            v.find_package("Archive", "linux", "arm64"),
            Err(Error::PackageNotFound)
        ));
        assert!(matches!(
            v.find_package("Installer", "linux", "amd64"),
            Err(Error::PackageNotFound)
        ));
    }

    #[test]
    fn source_packages_do_not_follow_platform_prefix() {
        let v = go1124();
        assert!(matches!(
            v.find_package("Source", "linux", "amd64"),
            Err(Error::PackageNotFound)
        ));
    }

    #[test]
    fn prefix_requires_exact_version() {
        let v = Version::with_packages(
            "1.12.4",
            vec![
                pkg("go1.12.41.linux-amd64.tar.gz", "Archive"),
                pkg("go1.12.linux-amd64.tar.gz", "Archive"),
            ],
        );
        assert!(matches!(
            v.find_package("Archive", "linux", "amd64"),
            Err(Error::PackageNotFound)
        ));
    }

    #[test]
    fn find_packages_keeps_order() {
        let v = go1124();
        let found = v.find_packages("archive", "linux", "amd64").unwrap();
        let names: Vec<&str> = found.iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["go1.12.4.linux-amd64.tar.gz", "go1.12.4.linux-amd64.zip"]
        );
    }

    #[test]
    fn find_packages_empty_is_error() {
        let v = Version::new("1.12.4");
        assert!(matches!(
            v.find_packages("Archive", "linux", "amd64"),
            Err(Error::PackageNotFound)
        ));
    }

    #[test]
    fn push_package_appends() {
        let mut v = Version::new("1.21.0");
        assert!(v.packages().is_empty());
        v.push_package(pkg("go1.21.0.linux-amd64.tar.gz", "Archive"));
        assert_eq!(v.name(), "1.21.0");
        assert_eq!(v.packages().len(), 1);
        assert!(v.find_package("Archive", "linux", "amd64").is_ok());
    }
}
