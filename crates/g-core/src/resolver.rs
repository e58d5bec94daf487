//! Finding a release by name in a catalog.

use crate::error::{Error, Result};
use crate::version::Version;

/// First version in `all` whose name equals `name` exactly (case-sensitive).
pub fn find_version<'a>(all: &'a [Version], name: &str) -> Result<&'a Version> {
    all.iter()
        .find(|v| v.name() == name)
        .ok_or(Error::VersionNotFound)
}
