pub mod config;
pub mod error;
pub mod logging;

pub mod catalog;
pub mod checksum;
pub mod package;
pub mod platform;
pub mod progress;
pub mod resolver;
pub mod transport;
pub mod version;

pub use error::{Error, Result};
pub use package::{AttemptState, Package, PackageKind};
pub use resolver::find_version;
pub use version::Version;
