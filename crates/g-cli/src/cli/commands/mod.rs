//! CLI command handlers, one per file.

mod checksum;
mod download;
mod env;
mod ls_remote;
mod verify;

pub use checksum::run_checksum;
pub use download::run_download;
pub use env::run_env;
pub use ls_remote::run_ls_remote;
pub use verify::run_verify;
