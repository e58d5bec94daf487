//! HTTP transport for release feeds and package archives.
//!
//! Uses the curl crate (libcurl). Downloads stream straight into the
//! destination file; nothing here retries.

use crate::config::GConfig;
use crate::error::{Error, Result};
use crate::progress::ProgressStats;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Anything that can fetch a URL into a local file.
pub trait Transport {
    /// Download `url` into `destination` (created or truncated), invoking
    /// `progress` as bytes arrive. Returns the number of bytes written.
    fn download(
        &self,
        url: &str,
        destination: &Path,
        progress: &mut dyn FnMut(&ProgressStats),
    ) -> Result<u64>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone, Copy)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    /// Abort when the rate stays under 1 KiB/s for this long.
    pub low_speed_time: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            low_speed_time: Duration::from_secs(60),
        }
    }
}

impl CurlTransport {
    pub fn from_config(cfg: &GConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            low_speed_time: Duration::from_secs(cfg.low_speed_time_secs),
        }
    }

    fn easy(&self, url: &str) -> Result<curl::easy::Easy> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.low_speed_limit(1024)?;
        easy.low_speed_time(self.low_speed_time)?;
        Ok(easy)
    }

    /// GET `url` into memory. Used for the release feed, which is small.
    pub fn get(&self, url: &str) -> Result<Vec<u8>> {
        let mut body = Vec::new();
        let mut easy = self.easy(url)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        check_status(&mut easy, url)?;
        Ok(body)
    }
}

impl Transport for CurlTransport {
    fn download(
        &self,
        url: &str,
        destination: &Path,
        progress: &mut dyn FnMut(&ProgressStats),
    ) -> Result<u64> {
        let mut file = open_destination(destination)?;
        let mut written: u64 = 0;
        let mut write_err: Option<io::Error> = None;

        let mut easy = self.easy(url)?;
        easy.progress(true)?;
        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.progress_function(|dltotal, dlnow, _, _| {
                progress(&ProgressStats {
                    bytes_done: dlnow as u64,
                    total_bytes: dltotal as u64,
                });
                true
            })?;
            transfer.perform()
        };

        if let Some(e) = write_err {
            return Err(Error::Io(e));
        }
        performed?;
        check_status(&mut easy, url)?;
        file.flush()?;
        tracing::debug!(url, bytes = written, dest = %destination.display(), "download finished");
        Ok(written)
    }
}

fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<()> {
    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        return Err(Error::Http {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}

/// Create or truncate `path` for writing; new files get mode 0644 on Unix.
pub fn open_destination(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.create(true).write(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    opts.open(path)
}
