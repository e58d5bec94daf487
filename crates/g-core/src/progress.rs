//! Progress reporting for package downloads.
//!
//! The transport hands a snapshot to a caller callback as bytes arrive; the
//! CLI renders it as a single self-overwriting line on stderr.

use std::io::Write;

/// Snapshot of download progress for one package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressStats {
    /// Bytes received so far.
    pub bytes_done: u64,
    /// Total size in bytes (0 when the server did not announce it).
    pub total_bytes: u64,
}

impl ProgressStats {
    /// Fraction complete in [0.0, 1.0]; None when the total is unknown.
    pub fn fraction(&self) -> Option<f64> {
        if self.total_bytes == 0 {
            return None;
        }
        Some((self.bytes_done as f64 / self.total_bytes as f64).min(1.0))
    }

    /// One-line rendering, e.g. ` 50.0%  1.0MB / 2.0MB`.
    pub fn render(&self) -> String {
        match self.fraction() {
            Some(frac) => format!(
                "{:>5.1}%  {} / {}",
                frac * 100.0,
                format_size(self.bytes_done),
                format_size(self.total_bytes)
            ),
            None => format_size(self.bytes_done),
        }
    }
}

/// Progress callback that redraws the current line on stderr.
pub fn report_to_stderr(stats: &ProgressStats) {
    let mut err = std::io::stderr().lock();
    let _ = write!(err, "\r{:<40}", stats.render());
    let _ = err.flush();
}

/// Human-readable byte count with one decimal (B, KB, MB, GB).
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes}B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}
