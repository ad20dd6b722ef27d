//! Machine-level identity and uptime readers.

use super::{first_value, read_file, ProcReader};
use crate::error::{ReadError, Result};

impl ProcReader {
    /// Typed form of [`operating_system`](Self::operating_system).
    pub fn try_operating_system(&self) -> Result<String> {
        let path = self.paths().os_release().to_path_buf();
        let content = read_file(&path)?;
        for line in content.lines() {
            if let Some(value) = line.strip_prefix("PRETTY_NAME=") {
                return Ok(value.trim().trim_matches('"').to_string());
            }
        }
        Err(ReadError::KeyNotFound {
            key: "PRETTY_NAME".to_string(),
            path,
        })
    }

    /// The `PRETTY_NAME` of the os-release file, quoting stripped.
    #[must_use]
    pub fn operating_system(&self) -> String {
        self.try_operating_system().unwrap_or_default()
    }

    /// Typed form of [`kernel`](Self::kernel).
    pub fn try_kernel(&self) -> Result<String> {
        let path = self.paths().version();
        let content = read_file(&path)?;
        // "Linux version 6.1.0-13-amd64 (...)" - the release is the third token
        content
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(2))
            .map(str::to_string)
            .ok_or(ReadError::Malformed {
                what: "kernel release".to_string(),
                path,
            })
    }

    /// The running kernel release string.
    #[must_use]
    pub fn kernel(&self) -> String {
        self.try_kernel().unwrap_or_default()
    }

    /// Typed form of [`uptime_seconds`](Self::uptime_seconds).
    pub fn try_uptime_seconds(&self) -> Result<u64> {
        let seconds: f64 = first_value(&self.paths().uptime())?;
        Ok(seconds as u64)
    }

    /// Seconds since boot, fractional part truncated; 0 when unreadable.
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.try_uptime_seconds().unwrap_or(0)
    }
}
