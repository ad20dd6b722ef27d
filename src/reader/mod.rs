//! Kernel text-file readers.
//!
//! [`ProcReader`] translates the kernel's text formats into typed
//! values. It is stateless: every operation opens one file, consumes it
//! (or short-circuits on the first match), and closes it. Process ids
//! can vanish between enumeration and the per-process reads, so every
//! operation treats an unreadable file as a normal degraded result.
//!
//! Two parsing patterns cover most of the files:
//!
//! - scan lines for a `(key, value)` token pair and return the value of
//!   the first match ([`value_by_key`])
//! - read one token from the first line ([`first_value`])

mod cpu;
mod memory;
mod process;
mod system;

pub use cpu::CpuSample;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::ProcPaths;
use crate::error::{ReadError, Result};

/// Reader over the process-information root.
#[derive(Debug, Clone, Default)]
pub struct ProcReader {
    paths: ProcPaths,
}

impl ProcReader {
    /// Creates a reader over the given file locations.
    #[must_use]
    pub fn new(paths: ProcPaths) -> Self {
        Self { paths }
    }

    /// The file locations this reader consumes.
    #[must_use]
    pub fn paths(&self) -> &ProcPaths {
        &self.paths
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Scans `path` line by line, consuming `(key, value)` token pairs, and
/// returns the value paired with the first occurrence of `key`.
///
/// Keys are matched at even token positions only, mirroring the pairwise
/// grammar of the status/meminfo/stat key files. A matched value that
/// fails to convert is reported as malformed rather than skipped.
fn value_by_key<T: FromStr>(path: &Path, key: &str) -> Result<T> {
    let content = read_file(path)?;
    for line in content.lines() {
        let mut tokens = line.split_whitespace();
        while let (Some(k), Some(v)) = (tokens.next(), tokens.next()) {
            if k == key {
                return v.parse().map_err(|_| ReadError::Malformed {
                    what: key.to_string(),
                    path: path.to_path_buf(),
                });
            }
        }
    }
    Err(ReadError::KeyNotFound {
        key: key.to_string(),
        path: path.to_path_buf(),
    })
}

/// Reads the first whitespace-delimited token of the first line of `path`.
fn first_value<T: FromStr>(path: &Path) -> Result<T> {
    let content = read_file(path)?;
    let token = content
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .ok_or_else(|| ReadError::Malformed {
            what: "first token".to_string(),
            path: path.to_path_buf(),
        })?;
    token.parse().map_err(|_| ReadError::Malformed {
        what: "first token".to_string(),
        path: path.to_path_buf(),
    })
}

/// Reads the first line of `path` verbatim.
fn first_line(path: &Path) -> Result<String> {
    let content = read_file(path)?;
    Ok(content.lines().next().unwrap_or_default().to_string())
}
