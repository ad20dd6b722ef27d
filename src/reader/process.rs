//! Per-process readers: enumeration, identity, memory, and timing.

use std::fs;

use super::{first_line, read_file, value_by_key, ProcReader};
use crate::error::{ReadError, Result};

impl ProcReader {
    /// Live process ids: the all-digit entries of the process root.
    ///
    /// Order is whatever the filesystem yields; callers must not depend
    /// on it. An unreadable root yields an empty list.
    #[must_use]
    pub fn pids(&self) -> Vec<u32> {
        let Ok(entries) = fs::read_dir(self.paths().proc_root()) else {
            return Vec::new();
        };

        let mut pids = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(pid) = name.parse() {
                    pids.push(pid);
                }
            }
        }
        pids
    }

    /// Typed form of [`command`](Self::command).
    pub fn try_command(&self, pid: u32) -> Result<String> {
        first_line(&self.paths().pid_cmdline(pid))
    }

    /// First line of the command-line file, verbatim. The kernel's NUL
    /// argument separators are preserved; display layers decide how to
    /// render them.
    #[must_use]
    pub fn command(&self, pid: u32) -> String {
        self.try_command(pid).unwrap_or_default()
    }

    /// Typed form of [`memory_kb`](Self::memory_kb).
    pub fn try_memory_kb(&self, pid: u32) -> Result<u64> {
        value_by_key(&self.paths().pid_status(pid), "VmSize:")
    }

    /// `VmSize:` of the status file, in kB.
    ///
    /// This is the virtual size, not the resident set; kept to match
    /// the established output of this tool.
    #[must_use]
    pub fn memory_kb(&self, pid: u32) -> u64 {
        self.try_memory_kb(pid).unwrap_or(0)
    }

    /// Typed form of [`uid`](Self::uid).
    pub fn try_uid(&self, pid: u32) -> Result<String> {
        value_by_key(&self.paths().pid_status(pid), "Uid:")
    }

    /// Real uid of the process, as the first numeric token after `Uid:`.
    #[must_use]
    pub fn uid(&self, pid: u32) -> String {
        self.try_uid(pid).unwrap_or_default()
    }

    /// Typed form of [`user`](Self::user).
    pub fn try_user(&self, uid: &str) -> Result<String> {
        let path = self.paths().passwd().to_path_buf();
        let content = read_file(&path)?;
        for line in content.lines() {
            let mut fields = line.split(':');
            let name = fields.next();
            let _password = fields.next();
            let id = fields.next();
            if let (Some(name), Some(id)) = (name, id) {
                if id == uid {
                    return Ok(name.to_string());
                }
            }
        }
        Err(ReadError::KeyNotFound {
            key: uid.to_string(),
            path,
        })
    }

    /// User name for a numeric uid, from the passwd file. Empty when
    /// the uid has no entry or the file is unreadable.
    #[must_use]
    pub fn user(&self, uid: &str) -> String {
        self.try_user(uid).unwrap_or_default()
    }

    /// Typed form of [`active_ticks`](Self::active_ticks).
    ///
    /// Skips the 13 fixed fields preceding utime and sums
    /// utime + stime + cutime + cstime. A truncated line contributes
    /// only the tokens it actually has.
    pub fn try_active_ticks(&self, pid: u32) -> Result<u64> {
        let content = read_file(&self.paths().pid_stat(pid))?;
        Ok(content
            .split_whitespace()
            .skip(13)
            .take(4)
            .filter_map(|tok| tok.parse::<u64>().ok())
            .sum())
    }

    /// Clock ticks this process has spent on-CPU, children included.
    #[must_use]
    pub fn active_ticks(&self, pid: u32) -> u64 {
        self.try_active_ticks(pid).unwrap_or(0)
    }

    /// Typed form of [`start_ticks`](Self::start_ticks).
    pub fn try_start_ticks(&self, pid: u32) -> Result<u64> {
        let path = self.paths().pid_stat(pid);
        let content = read_file(&path)?;
        // starttime is the 22nd field of the stat line
        let token = content
            .split_whitespace()
            .nth(21)
            .ok_or_else(|| ReadError::Malformed {
                what: "start time".to_string(),
                path: path.clone(),
            })?;
        token.parse().map_err(|_| ReadError::Malformed {
            what: "start time".to_string(),
            path,
        })
    }

    /// Process start time in clock ticks since boot.
    #[must_use]
    pub fn start_ticks(&self, pid: u32) -> u64 {
        self.try_start_ticks(pid).unwrap_or(0)
    }
}
