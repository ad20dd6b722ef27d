//! Reader configuration.
//!
//! The kernel file locations are carried by an immutable [`ProcPaths`]
//! value injected into the reader at construction, so tests can point
//! the whole stack at a fabricated root directory.

use std::path::{Path, PathBuf};

/// Locations of the kernel-exposed files the reader consumes.
#[derive(Debug, Clone)]
pub struct ProcPaths {
    proc_root: PathBuf,
    os_release: PathBuf,
    passwd: PathBuf,
}

impl Default for ProcPaths {
    fn default() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
            os_release: PathBuf::from("/etc/os-release"),
            passwd: PathBuf::from("/etc/passwd"),
        }
    }
}

impl ProcPaths {
    /// Creates a path set rooted somewhere other than the live system.
    #[must_use]
    pub fn new(
        proc_root: impl Into<PathBuf>,
        os_release: impl Into<PathBuf>,
        passwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            proc_root: proc_root.into(),
            os_release: os_release.into(),
            passwd: passwd.into(),
        }
    }

    /// The process-information root (conventionally `/proc`).
    #[must_use]
    pub fn proc_root(&self) -> &Path {
        &self.proc_root
    }

    /// The os-release style file holding `PRETTY_NAME`.
    #[must_use]
    pub fn os_release(&self) -> &Path {
        &self.os_release
    }

    /// The passwd-style user database.
    #[must_use]
    pub fn passwd(&self) -> &Path {
        &self.passwd
    }

    /// `<root>/stat`
    #[must_use]
    pub fn stat(&self) -> PathBuf {
        self.proc_root.join("stat")
    }

    /// `<root>/meminfo`
    #[must_use]
    pub fn meminfo(&self) -> PathBuf {
        self.proc_root.join("meminfo")
    }

    /// `<root>/uptime`
    #[must_use]
    pub fn uptime(&self) -> PathBuf {
        self.proc_root.join("uptime")
    }

    /// `<root>/version`
    #[must_use]
    pub fn version(&self) -> PathBuf {
        self.proc_root.join("version")
    }

    /// `<root>/<pid>/stat`
    #[must_use]
    pub fn pid_stat(&self, pid: u32) -> PathBuf {
        self.proc_root.join(pid.to_string()).join("stat")
    }

    /// `<root>/<pid>/status`
    #[must_use]
    pub fn pid_status(&self, pid: u32) -> PathBuf {
        self.proc_root.join(pid.to_string()).join("status")
    }

    /// `<root>/<pid>/cmdline`
    #[must_use]
    pub fn pid_cmdline(&self, pid: u32) -> PathBuf {
        self.proc_root.join(pid.to_string()).join("cmdline")
    }
}

/// Clock ticks per second, from the runtime environment.
///
/// Jiffy counts divide by this to become seconds. Falls back to the
/// conventional 100 when the query fails.
#[cfg(target_os = "linux")]
#[allow(unsafe_code)]
#[must_use]
pub fn clock_ticks_per_second() -> u64 {
    // SAFETY: sysconf performs a read-only query with no pointer arguments.
    let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks > 0 {
        ticks as u64
    } else {
        100
    }
}

#[cfg(not(target_os = "linux"))]
#[must_use]
pub fn clock_ticks_per_second() -> u64 {
    100
}
