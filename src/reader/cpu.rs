//! Aggregate CPU and scheduler statistics from `<root>/stat`.

use super::{read_file, value_by_key, ProcReader};
use crate::error::{ReadError, Result};

/// Cumulative CPU time counters in clock ticks since boot.
///
/// Field order matches the aggregate `cpu` line of the stats file.
/// Counters are monotonically non-decreasing across samples, so two
/// samples taken seconds apart can be differenced for an interval rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuSample {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuSample {
    /// Sum of all ten counters.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.user
            + self.nice
            + self.system
            + self.idle
            + self.iowait
            + self.irq
            + self.softirq
            + self.steal
            + self.guest
            + self.guest_nice
    }

    /// Time attributed to non-idle, non-iowait states.
    #[must_use]
    pub fn active(&self) -> u64 {
        self.total() - self.idle - self.iowait
    }

    /// Parses the ten numeric fields following the `cpu` token.
    /// Fields absent at end-of-line default to zero.
    fn parse(line: &str) -> Self {
        let mut fields = line
            .split_whitespace()
            .skip(1)
            .map(|tok| tok.parse::<u64>().unwrap_or(0));
        let mut next = || fields.next().unwrap_or(0);
        Self {
            user: next(),
            nice: next(),
            system: next(),
            idle: next(),
            iowait: next(),
            irq: next(),
            softirq: next(),
            steal: next(),
            guest: next(),
            guest_nice: next(),
        }
    }
}

impl ProcReader {
    /// Typed form of [`cpu_sample`](Self::cpu_sample).
    pub fn try_cpu_sample(&self) -> Result<CpuSample> {
        let path = self.paths().stat();
        let content = read_file(&path)?;
        content
            .lines()
            .find(|line| line.starts_with("cpu "))
            .map(CpuSample::parse)
            .ok_or(ReadError::KeyNotFound {
                key: "cpu".to_string(),
                path,
            })
    }

    /// The aggregate CPU counters; a zeroed sample when unreadable.
    #[must_use]
    pub fn cpu_sample(&self) -> CpuSample {
        self.try_cpu_sample().unwrap_or_default()
    }

    /// Typed form of [`total_processes`](Self::total_processes).
    pub fn try_total_processes(&self) -> Result<u64> {
        value_by_key(&self.paths().stat(), "processes")
    }

    /// Number of forks since boot, per the stats file.
    #[must_use]
    pub fn total_processes(&self) -> u64 {
        self.try_total_processes().unwrap_or(0)
    }

    /// Typed form of [`running_processes`](Self::running_processes).
    pub fn try_running_processes(&self) -> Result<u64> {
        value_by_key(&self.paths().stat(), "procs_running")
    }

    /// Number of currently runnable processes.
    #[must_use]
    pub fn running_processes(&self) -> u64 {
        self.try_running_processes().unwrap_or(0)
    }
}
