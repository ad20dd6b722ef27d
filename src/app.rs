//! Refresh-cycle state for the display loop.
//!
//! The core keeps no state between calls, so the interval bookkeeping
//! lives here: the previous CPU sample for delta-based utilization, and
//! the OS/kernel strings that cannot change while the machine is up.
//! Everything else is re-read on every cycle.

use std::cmp::Ordering;

use crate::calc;
use crate::config::{clock_ticks_per_second, ProcPaths};
use crate::reader::{CpuSample, ProcReader};

/// One process table row, assembled fresh each refresh.
#[derive(Debug, Clone)]
pub struct ProcessRow {
    /// Process id.
    pub pid: u32,
    /// Owning user name; empty when the uid has no passwd entry.
    pub user: String,
    /// CPU share as a ratio in [0,1].
    pub cpu: f64,
    /// Virtual size in kB.
    pub memory_kb: u64,
    /// Seconds since the process started.
    pub uptime_seconds: u64,
    /// Raw command line.
    pub command: String,
}

/// System-wide figures for one refresh.
#[derive(Debug, Clone, Default)]
pub struct SystemSnapshot {
    /// Operating system pretty name.
    pub os: String,
    /// Kernel release.
    pub kernel: String,
    /// CPU utilization ratio.
    pub cpu: f64,
    /// Memory utilization ratio.
    pub memory: f64,
    /// Seconds since boot.
    pub uptime_seconds: u64,
    /// Forks since boot.
    pub total_processes: u64,
    /// Currently runnable processes.
    pub running_processes: u64,
}

/// Display-loop state: a reader plus the caller-held sample cache.
pub struct App {
    reader: ProcReader,
    ticks_per_second: u64,
    os: String,
    kernel: String,
    prev_cpu: Option<CpuSample>,
    /// Latest system-wide figures.
    pub snapshot: SystemSnapshot,
    /// Latest process table, sorted by CPU share descending.
    pub processes: Vec<ProcessRow>,
}

impl App {
    /// Creates the display state over the given file locations.
    #[must_use]
    pub fn new(paths: ProcPaths) -> Self {
        let reader = ProcReader::new(paths);
        let os = reader.operating_system();
        let kernel = reader.kernel();
        Self {
            reader,
            ticks_per_second: clock_ticks_per_second(),
            os,
            kernel,
            prev_cpu: None,
            snapshot: SystemSnapshot::default(),
            processes: Vec::new(),
        }
    }

    /// Runs one refresh cycle: every reader operation re-invoked, the
    /// results assembled into a fresh snapshot and process table.
    ///
    /// The first cycle has no previous sample and reports the
    /// cumulative-since-boot CPU ratio; later cycles report the
    /// interval rate against the held sample.
    pub fn refresh(&mut self) {
        let sample = self.reader.cpu_sample();
        let cpu = match &self.prev_cpu {
            Some(prev) => calc::cpu_utilization_between(prev, &sample),
            None => {
                if sample.total() > 0 {
                    calc::cpu_utilization(&sample)
                } else {
                    0.0
                }
            }
        };
        self.prev_cpu = Some(sample);

        let (total_kb, free_kb) = self.reader.memory_totals();
        let memory = if total_kb > 0.0 {
            calc::memory_utilization(total_kb, free_kb)
        } else {
            0.0
        };

        let uptime_seconds = self.reader.uptime_seconds();

        self.snapshot = SystemSnapshot {
            os: self.os.clone(),
            kernel: self.kernel.clone(),
            cpu,
            memory,
            uptime_seconds,
            total_processes: self.reader.total_processes(),
            running_processes: self.reader.running_processes(),
        };

        let mut rows: Vec<ProcessRow> = self
            .reader
            .pids()
            .into_iter()
            .map(|pid| self.build_row(pid, uptime_seconds))
            .collect();
        rows.sort_by(|a, b| b.cpu.partial_cmp(&a.cpu).unwrap_or(Ordering::Equal));
        self.processes = rows;
    }

    fn build_row(&self, pid: u32, uptime_seconds: u64) -> ProcessRow {
        let uid = self.reader.uid(pid);
        let user = self.reader.user(&uid);
        let active_ticks = self.reader.active_ticks(pid);
        let start_ticks = self.reader.start_ticks(pid);
        let elapsed =
            calc::process_uptime_seconds(start_ticks, uptime_seconds, self.ticks_per_second);
        // Cumulative share over the process lifetime: on-CPU seconds
        // divided by seconds alive.
        let cpu = if elapsed > 0 {
            (active_ticks as f64 / self.ticks_per_second as f64) / elapsed as f64
        } else {
            0.0
        };

        ProcessRow {
            pid,
            user,
            cpu,
            memory_kb: self.reader.memory_kb(pid),
            uptime_seconds: elapsed,
            command: self.reader.command(pid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_paths(dir: &TempDir) -> ProcPaths {
        let root = dir.path().join("proc");
        fs::create_dir_all(&root).unwrap();
        fs::write(
            root.join("stat"),
            "cpu  100 0 100 700 100 0 0 0 0 0\n\
             cpu0 100 0 100 700 100 0 0 0 0 0\n\
             processes 4242\n\
             procs_running 3\n",
        )
        .unwrap();
        fs::write(
            root.join("meminfo"),
            "MemTotal:       2000 kB\nMemFree:         500 kB\n",
        )
        .unwrap();
        fs::write(root.join("uptime"), "1000.55 1800.00\n").unwrap();
        fs::write(
            root.join("version"),
            "Linux version 6.1.0-13-amd64 (build@host) #1 SMP\n",
        )
        .unwrap();

        let pid_dir = root.join("7");
        fs::create_dir_all(&pid_dir).unwrap();
        fs::write(
            pid_dir.join("stat"),
            "7 (worker) S 1 7 7 0 -1 4194304 100 0 0 0 2000 2000 0 0 20 0 1 0 50000 1000000 100 18446744073709551615\n",
        )
        .unwrap();
        fs::write(
            pid_dir.join("status"),
            "Name:\tworker\nUid:\t1000\t1000\t1000\t1000\nVmSize:\t   12345 kB\n",
        )
        .unwrap();
        fs::write(pid_dir.join("cmdline"), "/usr/bin/worker\0--serve\0").unwrap();

        let os_release = dir.path().join("os-release");
        fs::write(&os_release, "NAME=\"Test\"\nPRETTY_NAME=\"Test Linux 1.0\"\n").unwrap();
        let passwd = dir.path().join("passwd");
        fs::write(
            &passwd,
            "root:x:0:0:root:/root:/bin/bash\nalice:x:1000:1000:Alice:/home/alice:/bin/bash\n",
        )
        .unwrap();

        ProcPaths::new(root, os_release, passwd)
    }

    #[test]
    fn test_first_refresh_uses_cumulative_ratio() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(fake_paths(&dir));
        app.refresh();

        // 200 active out of 1000 total ticks
        assert!((app.snapshot.cpu - 0.2).abs() < 1e-9);
        assert!((app.snapshot.memory - 0.75).abs() < 1e-9);
        assert_eq!(app.snapshot.uptime_seconds, 1000);
        assert_eq!(app.snapshot.total_processes, 4242);
        assert_eq!(app.snapshot.running_processes, 3);
        assert_eq!(app.snapshot.os, "Test Linux 1.0");
        assert_eq!(app.snapshot.kernel, "6.1.0-13-amd64");
    }

    #[test]
    fn test_second_refresh_uses_interval_ratio() {
        let dir = TempDir::new().unwrap();
        let paths = fake_paths(&dir);
        let stat = paths.stat();
        let mut app = App::new(paths);
        app.refresh();

        // All new ticks are active: interval rate should hit 1.0
        fs::write(
            &stat,
            "cpu  600 0 100 700 100 0 0 0 0 0\nprocesses 4242\nprocs_running 3\n",
        )
        .unwrap();
        app.refresh();
        assert!((app.snapshot.cpu - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_process_rows() {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(fake_paths(&dir));
        app.refresh();

        assert_eq!(app.processes.len(), 1);
        let row = &app.processes[0];
        assert_eq!(row.pid, 7);
        assert_eq!(row.user, "alice");
        assert_eq!(row.memory_kb, 12345);
        let expected = 1000 - 50000 / clock_ticks_per_second();
        assert_eq!(row.uptime_seconds, expected);
        assert!(row.command.starts_with("/usr/bin/worker"));
        assert!(row.cpu > 0.0);
    }

    #[test]
    fn test_vanished_pid_degrades_to_empty_row() {
        let dir = TempDir::new().unwrap();
        let paths = fake_paths(&dir);
        // Directory exists but every per-process file is gone
        let ghost = paths.proc_root().join("99");
        fs::create_dir_all(&ghost).unwrap();

        let mut app = App::new(paths);
        app.refresh();

        let row = app.processes.iter().find(|r| r.pid == 99).unwrap();
        assert_eq!(row.user, "");
        assert_eq!(row.memory_kb, 0);
        assert_eq!(row.command, "");
        assert!((row.cpu - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rows_sorted_by_cpu_descending() {
        let dir = TempDir::new().unwrap();
        let paths = fake_paths(&dir);
        let busy = paths.proc_root().join("8");
        fs::create_dir_all(&busy).unwrap();
        // Far more active ticks than pid 7
        fs::write(
            busy.join("stat"),
            "8 (spin) R 1 8 8 0 -1 4194304 0 0 0 0 40000 40000 0 0 20 0 1 0 50000 0 0 0\n",
        )
        .unwrap();

        let mut app = App::new(paths);
        app.refresh();

        let order: Vec<u32> = app.processes.iter().map(|r| r.pid).collect();
        assert_eq!(order[0], 8);
        assert!(order.contains(&7));
    }
}
