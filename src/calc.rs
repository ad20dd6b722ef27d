//! Pure utilization and duration arithmetic.
//!
//! No I/O lives here; every function is an idempotent transformation of
//! counters the reader has already extracted.

use crate::reader::CpuSample;

/// Fraction of memory in use: `(total - free) / total`.
///
/// The caller guarantees `total_kb` is non-zero; a zero total divides
/// through to IEEE infinity/NaN rather than being corrected here.
#[must_use]
pub fn memory_utilization(total_kb: f64, free_kb: f64) -> f64 {
    (total_kb - free_kb) / total_kb
}

/// Cumulative-since-boot CPU ratio for a single sample.
///
/// Computed from counters that accumulate from boot, so it is biased
/// toward the historical average as uptime grows. For a current rate,
/// difference two samples with [`cpu_utilization_between`].
#[must_use]
pub fn cpu_utilization(sample: &CpuSample) -> f64 {
    sample.active() as f64 / sample.total() as f64
}

/// Interval CPU ratio between two samples of the same counters.
///
/// Returns 0.0 when no time elapsed between the samples. Counter
/// regressions (which should not happen for a monotone source) clamp
/// to zero instead of wrapping.
#[must_use]
pub fn cpu_utilization_between(prev: &CpuSample, curr: &CpuSample) -> f64 {
    let total_delta = curr.total().saturating_sub(prev.total());
    if total_delta == 0 {
        return 0.0;
    }
    let active_delta = curr.active().saturating_sub(prev.active());
    active_delta as f64 / total_delta as f64
}

/// Seconds a process has been alive:
/// `uptime - start_ticks / ticks_per_second`, saturating at zero.
#[must_use]
pub fn process_uptime_seconds(
    start_ticks: u64,
    uptime_seconds: u64,
    ticks_per_second: u64,
) -> u64 {
    uptime_seconds.saturating_sub(start_ticks / ticks_per_second.max(1))
}

/// Formats whole seconds as `HH:MM:SS`, wrapping at 24 hours.
#[must_use]
pub fn format_elapsed(total_seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        (total_seconds % 86_400) / 3_600,
        (total_seconds % 3_600) / 60,
        total_seconds % 60
    )
}
