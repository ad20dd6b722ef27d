//! Memory totals from `<root>/meminfo`.

use super::{value_by_key, ProcReader};
use crate::error::Result;

impl ProcReader {
    /// Typed form of [`memory_totals`](Self::memory_totals).
    pub fn try_memory_totals(&self) -> Result<(f64, f64)> {
        let path = self.paths().meminfo();
        let total = value_by_key(&path, "MemTotal:")?;
        let free = value_by_key(&path, "MemFree:")?;
        Ok((total, free))
    }

    /// `(MemTotal, MemFree)` in kB; `(0.0, 0.0)` when unreadable.
    #[must_use]
    pub fn memory_totals(&self) -> (f64, f64) {
        self.try_memory_totals().unwrap_or((0.0, 0.0))
    }
}
