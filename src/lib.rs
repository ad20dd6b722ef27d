//! proctop library - system and per-process statistics from `/proc`.
//!
//! The crate is split into a small stat-extraction core and a thin
//! terminal front-end that calls into it once per refresh cycle:
//!
//! - **reader**: typed readers over the kernel's text formats
//!   (`/proc/stat`, `/proc/meminfo`, `/proc/[pid]/*`, ...)
//! - **calc**: pure utilization and duration arithmetic
//! - **config**: injected file locations and the clock-tick constant
//! - **app** / **ui**: refresh-cycle state and ratatui rendering
//!
//! Reader operations never fail the caller: an unreadable file, a
//! missing key, or a malformed field degrades to a zero/empty value.
//! Each operation also has a `try_`-prefixed form that reports the
//! underlying [`error::ReadError`] for callers that want to tell a
//! real zero from an unreadable one.
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod app;
pub mod calc;
pub mod config;
pub mod error;
pub mod reader;
pub mod ui;

// Re-export key types for convenience
pub use config::ProcPaths;
pub use error::{ReadError, Result};
pub use reader::{CpuSample, ProcReader};
