//! Accuracy-plateau early stopping for training loops.
//!
//! `early-stop` is a small crate with one job: decide, after every completed
//! training epoch, whether training should keep going. The host training
//! loop feeds the monitor one accuracy value per epoch; the monitor answers
//! [`Decision::Continue`] or [`Decision::Stop`].
//!
//! A run stops when either:
//!
//! - accuracy reaches exactly `1.0` (perfect classification), or
//! - accuracy plateaus: the newest value sits within `tolerance` of both
//!   the trailing mean of the last `window` epochs and the best accuracy
//!   seen so far, and at least `min_epochs` epochs have completed.
//!
//! Both comparisons are made against the history *before* the newest value
//! is appended, so an epoch is never judged against itself.
//!
//! # Design notes
//!
//! - State is explicit: [`EarlyStopMonitor`] owns the config and the
//!   append-only [`AccuracyLog`]; nothing hides in closures or globals.
//! - The decision is separated from output: progress lines go through a
//!   [`Reporter`] the caller injects ([`ConsoleReporter`] for stdout,
//!   `&mut ()` to discard), so the rule is testable without capturing the
//!   console.
//! - One monitor per run. Parallel sweeps construct independent monitors;
//!   there is no shared mutable state.
//!
//! # Panics vs `Result`
//!
//! Construction validates the configuration and returns [`Result`]. The
//! per-epoch [`EarlyStopMonitor::observe`] call treats misuse (an
//! out-of-order epoch index, or a call after the monitor already stopped)
//! as programmer error and panics via `assert!`.
//!
//! # Quick start
//!
//! ```rust
//! use early_stop::{ConsoleReporter, Decision, EarlyStopMonitor, MonitorConfig};
//!
//! # fn main() -> early_stop::Result<()> {
//! let mut monitor = EarlyStopMonitor::new(MonitorConfig::default())?;
//! let mut reporter = ConsoleReporter;
//!
//! for epoch in 1..=1_000 {
//!     // let accuracy = train_one_epoch(...);
//!     # let accuracy = 0.5;
//!     if monitor.observe(epoch, accuracy, &mut reporter) == Decision::Stop {
//!         break;
//!     }
//! }
//! # assert!(monitor.is_stopped());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod history;
pub mod monitor;
pub mod report;

pub use config::MonitorConfig;
pub use error::{Error, Result};
pub use history::AccuracyLog;
pub use monitor::{Decision, EarlyStopMonitor};
pub use report::{ConsoleReporter, Reporter};
