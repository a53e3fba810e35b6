//! Monitor configuration.
//!
//! `MonitorConfig` is fixed for the lifetime of one training run. The defaults
//! match the common case of per-epoch accuracy in `[0, 1]`: a run is declared
//! plateaued when the newest accuracy sits within `tolerance` of both the
//! trailing mean and the running maximum, but never before `min_epochs`
//! epochs have completed.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
/// Configuration for an [`EarlyStopMonitor`](crate::EarlyStopMonitor).
pub struct MonitorConfig {
    /// Plateau sensitivity: how close accuracy must stay to the trailing
    /// mean and running maximum to count as "not improving".
    pub tolerance: f32,
    /// Number of most-recent accuracy values averaged for the plateau test.
    /// With fewer observations available, all of them are used.
    pub window: usize,
    /// Epochs between periodic progress reports.
    pub report_every: usize,
    /// No plateau stop is considered at or before this epoch. Perfect
    /// accuracy still stops immediately.
    pub min_epochs: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            window: 100,
            report_every: 100,
            min_epochs: 100,
        }
    }
}

impl MonitorConfig {
    /// Validate configuration parameters.
    pub fn validate(self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be finite and > 0, got {}",
                self.tolerance
            )));
        }
        if self.window == 0 {
            return Err(Error::InvalidConfig("window must be > 0".to_owned()));
        }
        if self.report_every == 0 {
            return Err(Error::InvalidConfig(
                "report_every must be > 0".to_owned(),
            ));
        }
        Ok(())
    }
}
