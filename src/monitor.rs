//! The early-stopping monitor.
//!
//! An external training loop calls [`EarlyStopMonitor::observe`] exactly once
//! after each completed epoch, in epoch order, and keeps training only while
//! the returned [`Decision`] is [`Decision::Continue`].
//!
//! The plateau test compares the newest accuracy against statistics of the
//! *previous* epochs only: the trailing mean and the running maximum are
//! taken over the history before the new value is appended. Swapping that
//! order would fold the current point into its own baseline and shift when
//! plateaus are detected.

use crate::{AccuracyLog, MonitorConfig, Reporter, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of one [`EarlyStopMonitor::observe`] call.
pub enum Decision {
    /// Keep training.
    Continue,
    /// Training has plateaued (or hit perfect accuracy); stop.
    Stop,
}

impl Decision {
    #[inline]
    pub fn should_continue(self) -> bool {
        self == Decision::Continue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running,
    Stopped,
}

#[derive(Debug, Clone)]
/// Per-run early-stopping state: config + accuracy history + run state.
///
/// One monitor belongs to exactly one training run. For a hyperparameter
/// sweep, build (or [`reset`](Self::reset)) a monitor per run; the monitor
/// is not meant to be shared across concurrent trainings.
///
/// ```rust
/// use early_stop::{Decision, EarlyStopMonitor, MonitorConfig};
///
/// # fn main() -> early_stop::Result<()> {
/// let mut monitor = EarlyStopMonitor::new(MonitorConfig {
///     min_epochs: 2,
///     ..MonitorConfig::default()
/// })?;
///
/// // Stand-in for a real training loop: accuracy flatlines at 0.8.
/// for (epoch, accuracy) in [0.8, 0.8, 0.8, 0.8, 0.8].iter().enumerate() {
///     if monitor.observe(epoch + 1, *accuracy, &mut ()) == Decision::Stop {
///         break;
///     }
/// }
/// assert!(monitor.is_stopped());
/// # Ok(())
/// # }
/// ```
pub struct EarlyStopMonitor {
    config: MonitorConfig,
    log: AccuracyLog,
    state: RunState,
}

impl EarlyStopMonitor {
    /// Construct a monitor with a validated configuration.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            log: AccuracyLog::new(),
            state: RunState::Running,
        })
    }

    /// Construct a monitor with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: MonitorConfig::default(),
            log: AccuracyLog::new(),
            state: RunState::Running,
        }
    }

    #[inline]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    #[inline]
    /// The accuracy history accumulated so far.
    pub fn history(&self) -> &AccuracyLog {
        &self.log
    }

    #[inline]
    /// Number of epochs observed so far.
    pub fn epochs_observed(&self) -> usize {
        self.log.len()
    }

    #[inline]
    /// True once a `Stop` decision has been made.
    pub fn is_stopped(&self) -> bool {
        self.state == RunState::Stopped
    }

    /// Record the accuracy of epoch `epoch` and decide whether to continue.
    ///
    /// Call contract (enforced with `assert!`, matching how the host trainer
    /// is required to drive this):
    /// - `epoch` is 1-based and must be exactly one past the number of
    ///   epochs already observed (once per epoch, in order),
    /// - the monitor must not have stopped already.
    ///
    /// Decision rule:
    /// - the first observation always continues (no baseline yet),
    /// - afterwards, `accuracy == 1.0` stops immediately,
    /// - otherwise stop iff the accuracy is within `tolerance` of both the
    ///   trailing mean and the running maximum of all *previous* epochs,
    ///   and `epoch > min_epochs`.
    ///
    /// Side effects go through `reporter`: a progress event when `epoch` is
    /// a multiple of `report_every`, and a finished event when stopping.
    pub fn observe<R: Reporter + ?Sized>(
        &mut self,
        epoch: usize,
        accuracy: f32,
        reporter: &mut R,
    ) -> Decision {
        assert!(
            self.state == RunState::Running,
            "observe called after the monitor stopped"
        );
        assert!(
            epoch == self.log.len() + 1,
            "epoch {epoch} out of order: expected {}",
            self.log.len() + 1
        );

        let decision = if self.log.is_empty() {
            // No baseline to compare against yet.
            Decision::Continue
        } else if accuracy == 1.0 {
            Decision::Stop
        } else {
            let trailing_mean = self.log.trailing_mean(self.config.window);
            let running_max = self.log.max();

            let plateaued = (accuracy - trailing_mean).abs() < self.config.tolerance
                && (accuracy - running_max).abs() < self.config.tolerance;

            if plateaued && epoch > self.config.min_epochs {
                Decision::Stop
            } else {
                Decision::Continue
            }
        };

        // Append after the check: the history an epoch is judged against
        // must exclude that epoch's own accuracy.
        self.log.push(accuracy);

        if epoch % self.config.report_every == 0 {
            reporter.on_progress(epoch, accuracy);
        }
        if decision == Decision::Stop {
            self.state = RunState::Stopped;
            reporter.on_finished(epoch, accuracy);
        }

        decision
    }

    /// Return to the initial state, keeping the configuration, so the
    /// monitor can serve a fresh run.
    pub fn reset(&mut self) {
        self.log.clear();
        self.state = RunState::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(tolerance: f32, window: usize, min_epochs: usize) -> EarlyStopMonitor {
        EarlyStopMonitor::new(MonitorConfig {
            tolerance,
            window,
            report_every: 100,
            min_epochs,
        })
        .unwrap()
    }

    #[test]
    fn first_observation_always_continues() {
        for acc in [0.0, 0.5, 1.0] {
            let mut m = EarlyStopMonitor::with_defaults();
            assert_eq!(m.observe(1, acc, &mut ()), Decision::Continue);
            assert_eq!(m.epochs_observed(), 1);
        }
    }

    #[test]
    fn perfect_accuracy_stops_before_min_epochs() {
        let mut m = EarlyStopMonitor::with_defaults();
        assert_eq!(m.observe(1, 0.4, &mut ()), Decision::Continue);
        assert_eq!(m.observe(2, 1.0, &mut ()), Decision::Stop);
        assert!(m.is_stopped());
    }

    #[test]
    fn constant_accuracy_stops_right_after_min_epochs() {
        let mut m = EarlyStopMonitor::with_defaults();
        for epoch in 1..=100 {
            assert_eq!(
                m.observe(epoch, 0.5, &mut ()),
                Decision::Continue,
                "epoch {epoch} is within the minimum-iteration floor"
            );
        }
        assert_eq!(m.observe(101, 0.5, &mut ()), Decision::Stop);
    }

    #[test]
    fn improving_run_does_not_stop() {
        // Each step clears the tolerance band around both the trailing mean
        // and the running max, so no plateau is ever declared.
        let mut m = monitor(1e-3, 100, 100);
        for epoch in 1..=900 {
            let acc = epoch as f32 * 1e-3;
            assert_eq!(m.observe(epoch, acc, &mut ()), Decision::Continue);
        }
        assert!(!m.is_stopped());
    }

    #[test]
    fn near_max_but_far_from_mean_continues() {
        // A jump back up to the old maximum is not a plateau while the
        // trailing mean still lags behind.
        let mut m = monitor(0.01, 5, 0);
        for (epoch, acc) in [0.9, 0.2, 0.2, 0.2, 0.9].iter().enumerate() {
            assert_eq!(m.observe(epoch + 1, *acc, &mut ()), Decision::Continue);
        }
    }

    #[test]
    fn stop_compares_against_history_excluding_current_epoch() {
        // With the floor at 2, epoch 2 continues even though history [0.5]
        // already looks flat. At epoch 3 the history is [0.5, 0.5] with
        // mean 0.5 and max 0.5; the new 0.5004 is inside tolerance of both,
        // so it stops even though a mean including the current point would
        // differ slightly.
        let mut m = monitor(1e-3, 10, 2);
        assert_eq!(m.observe(1, 0.5, &mut ()), Decision::Continue);
        assert_eq!(m.observe(2, 0.5, &mut ()), Decision::Continue);
        assert_eq!(m.observe(3, 0.5004, &mut ()), Decision::Stop);
    }

    #[test]
    fn hand_computed_warmup_sequence_never_plateaus() {
        // tolerance 0.01, window 5, min_epochs 3. Epoch by epoch the
        // trailing means are 0.5, 0.55, 0.58333, 0.6025, 0.6142; the gap to
        // the newest accuracy never drops below 0.01.
        let mut m = monitor(0.01, 5, 3);
        for (epoch, acc) in [0.5, 0.6, 0.65, 0.66, 0.661, 0.662].iter().enumerate() {
            assert_eq!(
                m.observe(epoch + 1, *acc, &mut ()),
                Decision::Continue,
                "epoch {}",
                epoch + 1
            );
        }
        assert_eq!(m.epochs_observed(), 6);
    }

    #[test]
    fn reset_allows_a_fresh_run() {
        let mut m = monitor(1e-3, 10, 0);
        m.observe(1, 0.5, &mut ());
        m.observe(2, 0.5, &mut ());
        assert!(m.is_stopped());

        m.reset();
        assert!(!m.is_stopped());
        assert_eq!(m.observe(1, 0.1, &mut ()), Decision::Continue);
        assert_eq!(m.epochs_observed(), 1);
    }

    #[test]
    fn rejects_invalid_config() {
        let cfg = MonitorConfig {
            window: 0,
            ..MonitorConfig::default()
        };
        assert!(EarlyStopMonitor::new(cfg).is_err());
    }

    #[test]
    #[should_panic(expected = "out of order")]
    fn out_of_order_epoch_panics() {
        let mut m = EarlyStopMonitor::with_defaults();
        m.observe(1, 0.5, &mut ());
        m.observe(3, 0.6, &mut ());
    }

    #[test]
    #[should_panic(expected = "after the monitor stopped")]
    fn observe_after_stop_panics() {
        let mut m = monitor(1e-3, 10, 0);
        m.observe(1, 0.5, &mut ());
        m.observe(2, 0.5, &mut ());
        m.observe(3, 0.5, &mut ());
    }
}
