//! Reporting boundary.
//!
//! The monitor's stop/continue decision is kept free of I/O; progress and
//! completion events go through a `Reporter` supplied by the caller. Pass
//! `&mut ()` to discard them, or [`ConsoleReporter`] for the standard
//! console lines.

/// Receives progress events from an [`EarlyStopMonitor`](crate::EarlyStopMonitor).
pub trait Reporter {
    /// Called when the observed epoch is an exact multiple of
    /// `report_every`.
    fn on_progress(&mut self, _epoch: usize, _accuracy: f32) {}

    /// Called once, on the invocation that decides to stop.
    fn on_finished(&mut self, _epoch: usize, _accuracy: f32) {}
}

/// Discards all events.
impl Reporter for () {}

#[derive(Debug, Clone, Copy, Default)]
/// Prints progress to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn on_progress(&mut self, epoch: usize, accuracy: f32) {
        println!("[{epoch}] training accuracy: {:.2}%", accuracy * 100.0);
    }

    fn on_finished(&mut self, _epoch: usize, accuracy: f32) {
        println!(
            "Training finished with final accuracy: {:.2}%",
            accuracy * 100.0
        );
    }
}
