//! Append-only accuracy history.
//!
//! One value is recorded per completed epoch, in epoch order. The log is
//! never truncated or reordered during a run, so its length always equals
//! the number of epochs observed so far.

#[derive(Debug, Clone)]
/// Ordered log of per-epoch accuracy observations.
pub struct AccuracyLog {
    values: Vec<f32>,
    max: f32,
}

impl Default for AccuracyLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AccuracyLog {
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            max: f32::NEG_INFINITY,
        }
    }

    /// Append one observation.
    #[inline]
    pub fn push(&mut self, accuracy: f32) {
        if accuracy > self.max {
            self.max = accuracy;
        }
        self.values.push(accuracy);
    }

    #[inline]
    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    /// Returns true if nothing has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    /// Returns all observations in epoch order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Maximum observation so far.
    ///
    /// Panics if the log is empty.
    #[inline]
    pub fn max(&self) -> f32 {
        assert!(!self.values.is_empty(), "max of an empty log");
        self.max
    }

    /// Arithmetic mean of the last `min(window, len)` observations.
    ///
    /// Shorter histories use every available entry; there is no padding.
    ///
    /// Panics if the log is empty or `window == 0`.
    pub fn trailing_mean(&self, window: usize) -> f32 {
        assert!(!self.values.is_empty(), "trailing mean of an empty log");
        assert!(window > 0, "trailing mean window must be > 0");

        let n = window.min(self.values.len());
        let tail = &self.values[self.values.len() - n..];
        let sum: f32 = tail.iter().sum();
        sum / n as f32
    }

    /// Forget all observations (for reuse across runs).
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
        self.max = f32::NEG_INFINITY;
    }
}
