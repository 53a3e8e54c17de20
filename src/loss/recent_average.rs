use serde::{Deserialize, Serialize};

/// Leaky running average of a scalar metric.
///
/// `smoothing_factor` is roughly the number of recent samples the average
/// spans. At `0.0` every `push` replaces the value outright, so no smoothing
/// happens until the caller configures a positive factor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentAverage {
    pub value: f64,
    pub smoothing_factor: f64,
}

impl RecentAverage {
    pub fn new(smoothing_factor: f64) -> RecentAverage {
        RecentAverage { value: 0.0, smoothing_factor }
    }

    /// Folds `sample` into the average and returns the new value.
    pub fn push(&mut self, sample: f64) -> f64 {
        self.value = (self.value * self.smoothing_factor + sample) / (self.smoothing_factor + 1.0);
        self.value
    }
}
