use serde::{Deserialize, Serialize};

/// Snapshot of one online training step, emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the loop
/// sends one `StepStats` every `report_every` iterations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    pub inputs: Vec<f64>,
    /// Output activations after the forward pass of this step.
    pub outputs: Vec<f64>,
    pub targets: Vec<f64>,
    /// RMS error of this step.
    pub current_error: f64,
    /// Running average error after this step.
    pub average_error: f64,
    /// Wall-clock time since the loop started, in milliseconds.
    pub elapsed_ms: u64,
}

/// What `train_loop` reports once it returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSummary {
    pub iterations_run: usize,
    pub final_error: f64,
    pub final_average_error: f64,
    /// `true` when the stop flag or a dropped progress receiver ended the run.
    pub stopped_early: bool,
}
