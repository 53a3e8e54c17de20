use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::step_stats::StepStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`   : number of online steps, one randomly drawn sample each
/// - `report_every` : emit a `StepStats` every this many steps; `0` disables
///                    reporting
/// - `progress_tx`  : optional channel sender for `StepStats`.  If the
///                    receiver is dropped the loop terminates early.
/// - `stop_flag`    : optional atomic flag; when set to `true` from another
///                    thread the loop terminates before the next step.
///
/// Learning rate, momentum and error smoothing are not here: they belong to
/// the `Network` (see `HyperParams`).
pub struct TrainConfig {
    pub iterations: usize,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<StepStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(iterations: usize, report_every: usize) -> Self {
        TrainConfig {
            iterations,
            report_every,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
