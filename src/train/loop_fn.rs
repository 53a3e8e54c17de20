use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::sample::Sample;
use crate::error::{NetError, Result};
use crate::network::network::Network;
use crate::train::step_stats::{StepStats, TrainSummary};
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_step;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` online for `config.iterations` steps, each on one sample
/// drawn uniformly at random from `samples`.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// `InvalidConfig` when `samples` is empty; size mismatches between a sample
/// and the network abort the run with the error from the failing pass.
pub fn train_loop<R: Rng + ?Sized>(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
    rng: &mut R,
) -> Result<TrainSummary> {
    if samples.is_empty() {
        return Err(NetError::InvalidConfig {
            reason: "training needs at least one sample".to_string(),
        });
    }

    let t_start = Instant::now();
    let mut iterations_run = 0;
    let mut stopped_early = false;

    for iteration in 1..=config.iterations {
        if stop_requested(config) {
            warn!("training stopped by flag after {} iteration(s)", iterations_run);
            stopped_early = true;
            break;
        }

        let sample = samples.choose(rng).ok_or_else(|| NetError::InvalidConfig {
            reason: "training needs at least one sample".to_string(),
        })?;
        train_step(network, sample)?;
        iterations_run = iteration;

        if config.report_every == 0 || iteration % config.report_every != 0 {
            continue;
        }

        info!(
            "iteration {}/{}: error {:.6}, average {:.6}",
            iteration,
            config.iterations,
            network.current_error(),
            network.average_error()
        );

        if let Some(ref tx) = config.progress_tx {
            let stats = StepStats {
                iteration,
                total_iterations: config.iterations,
                inputs: sample.inputs.clone(),
                outputs: network.results(),
                targets: sample.targets.clone(),
                current_error: network.current_error(),
                average_error: network.average_error(),
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                warn!("progress receiver dropped after {} iteration(s)", iteration);
                stopped_early = iteration < config.iterations;
                break;
            }
        }
    }

    Ok(TrainSummary {
        iterations_run,
        final_error: network.current_error(),
        final_average_error: network.average_error(),
        stopped_early,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map(|flag| flag.load(Ordering::Relaxed))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::xor::xor_samples;
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::atomic::AtomicBool;
    use std::sync::{mpsc, Arc};

    fn xor_net() -> Network {
        Network::with_rng(&[2, 4, 1], &mut StdRng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn empty_samples_rejected() {
        let mut net = xor_net();
        let config = TrainConfig::new(10, 1);
        let result = train_loop(&mut net, &[], &config, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(NetError::InvalidConfig { .. })));
    }

    #[test]
    fn runs_requested_iterations_and_reports() {
        let mut net = xor_net();
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(100, 10);
        config.progress_tx = Some(tx);

        let summary = train_loop(&mut net, &xor_samples(), &config, &mut StdRng::seed_from_u64(0)).unwrap();
        drop(config);

        assert_eq!(summary.iterations_run, 100);
        assert!(!summary.stopped_early);
        let stats: Vec<StepStats> = rx.iter().collect();
        assert_eq!(stats.len(), 10);
        assert_eq!(stats[0].iteration, 10);
        assert_eq!(stats[9].iteration, 100);
        assert!(stats.iter().all(|s| s.current_error >= 0.0 && s.outputs.len() == 1));
    }

    #[test]
    fn stop_flag_halts_before_first_step() {
        let mut net = xor_net();
        let before = net.clone();
        let mut config = TrainConfig::new(100, 0);
        config.stop_flag = Some(Arc::new(AtomicBool::new(true)));

        let summary = train_loop(&mut net, &xor_samples(), &config, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(summary.iterations_run, 0);
        assert!(summary.stopped_early);
        assert_eq!(net.layers(), before.layers());
    }

    #[test]
    fn dropped_receiver_stops_training() {
        let mut net = xor_net();
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut config = TrainConfig::new(100, 5);
        config.progress_tx = Some(tx);

        let summary = train_loop(&mut net, &xor_samples(), &config, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(summary.iterations_run, 5);
        assert!(summary.stopped_early);
    }

    #[test]
    fn mismatched_sample_aborts() {
        let mut net = xor_net();
        let samples = vec![Sample::new(vec![0.0, 1.0, 1.0], vec![1.0])];
        let config = TrainConfig::new(10, 0);
        let result = train_loop(&mut net, &samples, &config, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(NetError::InputSizeMismatch { .. })));
    }
}
