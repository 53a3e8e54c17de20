// XOR trainer: builds a network, trains it online on random XOR pairs and
// prints each reported step.
//
// Run with:
//   cargo run -- --topology 2,4,1 --iterations 2000 --report-every 100
//   RUST_LOG=debug cargo run -- --smoothing 100
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use momentum_nn::data::xor::xor_samples;
use momentum_nn::{train_loop, HyperParams, NetError, Network, Topology, TrainConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Train a tanh network on XOR with backpropagation and momentum")]
struct Cli {
    /// neurons per layer, input first, bias excluded
    #[arg(long, default_value = "2,4,1")]
    topology: Topology,

    /// number of online training steps
    #[arg(long, default_value_t = 2000)]
    iterations: usize,

    /// print one line every this many steps
    #[arg(long, default_value_t = 1)]
    report_every: usize,

    /// seed for weights and sample order (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with eta / alpha / smoothing_factor; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// learning rate in [0, 1]
    #[arg(long)]
    eta: Option<f64>,

    /// momentum in [0, 1]
    #[arg(long)]
    alpha: Option<f64>,

    /// samples the running average error spans (0 = no smoothing)
    #[arg(long)]
    smoothing: Option<f64>,

    /// emit each report as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), NetError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let params = resolve_params(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = Network::from_topology(cli.topology.clone(), &mut rng);
    network.set_hyper_params(params)?;

    if network.topology().input_size() != 2 || network.topology().output_size() != 1 {
        return Err(NetError::InvalidTopology {
            reason: format!("XOR needs 2 inputs and 1 output, got {}", network.topology()),
        });
    }

    for (i, layer) in network.layers().iter().enumerate() {
        println!("Layer {} has {} neurons", i, layer.len());
    }

    let (tx, rx) = mpsc::channel();
    let mut config = TrainConfig::new(cli.iterations, cli.report_every);
    config.progress_tx = Some(tx);

    let worker = thread::spawn(move || {
        let summary = train_loop(&mut network, &xor_samples(), &config, &mut rng);
        summary.map(|s| (s, network))
    });

    for stats in rx {
        if cli.json {
            println!("{}", serde_json::to_string(&stats)?);
        } else {
            let output: Vec<String> = stats.outputs.iter().map(|v| format!("{v:.6}")).collect();
            println!(
                "Inputs: {:?} - Output: {} Target: {:?} (avg error {:.6})",
                stats.inputs,
                output.join(" "),
                stats.targets,
                stats.average_error
            );
        }
    }

    let (summary, mut network) = worker.join().map_err(|_| NetError::InvalidConfig {
        reason: "training thread panicked".to_string(),
    })??;

    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "Finished {} iteration(s): error {:.6}, average error {:.6}",
            summary.iterations_run, summary.final_error, summary.final_average_error
        );
        for sample in xor_samples() {
            network.feed_forward(&sample.inputs)?;
            println!("{:?} -> {}", sample.inputs, network.results_string().trim_end());
        }
    }
    Ok(())
}

fn resolve_params(cli: &Cli) -> Result<HyperParams, NetError> {
    let mut params = match &cli.config {
        Some(path) => HyperParams::load_json(&path.to_string_lossy())?,
        None => HyperParams::default(),
    };
    if let Some(eta) = cli.eta {
        params.eta = eta;
    }
    if let Some(alpha) = cli.alpha {
        params.alpha = alpha;
    }
    if let Some(smoothing) = cli.smoothing {
        params.smoothing_factor = smoothing;
    }
    params.validate()?;
    Ok(params)
}
