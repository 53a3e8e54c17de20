use momentum_nn::data::random_xor_sample;
use momentum_nn::{Network, Result};

fn main() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut network = Network::with_rng(&[2, 4, 1], &mut rng)?;
    network.set_smoothing_factor(100.0)?;

    for (i, layer) in network.layers().iter().enumerate() {
        println!("Layer {i} has {} neurons", layer.len());
    }

    for step in 0..2000 {
        let sample = random_xor_sample(&mut rng);
        network.feed_forward(&sample.inputs)?;
        network.back_prop(&sample.targets)?;
        if step % 100 == 0 {
            println!(
                "Inputs: {:?} - Output: {}Target: {} (recent avg error {:.4})",
                sample.inputs,
                network.results_string(),
                sample.targets[0],
                network.average_error()
            );
        }
    }
    Ok(())
}
