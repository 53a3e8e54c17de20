use momentum_nn::data::{random_xor_sample, xor_samples};
use momentum_nn::{train_loop, Network, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[test]
fn error_trends_down_on_xor() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::with_rng(&[2, 4, 1], &mut rng).unwrap();
    assert_eq!(network.hyper_params().eta, 0.15);
    assert_eq!(network.hyper_params().alpha, 0.5);

    let mut errors = Vec::with_capacity(5000);
    for _ in 0..5000 {
        let sample = random_xor_sample(&mut rng);
        network.feed_forward(&sample.inputs).unwrap();
        network.back_prop(&sample.targets).unwrap();
        assert!(network.current_error() >= 0.0);
        // Smoothing factor defaults to zero.
        assert_eq!(network.average_error(), network.current_error());
        errors.push(network.average_error());
    }

    let first = mean(&errors[..100]);
    let last = mean(&errors[errors.len() - 100..]);
    assert!(last < first, "average error did not drop: first {first:.4}, last {last:.4}");
}

#[test]
fn smoothed_average_trends_down_with_train_loop() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::with_rng(&[2, 4, 1], &mut rng).unwrap();
    network.set_smoothing_factor(100.0).unwrap();

    // The average starts from zero; give it time to catch up with the real
    // error before taking the early reading.
    let early = train_loop(&mut network, &xor_samples(), &TrainConfig::new(1000, 0), &mut rng).unwrap();
    let late = train_loop(&mut network, &xor_samples(), &TrainConfig::new(5000, 0), &mut rng).unwrap();

    assert_eq!(early.iterations_run, 1000);
    assert_eq!(late.iterations_run, 5000);
    assert!(late.final_average_error < early.final_average_error);
}
