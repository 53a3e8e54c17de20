use momentum_nn::{NetError, Network};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn layer_sizes_include_bias() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let depth = rng.gen_range(2..6);
        let topology: Vec<usize> = (0..depth).map(|_| rng.gen_range(1..8)).collect();
        let network = Network::with_rng(&topology, &mut rng).unwrap();
        assert_eq!(network.layers().len(), topology.len());
        for (layer, &size) in network.layers().iter().zip(&topology) {
            assert_eq!(layer.len(), size + 1);
            assert_eq!(layer.bias().output(), 1.0);
        }
    }
}

#[test]
fn single_connection_closed_form() {
    let mut network = Network::with_rng(&[1, 1], &mut StdRng::seed_from_u64(5)).unwrap();
    network.set_weight(0, 0, 0, 0.5).unwrap();
    network.set_weight(0, 1, 0, -0.2).unwrap();
    network.feed_forward(&[1.0]).unwrap();
    assert_close(network.results()[0], (1.0f64 * 0.5 + 1.0 * -0.2).tanh());
}

#[test]
fn zero_weighted_sum_gives_zero_output() {
    let mut network = Network::with_rng(&[1, 1], &mut StdRng::seed_from_u64(5)).unwrap();
    network.set_weight(0, 0, 0, 0.5).unwrap();
    network.set_weight(0, 1, 0, -0.5).unwrap();
    network.feed_forward(&[1.0]).unwrap();
    assert_eq!(network.results(), vec![0.0]);
}

#[test]
fn positive_error_raises_weights_from_positive_neurons() {
    let mut network = Network::with_rng(&[2, 3, 1], &mut StdRng::seed_from_u64(8)).unwrap();
    network.feed_forward(&[0.6, 0.9]).unwrap();
    let output = network.results()[0];
    assert!(output < 0.999);

    let hidden = network.layer(1).unwrap().clone();
    network.back_prop(&[1.0]).unwrap();

    for (from, neuron) in hidden.neurons().iter().enumerate() {
        if neuron.output() > 0.0 {
            let before = neuron.connections()[0].weight;
            assert!(network.weight(1, from, 0).unwrap() > before);
        }
    }
}

#[test]
fn input_size_mismatch_leaves_outputs_untouched() {
    let mut network = Network::with_rng(&[2, 1], &mut StdRng::seed_from_u64(3)).unwrap();
    let outputs_before: Vec<Vec<f64>> = network.layers().iter()
        .map(|l| l.neurons().iter().map(|n| n.output()).collect())
        .collect();

    match network.feed_forward(&[1.0, 2.0, 3.0]) {
        Err(NetError::InputSizeMismatch { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 3);
        }
        other => panic!("expected InputSizeMismatch, got {other:?}"),
    }

    let outputs_after: Vec<Vec<f64>> = network.layers().iter()
        .map(|l| l.neurons().iter().map(|n| n.output()).collect())
        .collect();
    assert_eq!(outputs_before, outputs_after);
}

#[test]
fn error_message_names_sizes() {
    let mut network = Network::with_rng(&[2, 1], &mut StdRng::seed_from_u64(3)).unwrap();
    network.feed_forward(&[1.0, 0.0]).unwrap();
    let err = network.back_prop(&[1.0, 0.0]).unwrap_err();
    assert_eq!(err.to_string(), "target has 2 values but the output layer has 1");
}
