use rand::Rng;

use crate::activation::transfer_derivative;
use crate::network::connection::Connection;
use crate::network::layer::Layer;

/// One unit of a layer.
///
/// A neuron owns the connections leaving it: `outgoing[k]` feeds neuron `k`
/// of the next layer. It does not store its own position; the owning layer's
/// slot index is the only address other neurons use.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub(crate) output: f64,
    pub(crate) outgoing: Vec<Connection>,
    pub(crate) gradient: f64,
}

impl Neuron {
    pub fn new<R: Rng + ?Sized>(num_outputs: usize, rng: &mut R) -> Neuron {
        let outgoing = (0..num_outputs).map(|_| Connection::random(rng)).collect();
        Neuron { output: 0.0, outgoing, gradient: 0.0 }
    }

    /// Last activation (or the externally assigned value for input neurons).
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Local error gradient from the most recent backward pass.
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn connections(&self) -> &[Connection] {
        &self.outgoing
    }

    pub(crate) fn calculate_output_gradient(&mut self, target: f64) {
        let delta = target - self.output;
        self.gradient = delta * transfer_derivative(self.output);
    }

    pub(crate) fn calculate_hidden_gradient(&mut self, next_layer: &Layer) {
        let dow = self.sum_dow(next_layer);
        self.gradient = dow * transfer_derivative(self.output);
    }

    /// Sum of this neuron's contributions to the next layer's error.
    /// The next layer's bias never receives error, so it is skipped.
    fn sum_dow(&self, next_layer: &Layer) -> f64 {
        self.outgoing.iter().zip(next_layer.non_bias())
            .map(|(c, next)| c.weight * next.gradient)
            .sum()
    }
}
