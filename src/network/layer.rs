use rand::Rng;

use crate::network::neuron::Neuron;

/// Ordered neurons of one layer; the last slot is always the bias neuron.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Builds `size` regular neurons plus a bias neuron, each with
    /// `num_outputs` outgoing connections.
    pub fn new<R: Rng + ?Sized>(size: usize, num_outputs: usize, rng: &mut R) -> Layer {
        let mut neurons: Vec<Neuron> = (0..=size)
            .map(|_| Neuron::new(num_outputs, rng))
            .collect();
        if let Some(bias) = neurons.last_mut() {
            bias.output = 1.0;
        }
        Layer { neurons }
    }

    /// Neuron count including the bias.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neuron(&self, index: usize) -> Option<&Neuron> {
        self.neurons.get(index)
    }

    pub fn bias(&self) -> &Neuron {
        &self.neurons[self.neurons.len() - 1]
    }

    /// Every neuron except the trailing bias.
    pub fn non_bias(&self) -> &[Neuron] {
        &self.neurons[..self.neurons.len() - 1]
    }

    pub(crate) fn non_bias_mut(&mut self) -> &mut [Neuron] {
        let end = self.neurons.len() - 1;
        &mut self.neurons[..end]
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Weighted input of neuron `target` in the next layer, bias included.
    pub(crate) fn weighted_sum(&self, target: usize) -> f64 {
        self.neurons.iter()
            .map(|n| n.output * n.outgoing[target].weight)
            .sum()
    }

    pub fn outputs(&self) -> Vec<f64> {
        self.non_bias().iter().map(Neuron::output).collect()
    }
}
