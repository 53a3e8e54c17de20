use log::{debug, trace};
use rand::Rng;

use crate::activation::transfer;
use crate::error::{NetError, Result};
use crate::loss::{RecentAverage, RmsError};
use crate::network::connection::Connection;
use crate::network::hyper_params::HyperParams;
use crate::network::layer::Layer;
use crate::network::topology::Topology;

/// A fully-connected tanh network trained online by backpropagation with
/// momentum.
///
/// Call `feed_forward` and `back_prop` alternately, one sample at a time.
/// Every layer ends with a bias neuron whose output stays at `1.0`.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    topology: Topology,
    params: HyperParams,
    current_error: f64,
    recent_average: RecentAverage,
}

impl Network {
    /// Builds a network with weights drawn from the thread-local RNG.
    ///
    /// `topology` lists the neuron count per layer, input first, bias
    /// excluded, e.g. `&[2, 4, 1]`.
    pub fn new(topology: &[usize]) -> Result<Network> {
        Network::with_rng(topology, &mut rand::thread_rng())
    }

    /// Builds a network drawing initial weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(topology: &[usize], rng: &mut R) -> Result<Network> {
        let topology = Topology::new(topology.to_vec())?;
        Ok(Network::from_topology(topology, rng))
    }

    pub fn from_topology<R: Rng + ?Sized>(topology: Topology, rng: &mut R) -> Network {
        let layers: Vec<Layer> = topology.sizes().iter().enumerate()
            .map(|(i, &size)| Layer::new(size, topology.fan_out(i), rng))
            .collect();

        for (i, layer) in layers.iter().enumerate() {
            debug!("layer {} has {} neurons (bias included)", i, layer.len());
        }

        let params = HyperParams::default();
        Network {
            layers,
            topology,
            params,
            current_error: 0.0,
            recent_average: RecentAverage::new(params.smoothing_factor),
        }
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    pub fn hyper_params(&self) -> HyperParams {
        self.params
    }

    /// Replaces the training tunables; takes effect on the next `back_prop`.
    pub fn set_hyper_params(&mut self, params: HyperParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        self.recent_average.smoothing_factor = params.smoothing_factor;
        Ok(())
    }

    pub fn set_eta(&mut self, eta: f64) -> Result<()> {
        self.set_hyper_params(HyperParams { eta, ..self.params })
    }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        self.set_hyper_params(HyperParams { alpha, ..self.params })
    }

    pub fn set_smoothing_factor(&mut self, smoothing_factor: f64) -> Result<()> {
        self.set_hyper_params(HyperParams { smoothing_factor, ..self.params })
    }

    // -----------------------------------------------------------------------
    // Forward pass
    // -----------------------------------------------------------------------

    /// Assigns `inputs` to the input neurons and propagates activations to
    /// the output layer.
    ///
    /// `inputs` may be shorter than the input layer; the remaining input
    /// neurons keep their previous value. A longer vector is rejected before
    /// anything is touched.
    pub fn feed_forward(&mut self, inputs: &[f64]) -> Result<()> {
        let capacity = self.layers[0].len() - 1;
        if inputs.len() > capacity {
            return Err(NetError::InputSizeMismatch {
                expected: capacity,
                actual: inputs.len(),
            });
        }

        for (neuron, &value) in self.layers[0].non_bias_mut().iter_mut().zip(inputs) {
            neuron.output = value;
        }

        for i in 1..self.layers.len() {
            let (done, rest) = self.layers.split_at_mut(i);
            let prev = &done[i - 1];
            for (index, neuron) in rest[0].non_bias_mut().iter_mut().enumerate() {
                neuron.output = transfer(prev.weighted_sum(index));
            }
        }
        Ok(())
    }

    /// `feed_forward` followed by `results`.
    pub fn predict(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.feed_forward(inputs)?;
        Ok(self.results())
    }

    // -----------------------------------------------------------------------
    // Backward pass
    // -----------------------------------------------------------------------

    /// Computes gradients against `targets` and updates every connection
    /// weight. Uses the activations left by the last `feed_forward`.
    pub fn back_prop(&mut self, targets: &[f64]) -> Result<()> {
        let last = self.layers.len() - 1;
        let expected = self.layers[last].len() - 1;
        if targets.len() != expected {
            return Err(NetError::TargetSizeMismatch {
                expected,
                actual: targets.len(),
            });
        }

        // Overall error (RMS of output errors) and its running average.
        self.current_error = RmsError::of(&self.layers[last].outputs(), targets);
        self.recent_average.push(self.current_error);
        trace!(
            "back_prop: error {:.6}, recent average {:.6}",
            self.current_error,
            self.recent_average.value
        );

        for (neuron, &target) in self.layers[last].non_bias_mut().iter_mut().zip(targets) {
            neuron.calculate_output_gradient(target);
        }

        // Hidden layers, last to first. The input layer gets no gradient.
        for i in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let next = &tail[0];
            for neuron in head[i].neurons_mut() {
                neuron.calculate_hidden_gradient(next);
            }
        }

        // Weights feeding layer i live on the neurons of layer i - 1.
        let HyperParams { eta, alpha, .. } = self.params;
        for i in (1..=last).rev() {
            let (head, tail) = self.layers.split_at_mut(i);
            let prev = &mut head[i - 1];
            for (index, neuron) in tail[0].non_bias().iter().enumerate() {
                for source in prev.neurons_mut() {
                    let input = source.output;
                    source.outgoing[index].update(input, neuron.gradient, eta, alpha);
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reporting
    // -----------------------------------------------------------------------

    /// RMS error of the most recent `back_prop`.
    pub fn current_error(&self) -> f64 {
        self.current_error
    }

    /// Running average of the RMS error; see `HyperParams::smoothing_factor`.
    pub fn average_error(&self) -> f64 {
        self.recent_average.value
    }

    /// Output activations, bias excluded.
    pub fn results(&self) -> Vec<f64> {
        self.layers[self.layers.len() - 1].outputs()
    }

    /// Output activations as `"%f "`-style text, e.g. `"0.912345 "`.
    pub fn results_string(&self) -> String {
        self.results().iter().map(|v| format!("{v:.6} ")).collect()
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// The connection from neuron `from` of `layer` to neuron `to` of the
    /// next layer.
    pub fn connection(&self, layer: usize, from: usize, to: usize) -> Option<&Connection> {
        self.layers.get(layer)?.neuron(from)?.outgoing.get(to)
    }

    pub fn weight(&self, layer: usize, from: usize, to: usize) -> Option<f64> {
        self.connection(layer, from, to).map(|c| c.weight)
    }

    /// Overwrites one weight and clears its momentum. Returns the previous
    /// weight, or `None` when no such connection exists.
    pub fn set_weight(&mut self, layer: usize, from: usize, to: usize, weight: f64) -> Option<f64> {
        let connection = self.layers.get_mut(layer)?
            .neurons_mut()
            .get_mut(from)?
            .outgoing
            .get_mut(to)?;
        let previous = connection.weight;
        *connection = Connection::with_weight(weight);
        Some(previous)
    }
}
