use rand::Rng;

/// A weighted link from one neuron to a neuron in the next layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub weight: f64,
    /// The last update applied to `weight`; feeds the momentum term.
    pub delta_weight: f64,
}

impl Connection {
    /// Uniform random weight in [0, 1), no prior update.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Connection {
        Connection::with_weight(rng.gen::<f64>())
    }

    pub fn with_weight(weight: f64) -> Connection {
        Connection { weight, delta_weight: 0.0 }
    }

    /// Applies one gradient-descent-with-momentum update and returns the delta.
    ///
    /// `new_delta = eta * input * gradient + alpha * previous_delta`
    pub fn update(&mut self, input: f64, gradient: f64, eta: f64, alpha: f64) -> f64 {
        let new_delta = eta * input * gradient + alpha * self.delta_weight;
        self.delta_weight = new_delta;
        self.weight += new_delta;
        new_delta
    }
}
