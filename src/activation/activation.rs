/// Neuron transfer function: tanh, output range (-1.0, 1.0).
pub fn transfer(x: f64) -> f64 {
    x.tanh()
}

/// Derivative of tanh expressed through its own output.
///
/// Takes `y = tanh(x)`, not `x`: `tanh'(x) = 1 - tanh(x)²`.
pub fn transfer_derivative(output: f64) -> f64 {
    1.0 - output * output
}
