use crate::{
    data::sample::Sample,
    error::Result,
    network::network::Network,
};

/// One online training step: forward pass on `sample.inputs`, then
/// backpropagation against `sample.targets`.
///
/// Returns the RMS error of the step. Size errors from either pass are
/// returned as-is; a failing forward pass means no weights were touched.
pub fn train_step(network: &mut Network, sample: &Sample) -> Result<f64> {
    network.feed_forward(&sample.inputs)?;
    network.back_prop(&sample.targets)?;
    Ok(network.current_error())
}
