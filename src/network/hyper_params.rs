use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Training tunables carried by each `Network`.
///
/// - `eta`              : learning rate in [0, 1]
/// - `alpha`            : momentum, the share of the previous weight update
///                        added to the next one, in [0, 1]
/// - `smoothing_factor` : how many recent samples the running average error
///                        spans. The default `0.0` means *no smoothing*: the
///                        average simply equals the latest error. Set it
///                        deliberately (e.g. `100.0`) to get a trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperParams {
    pub eta: f64,
    pub alpha: f64,
    pub smoothing_factor: f64,
}

impl Default for HyperParams {
    fn default() -> Self {
        HyperParams {
            eta: 0.15,
            alpha: 0.5,
            smoothing_factor: 0.0,
        }
    }
}

impl HyperParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.eta) {
            return Err(NetError::InvalidConfig {
                reason: format!("eta must be in [0, 1], got {}", self.eta),
            });
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(NetError::InvalidConfig {
                reason: format!("alpha must be in [0, 1], got {}", self.alpha),
            });
        }
        if !self.smoothing_factor.is_finite() || self.smoothing_factor < 0.0 {
            return Err(NetError::InvalidConfig {
                reason: format!("smoothing_factor must be finite and >= 0, got {}", self.smoothing_factor),
            });
        }
        Ok(())
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads parameters from JSON; missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<HyperParams> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let params: HyperParams = serde_json::from_reader(reader)?;
        params.validate()?;
        Ok(params)
    }
}
