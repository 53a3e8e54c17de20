use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Neuron count of every layer, input first, bias neurons excluded.
///
/// Always has at least two layers and no empty layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Topology(Vec<usize>);

impl Topology {
    pub fn new(sizes: Vec<usize>) -> Result<Topology> {
        if sizes.len() < 2 {
            return Err(NetError::InvalidTopology {
                reason: format!("need at least an input and an output layer, got {} layer(s)", sizes.len()),
            });
        }
        if let Some(i) = sizes.iter().position(|&n| n == 0) {
            return Err(NetError::InvalidTopology {
                reason: format!("layer {i} has no neurons"),
            });
        }
        Ok(Topology(sizes))
    }

    pub fn sizes(&self) -> &[usize] {
        &self.0
    }

    pub fn layer_count(&self) -> usize {
        self.0.len()
    }

    pub fn input_size(&self) -> usize {
        self.0[0]
    }

    pub fn output_size(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Outgoing connections per neuron of layer `i`: the next layer's size,
    /// or zero for the output layer.
    pub fn fan_out(&self, i: usize) -> usize {
        self.0.get(i + 1).copied().unwrap_or(0)
    }
}

impl TryFrom<Vec<usize>> for Topology {
    type Error = NetError;

    fn try_from(sizes: Vec<usize>) -> Result<Topology> {
        Topology::new(sizes)
    }
}

impl From<Topology> for Vec<usize> {
    fn from(t: Topology) -> Vec<usize> {
        t.0
    }
}

/// Parses a comma-separated list such as `"2,4,1"`.
impl FromStr for Topology {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Topology> {
        let sizes = s.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<usize>().map_err(|_| NetError::InvalidTopology {
                    reason: format!("'{part}' is not a non-negative layer size"),
                })
            })
            .collect::<Result<Vec<usize>>>()?;
        Topology::new(sizes)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
