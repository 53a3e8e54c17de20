use thiserror::Error;

/// Errors surfaced by network construction, the two training passes and
/// configuration loading.
#[derive(Debug, Error)]
pub enum NetError {
    /// Fewer than two layers, or a layer with no neurons.
    #[error("invalid topology: {reason}")]
    InvalidTopology { reason: String },

    /// `feed_forward` received more values than the input layer can hold.
    #[error("input has {actual} values but the input layer holds at most {expected}")]
    InputSizeMismatch { expected: usize, actual: usize },

    /// `back_prop` received a target vector that does not match the output layer.
    #[error("target has {actual} values but the output layer has {expected}")]
    TargetSizeMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
