pub mod activation;
pub mod data;
pub mod error;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use data::sample::Sample;
pub use error::{NetError, Result};
pub use network::hyper_params::HyperParams;
pub use network::network::Network;
pub use network::topology::Topology;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::trainer::train_step;
