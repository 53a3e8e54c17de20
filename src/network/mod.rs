pub mod connection;
pub mod hyper_params;
pub mod layer;
pub mod network;
pub mod neuron;
pub mod topology;

pub use connection::Connection;
pub use hyper_params::HyperParams;
pub use layer::Layer;
pub use network::Network;
pub use neuron::Neuron;
pub use topology::Topology;
