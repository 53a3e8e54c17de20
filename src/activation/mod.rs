pub mod activation;

pub use activation::{transfer, transfer_derivative};
