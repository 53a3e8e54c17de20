pub mod sample;
pub mod xor;

pub use sample::Sample;
pub use xor::{random_xor_sample, xor_samples};
