use rand::Rng;

use crate::data::sample::Sample;

/// The four rows of the XOR truth table.
pub fn xor_samples() -> Vec<Sample> {
    [(0u8, 0u8), (0, 1), (1, 0), (1, 1)]
        .iter()
        .map(|&(a, b)| xor_sample(a, b))
        .collect()
}

/// Two random bits and their XOR.
pub fn random_xor_sample<R: Rng + ?Sized>(rng: &mut R) -> Sample {
    xor_sample(rng.gen_range(0..2), rng.gen_range(0..2))
}

fn xor_sample(a: u8, b: u8) -> Sample {
    Sample::new(vec![a as f64, b as f64], vec![(a ^ b) as f64])
}
