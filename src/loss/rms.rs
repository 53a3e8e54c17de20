pub struct RmsError;

impl RmsError {
    /// Root-mean-square of `target - output` over paired entries.
    ///
    /// Returns `0.0` for empty input.
    pub fn of(outputs: &[f64], targets: &[f64]) -> f64 {
        let n = outputs.len().min(targets.len());
        if n == 0 {
            return 0.0;
        }
        let sum_sq: f64 = outputs.iter().zip(targets.iter())
            .map(|(o, t)| {
                let delta = t - o;
                delta * delta
            })
            .sum();
        (sum_sq / n as f64).sqrt()
    }
}
