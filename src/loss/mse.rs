pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²). Zero for empty input.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len().min(expected.len());
        if n == 0 {
            return 0.0;
        }
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n as f64
    }
}
