/// One row of numeric data: a feature prefix followed by the encoded label.
///
/// Every sample in a dataset has `inputs + outputs` values.
pub type Sample = Vec<f64>;

/// An ordered collection of samples.
pub type Dataset = Vec<Sample>;

/// Splits a sample at the input boundary into `(features, label)`.
///
/// Panics if the sample is shorter than `inputs`.
pub fn split_sample(sample: &[f64], inputs: usize) -> (&[f64], &[f64]) {
    sample.split_at(inputs)
}
