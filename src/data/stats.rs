use crate::data::sample::Sample;

/// Observed range of one column over the full dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    pub min: f64,
    pub max: f64,
}

impl ColumnStats {
    /// A column whose values are all equal has no range to scale by.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Min-max scales `x` into [0, 1]. Degenerate columns map to `0.0`.
    pub fn normalize(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            (x - self.min) / (self.max - self.min)
        }
    }
}

/// Computes min/max for every column in the first sample's layout.
///
/// Returns an empty vector for an empty dataset. Samples are expected to share
/// one width; columns missing from a shorter sample are ignored for it.
pub fn column_stats(samples: &[Sample]) -> Vec<ColumnStats> {
    let Some(first) = samples.first() else {
        return Vec::new();
    };

    (0..first.len())
        .map(|col| {
            samples
                .iter()
                .filter_map(|s| s.get(col).copied())
                .fold(
                    ColumnStats { min: f64::INFINITY, max: f64::NEG_INFINITY },
                    |acc, v| ColumnStats { min: acc.min.min(v), max: acc.max.max(v) },
                )
        })
        .collect()
}

/// Rescales the first `feature_count` values of every sample in place.
///
/// Label values (indices `>= feature_count`) are left untouched.
pub fn normalize_features(samples: &mut [Sample], stats: &[ColumnStats], feature_count: usize) {
    let feature_count = feature_count.min(stats.len());

    for (col, s) in stats.iter().take(feature_count).enumerate() {
        if s.is_degenerate() {
            tracing::warn!(
                "Column {} is constant ({}); normalizing every value to 0.0",
                col, s.min
            );
        }
    }

    for sample in samples.iter_mut() {
        for (x, s) in sample.iter_mut().zip(stats.iter()).take(feature_count) {
            *x = s.normalize(*x);
        }
    }
}
