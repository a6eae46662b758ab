use std::fmt;

use crate::data::sample::Sample;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;

/// Outcome of running the network over a test set.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalReport {
    pub test_set_size: usize,
    pub correct: usize,
    /// Percentage of exact matches; `None` when there were no test samples.
    pub accuracy: Option<f64>,
    /// Mean squared error of the raw (unrounded) outputs; `None` when there
    /// were no test samples.
    pub mean_squared_error: Option<f64>,
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accuracy {
            Some(acc) => write!(
                f,
                "Samples: {}, Right: {}, Accuracy: {}%",
                self.test_set_size, self.correct, acc
            ),
            None => write!(f, "Samples: 0, no test samples to evaluate"),
        }
    }
}

/// Scores `network` on `test_set`.
///
/// Each output component is rounded to the nearest integer (halves away from
/// zero) and compared with the label suffix. A sample is a hit only if the
/// lengths agree and every component matches exactly. Samples too short to
/// hold a feature prefix count as misses.
pub fn evaluate(network: &Network, test_set: &[Sample]) -> EvalReport {
    let inputs = network.input_size();
    let mut correct = 0usize;
    let mut total_loss = 0.0;

    for sample in test_set {
        if sample.len() < inputs {
            continue;
        }
        let (features, label) = sample.split_at(inputs);
        let output = network.predict(features);
        total_loss += MseLoss::loss(&output, label);

        let rounded: Vec<f64> = output.iter().map(|v| v.round()).collect();
        if outputs_match(&rounded, label) {
            correct += 1;
        }
    }

    let n = test_set.len();
    let (accuracy, mean_squared_error) = if n == 0 {
        (None, None)
    } else {
        (Some(correct as f64 / n as f64 * 100.0), Some(total_loss / n as f64))
    };

    EvalReport {
        test_set_size: n,
        correct,
        accuracy,
        mean_squared_error,
    }
}

/// Exact element-wise equality; differing lengths are a miss.
fn outputs_match(output: &[f64], label: &[f64]) -> bool {
    if output.len() != label.len() {
        tracing::debug!(
            "Output has {} values but label has {}; counted as a miss",
            output.len(),
            label.len()
        );
        return false;
    }
    output.iter().zip(label.iter()).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    /// 2-2-1 network whose output is ~1 for (1, -1) and ~0 for (-1, 1).
    fn switch_network() -> Network {
        Network::from_weights(
            Matrix::from_data(vec![vec![20.0, 0.0], vec![0.0, 20.0]]),
            Matrix::from_data(vec![vec![10.0, -10.0]]),
            0.1,
        )
        .unwrap()
    }

    #[test]
    fn three_of_four_is_seventy_five_percent() {
        let test_set = vec![
            vec![1.0, -1.0, 1.0],
            vec![-1.0, 1.0, 0.0],
            vec![1.0, -1.0, 1.0],
            vec![-1.0, 1.0, 1.0],
        ];
        let report = evaluate(&switch_network(), &test_set);
        assert_eq!(report.test_set_size, 4);
        assert_eq!(report.correct, 3);
        assert_eq!(report.accuracy, Some(75.0));
        assert_eq!(report.to_string(), "Samples: 4, Right: 3, Accuracy: 75%");
    }

    #[test]
    fn empty_test_set_reports_no_accuracy() {
        let report = evaluate(&switch_network(), &[]);
        assert_eq!(report.test_set_size, 0);
        assert_eq!(report.accuracy, None);
        assert_eq!(report.mean_squared_error, None);
        assert!(report.to_string().contains("no test samples"));
    }

    #[test]
    fn label_length_mismatch_is_a_miss() {
        let test_set = vec![vec![1.0, -1.0, 1.0, 0.0]];
        let report = evaluate(&switch_network(), &test_set);
        assert_eq!(report.correct, 0);
        assert_eq!(report.accuracy, Some(0.0));
    }

    #[test]
    fn outputs_match_requires_every_component() {
        assert!(outputs_match(&[1.0, 0.0], &[1.0, 0.0]));
        assert!(!outputs_match(&[1.0, 1.0], &[1.0, 0.0]));
        assert!(!outputs_match(&[1.0], &[1.0, 0.0]));
    }
}
