use rand::Rng;

use crate::activation::{sigmoid, sigmoid_prime};
use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Single-hidden-layer perceptron with sigmoid activations and no biases.
///
/// `weights_ih` is `hidden × input` and `weights_ho` is `output × hidden`.
/// Shapes are fixed at construction; training only changes entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input_size: usize,
    hidden_size: usize,
    output_size: usize,
    learning_rate: f64,
    weights_ih: Matrix,
    weights_ho: Matrix,
}

/// Activations retained from one forward pass.
struct Forward {
    hidden: Matrix,
    output: Matrix,
}

impl Network {
    /// Builds a network with every weight drawn from N(0, 1).
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Network {
        let weights_ih = Matrix::standard_normal(hidden_size, input_size, rng);
        let weights_ho = Matrix::standard_normal(output_size, hidden_size, rng);
        tracing::trace!(?weights_ih, ?weights_ho, "initial weights");

        Network {
            input_size,
            hidden_size,
            output_size,
            learning_rate,
            weights_ih,
            weights_ho,
        }
    }

    /// Builds a network from explicit weights.
    ///
    /// Sizes are read off the matrices; `weights_ho` must have as many
    /// columns as `weights_ih` has rows.
    pub fn from_weights(weights_ih: Matrix, weights_ho: Matrix, learning_rate: f64) -> Result<Network> {
        if weights_ih.rows == 0 || weights_ih.cols == 0 || weights_ho.rows == 0 {
            return Err(Error::Shape("weight matrices must be non-empty".into()));
        }
        if weights_ho.cols != weights_ih.rows {
            return Err(Error::Shape(format!(
                "input->hidden is {}x{} but hidden->output is {}x{}",
                weights_ih.rows, weights_ih.cols, weights_ho.rows, weights_ho.cols
            )));
        }
        let ragged = |m: &Matrix| m.data.len() != m.rows || m.data.iter().any(|r| r.len() != m.cols);
        if ragged(&weights_ih) || ragged(&weights_ho) {
            return Err(Error::Shape("weight rows have inconsistent lengths".into()));
        }

        Ok(Network {
            input_size: weights_ih.cols,
            hidden_size: weights_ih.rows,
            output_size: weights_ho.rows,
            learning_rate,
            weights_ih,
            weights_ho,
        })
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights_ih(&self) -> &Matrix {
        &self.weights_ih
    }

    pub fn weights_ho(&self) -> &Matrix {
        &self.weights_ho
    }

    /// Forward pass. Does not touch the weights.
    ///
    /// Panics if `input.len() != input_size`.
    pub fn predict(&self, input: &[f64]) -> Vec<f64> {
        let x = self.input_column(input);
        self.forward(&x).output.to_column_vec()
    }

    /// One step of stochastic backpropagation on a single example.
    ///
    /// Both error terms are computed from the pre-update weights before
    /// either matrix is modified.
    ///
    /// Panics if `input.len() != input_size` or `label.len() != output_size`.
    pub fn train(&mut self, input: &[f64], label: &[f64]) {
        assert_eq!(
            label.len(),
            self.output_size,
            "label has {} values, network expects {}",
            label.len(),
            self.output_size
        );
        let x = self.input_column(input);
        let y = Matrix::column(label);
        let Forward { hidden, output } = self.forward(&x);

        let output_error = &y - &output;
        let hidden_error = &self.weights_ho.transpose() * &output_error;

        // ΔW_ho = lr * (e_o ⊙ σ'(o)) · hᵀ
        let output_delta = output_error.hadamard(&output.map(sigmoid_prime));
        let delta_ho = (&output_delta * &hidden.transpose()).scale(self.learning_rate);

        // ΔW_ih = lr * (e_h ⊙ σ'(h)) · xᵀ
        let hidden_delta = hidden_error.hadamard(&hidden.map(sigmoid_prime));
        let delta_ih = (&hidden_delta * &x.transpose()).scale(self.learning_rate);

        tracing::trace!(?output_error, ?hidden_error, "backprop errors");

        self.weights_ho.add_assign(&delta_ho);
        self.weights_ih.add_assign(&delta_ih);
    }

    fn input_column(&self, input: &[f64]) -> Matrix {
        assert_eq!(
            input.len(),
            self.input_size,
            "input has {} values, network expects {}",
            input.len(),
            self.input_size
        );
        Matrix::column(input)
    }

    fn forward(&self, x: &Matrix) -> Forward {
        let hidden = (&self.weights_ih * x).map(sigmoid);
        let output = (&self.weights_ho * &hidden).map(sigmoid);
        Forward { hidden, output }
    }
}
